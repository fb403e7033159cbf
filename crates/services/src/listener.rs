use tracker_core::model::{Problem, ProblemId};

/// Subscription seam for the one-shot "marked complete" notification.
///
/// Fired by [`crate::ProgressTracker::toggle`] only on the
/// not-completed → completed transition; the reverse transition emits
/// nothing. `problem` is resolved from the catalog when the id is a real
/// catalog entry, so a front end can title its notification without a second
/// lookup. Implementations must not block.
pub trait CompletionListener: Send + Sync {
    fn problem_completed(&self, problem: Option<&Problem>, id: ProblemId);
}
