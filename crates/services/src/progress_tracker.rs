use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;

use storage::repository::ProgressRepository;
use tracker_core::model::{Catalog, CompletionState, ProblemId, ProgressStats};

use crate::listener::CompletionListener;

/// The fixed storage key for the completed-id set. No other component may
/// read or write it.
pub const PROGRESS_KEY: &str = "leetcode_progress";

/// Result of a toggle, snapshotted after the in-memory mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Whether the id is completed after this toggle.
    pub now_completed: bool,
    /// The change marker after this toggle; strictly increasing.
    pub revision: u64,
    /// Stats derived from the new state.
    pub stats: ProgressStats,
}

/// Owns the authoritative completed-id set and keeps it mirrored in durable
/// storage.
///
/// The in-memory state is authoritative for the whole session: a failed
/// durable write is logged and swallowed, never surfaced to callers. All
/// query results are snapshots; mutation goes exclusively through
/// [`ProgressTracker::toggle`].
pub struct ProgressTracker {
    catalog: Arc<Catalog>,
    repo: Arc<dyn ProgressRepository>,
    state: Mutex<CompletionState>,
    listeners: Vec<Arc<dyn CompletionListener>>,
}

impl ProgressTracker {
    /// Initialize the tracker from durable storage.
    ///
    /// An absent value, an unreadable store, or a stored value that is not a
    /// JSON list of integer ids all yield the empty state. Nothing here is
    /// fatal.
    pub async fn load(catalog: Arc<Catalog>, repo: Arc<dyn ProgressRepository>) -> Self {
        Self::load_with_listeners(catalog, repo, Vec::new()).await
    }

    /// Like [`ProgressTracker::load`], with completion listeners attached.
    pub async fn load_with_listeners(
        catalog: Arc<Catalog>,
        repo: Arc<dyn ProgressRepository>,
        listeners: Vec<Arc<dyn CompletionListener>>,
    ) -> Self {
        let state = match repo.get(PROGRESS_KEY).await {
            Ok(Some(raw)) => parse_persisted(&raw).unwrap_or_else(|| {
                warn!("stored progress is not a list of ids; starting from empty");
                CompletionState::empty()
            }),
            Ok(None) => CompletionState::empty(),
            Err(err) => {
                warn!(error = %err, "could not read stored progress; starting from empty");
                CompletionState::empty()
            }
        };

        Self {
            catalog,
            repo,
            state: Mutex::new(state),
            listeners,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Whether `id` is currently completed. Defined for any id, catalog
    /// member or not.
    #[must_use]
    pub fn is_completed(&self, id: ProblemId) -> bool {
        self.lock_state().contains(id)
    }

    /// Stats for the current state. Pure, total, never fails.
    #[must_use]
    pub fn stats(&self) -> ProgressStats {
        ProgressStats::compute(&self.catalog, &self.lock_state())
    }

    /// Current change marker. Bumped by every toggle.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.lock_state().revision()
    }

    /// Sorted snapshot of the completed ids.
    #[must_use]
    pub fn completed_ids(&self) -> Vec<ProblemId> {
        self.lock_state().ids()
    }

    /// Flip completion of `id`: exactly one membership change per call, a
    /// pure involution across two calls.
    ///
    /// The in-memory mutation and the completion notification are committed
    /// before the durable write starts; once this returns,
    /// [`ProgressTracker::is_completed`] reflects the new state regardless
    /// of whether the write succeeded. Write failures are logged only.
    pub async fn toggle(&self, id: ProblemId) -> ToggleOutcome {
        let (direction, revision, stats, serialized) = {
            let mut state = self.lock_state();
            let direction = state.toggle(id);
            let revision = state.revision();
            let stats = ProgressStats::compute(&self.catalog, &state);
            let serialized = serde_json::to_string(&state.ids());
            (direction, revision, stats, serialized)
        };

        if direction.is_completing() {
            let problem = self.catalog.get(id);
            for listener in &self.listeners {
                listener.problem_completed(problem, id);
            }
        }

        match serialized {
            Ok(value) => {
                if let Err(err) = self.repo.set(PROGRESS_KEY, &value).await {
                    warn!(%id, error = %err, "failed to persist progress; in-memory state kept");
                }
            }
            Err(err) => {
                warn!(%id, error = %err, "failed to serialize progress; in-memory state kept");
            }
        }

        ToggleOutcome {
            now_completed: direction.is_completing(),
            revision,
            stats,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CompletionState> {
        // A poisoned mutex still holds the best-available state; recover it.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

fn parse_persisted(raw: &str) -> Option<CompletionState> {
    // Shape validation is all-or-nothing: any element that is not an integer
    // id rejects the whole value, which is then treated as absent.
    let ids: Vec<u64> = serde_json::from_str(raw).ok()?;
    Some(CompletionState::from_ids(ids.into_iter().map(ProblemId::new)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use storage::repository::InMemoryRepository;
    use tracker_core::model::Problem;

    fn catalog_of(ids: &[u64]) -> Arc<Catalog> {
        let problems = ids
            .iter()
            .map(|&id| {
                Problem::new(
                    ProblemId::new(id),
                    format!("Problem {id}"),
                    format!("https://leetcode.com/problems/{id}/"),
                    None,
                    None,
                )
            })
            .collect();
        Arc::new(Catalog::new(problems).unwrap())
    }

    #[tokio::test]
    async fn fresh_load_is_empty() {
        let repo = Arc::new(InMemoryRepository::new());
        let tracker = ProgressTracker::load(catalog_of(&[1, 2, 3]), repo).await;

        assert!(!tracker.is_completed(ProblemId::new(1)));
        let stats = tracker.stats();
        assert_eq!((stats.solved, stats.total, stats.percent), (0, 3, 0));
    }

    #[tokio::test]
    async fn toggle_reflects_membership_immediately() {
        let repo = Arc::new(InMemoryRepository::new());
        let tracker = ProgressTracker::load(catalog_of(&[1, 2, 3]), repo).await;

        let outcome = tracker.toggle(ProblemId::new(2)).await;
        assert!(outcome.now_completed);
        assert!(tracker.is_completed(ProblemId::new(2)));

        let outcome = tracker.toggle(ProblemId::new(2)).await;
        assert!(!outcome.now_completed);
        assert!(!tracker.is_completed(ProblemId::new(2)));
    }

    #[tokio::test]
    async fn toggle_persists_a_loadable_mirror() {
        let repo = Arc::new(InMemoryRepository::new());
        let tracker = ProgressTracker::load(
            catalog_of(&[1, 2, 3]),
            Arc::clone(&repo) as Arc<dyn ProgressRepository>,
        )
        .await;
        tracker.toggle(ProblemId::new(3)).await;
        tracker.toggle(ProblemId::new(1)).await;

        let raw = repo.get(PROGRESS_KEY).await.unwrap().unwrap();
        assert_eq!(raw, "[1,3]");
    }

    #[tokio::test]
    async fn toggle_accepts_ids_outside_the_catalog() {
        let repo = Arc::new(InMemoryRepository::new());
        let tracker = ProgressTracker::load(catalog_of(&[1]), repo).await;

        let outcome = tracker.toggle(ProblemId::new(42)).await;
        assert!(outcome.now_completed);
        assert!(tracker.is_completed(ProblemId::new(42)));
        // outside the catalog, so it never counts toward stats
        assert_eq!(tracker.stats().solved, 0);
    }

    #[tokio::test]
    async fn malformed_stored_values_load_as_empty() {
        for raw in [
            "\"a plain string\"",
            "{\"solved\": [1, 2]}",
            "[1, 2,",
            "[1, \"two\", 3]",
            "not json at all",
        ] {
            let repo = Arc::new(InMemoryRepository::new());
            repo.set(PROGRESS_KEY, raw).await.unwrap();
            let tracker = ProgressTracker::load(
                catalog_of(&[1, 2, 3]),
                Arc::clone(&repo) as Arc<dyn ProgressRepository>,
            )
            .await;
            assert_eq!(tracker.stats().solved, 0, "value {raw:?} should read as empty");
            assert_eq!(tracker.revision(), 0);
        }
    }

    #[tokio::test]
    async fn revision_increases_per_toggle() {
        let repo = Arc::new(InMemoryRepository::new());
        let tracker = ProgressTracker::load(catalog_of(&[1, 2, 3]), repo).await;
        assert_eq!(tracker.revision(), 0);
        let first = tracker.toggle(ProblemId::new(1)).await;
        let second = tracker.toggle(ProblemId::new(1)).await;
        assert_eq!(first.revision, 1);
        assert_eq!(second.revision, 2);
    }

    #[tokio::test]
    async fn stale_ids_survive_a_save_cycle() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.set(PROGRESS_KEY, "[1,99]").await.unwrap();
        let tracker = ProgressTracker::load(
            catalog_of(&[1, 2]),
            Arc::clone(&repo) as Arc<dyn ProgressRepository>,
        )
        .await;

        assert_eq!(tracker.stats().solved, 1);
        tracker.toggle(ProblemId::new(2)).await;

        // 99 is not in the catalog but is still mirrored to storage
        let raw = repo.get(PROGRESS_KEY).await.unwrap().unwrap();
        assert_eq!(raw, "[1,2,99]");
    }
}
