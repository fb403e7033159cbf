use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dioxus::prelude::*;

use services::CompletionListener;
use tracker_core::model::{Problem, ProblemId};

/// One transient message for the toast stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Collects notification messages outside the render tree.
///
/// The hub is registered as a `CompletionListener` on the tracker, so the
/// "marked as completed" notification arrives here without the tracker
/// knowing anything about rendering. Views drain the queue after dispatching
/// an action and own the display lifetime of each toast.
#[derive(Default)]
pub struct ToastHub {
    next_id: AtomicU64,
    queue: Mutex<Vec<Toast>>,
}

impl ToastHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, message: impl Into<String>) {
        let toast = Toast {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
        };
        let mut queue = self
            .queue
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        queue.push(toast);
    }

    /// Take everything queued since the last drain.
    #[must_use]
    pub fn drain(&self) -> Vec<Toast> {
        let mut queue = self
            .queue
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        std::mem::take(&mut *queue)
    }
}

impl CompletionListener for ToastHub {
    fn problem_completed(&self, _problem: Option<&Problem>, _id: ProblemId) {
        self.push("Question marked as completed!");
    }
}

/// Show `toast` in the given stack and auto-dismiss it after a short delay.
pub fn show(mut toasts: Signal<Vec<Toast>>, toast: Toast) {
    let dismiss_id = toast.id;
    toasts.write().push(toast);
    spawn(async move {
        tokio::time::sleep(Duration::from_millis(2500)).await;
        toasts.write().retain(|t| t.id != dismiss_id);
    });
}

/// The rendered stack; fixed-position styling comes from the stylesheet.
#[component]
pub fn ToastStack(toasts: Vec<Toast>) -> Element {
    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                div { key: "{toast.id}", class: "toast", "{toast.message}" }
            }
        }
    }
}
