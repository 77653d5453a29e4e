//! Toast notifications: the browser side of [`econest::Notifier`].

use std::time::Duration;

use econest::{Notice, Notifier};
use leptos::prelude::*;
use tracing::{debug, warn};

/// Default lifetime when no toaster was provided.
const FALLBACK_LIFETIME: Duration = Duration::from_millis(4000);

/// One visible toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Unique within the page session
    pub id: u64,
    /// What to show
    pub notice: Notice,
}

#[derive(Debug, Clone, Default)]
struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

/// Handle to the toast stack. `Copy`, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    lifetime: Duration,
}

impl Toaster {
    /// New empty stack whose toasts disappear after `lifetime`.
    pub fn new(lifetime: Duration) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            lifetime,
        }
    }

    /// The toaster provided by [`crate::Providers`], or a detached one (notices
    /// are then logged but never rendered).
    pub fn from_context() -> Self {
        use_context::<Toaster>().unwrap_or_else(|| {
            warn!("no Toaster in context, notices will not be displayed");
            Toaster::new(FALLBACK_LIFETIME)
        })
    }

    /// Currently visible toasts, oldest first.
    pub fn visible(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.items.clone())
    }

    /// Push a notice onto the stack and return its id. `None` once the owning
    /// scope is gone.
    fn enqueue(&self, notice: Notice) -> Option<u64> {
        self.queue.try_update(|queue| {
            queue.next_id += 1;
            let id = queue.next_id;
            queue.items.push(Toast { id, notice });
            id
        })
    }

    /// Remove a toast early (close button) or when its timer fires.
    pub fn dismiss(&self, id: u64) {
        self.queue
            .try_update(|queue| queue.items.retain(|toast| toast.id != id));
    }
}

impl Notifier for Toaster {
    fn notify(&self, notice: Notice) {
        debug!(level = notice.level.as_label(), message = %notice.message, "toast");
        let Some(id) = self.enqueue(notice) else {
            return;
        };

        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), self.lifetime);
    }
}

/// Fixed-position stack rendering the toaster's queue.
#[component]
pub fn ToastStack(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                toaster
                    .visible()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = format!("toast toast-{}", toast.notice.level.as_label());
                        view! {
                            <div class=class>
                                <span class="toast-message">{toast.notice.message}</span>
                                <button
                                    class="toast-close"
                                    aria-label="Dismiss notification"
                                    on:click=move |_| toaster.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_queue_in_order_with_unique_ids() {
        let owner = Owner::new();
        owner.with(|| {
            let toaster = Toaster::new(Duration::from_secs(60));
            toaster.enqueue(Notice::error("first"));
            toaster.enqueue(Notice::success("second"));

            let visible = toaster.visible();
            assert_eq!(visible.len(), 2);
            assert_eq!(visible[0].notice.message, "first");
            assert_ne!(visible[0].id, visible[1].id);

            toaster.dismiss(visible[0].id);
            assert_eq!(toaster.visible().len(), 1);
            assert_eq!(toaster.visible()[0].notice.message, "second");
        });
    }
}
