//! Transient notifications for mutation results

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification--success",
            NotificationKind::Error => "notification notification--error",
            NotificationKind::Info => "notification notification--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

/// Queue of visible notifications; the counter keeps ids unique
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    next_id: u64,
    pub items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

/// Context service; dismisses each notification after `dismiss_after_ms`
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
    dismiss_after_ms: u32,
}

impl NotificationService {
    pub fn new(dismiss_after_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
            dismiss_after_ms,
        }
    }

    pub fn push(&self, kind: NotificationKind, text: impl Into<String>) {
        let text = text.into();
        match kind {
            NotificationKind::Error => log::error!("{}", text),
            _ => log::info!("{}", text),
        }

        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, text));

        let queue = self.queue;
        let delay = self.dismiss_after_ms;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay).await;
            queue.update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NotificationKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NotificationKind::Error, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notification-host">
            <For
                each=move || service.queue.get().items
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() role="status">
                            <span class="notification__text">{n.text}</span>
                            <button
                                class="notification__close"
                                title="Dismiss"
                                on:click=move |_| service.dismiss(id)
                            >
                                {crate::shared::icons::icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_ids_are_unique_and_dismissable() {
        let mut q = NotificationQueue::default();
        let a = q.push(NotificationKind::Success, "Category created");
        let b = q.push(NotificationKind::Error, "Unable to reach the server");
        assert_ne!(a, b);
        assert_eq!(q.items.len(), 2);
        q.dismiss(a);
        assert_eq!(q.items.len(), 1);
        assert_eq!(q.items[0].id, b);
        q.dismiss(a);
        assert_eq!(q.items.len(), 1);
    }
}
