//! Transient notification queue. Every failure and every completed action in
//! the app surfaces exactly once through here.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

/// Handle for pushing notifications. Copy, so event handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn show(&mut self, message: impl Into<String>, level: ToastLevel) {
        let id = {
            let mut next = self.next_id;
            let value = next();
            next.set(value + 1);
            value
        };
        self.items.write().push(Toast {
            id,
            message: message.into(),
            level,
        });

        // Auto-dismiss after the standard three seconds. Only the browser has
        // a timer here; elsewhere toasts stay until clicked.
        #[cfg(target_arch = "wasm32")]
        {
            let mut items = self.items;
            spawn(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
                items.write().retain(|t| t.id != id);
            });
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(message, ToastLevel::Info);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, ToastLevel::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, ToastLevel::Error);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.write().retain(|t| t.id != id);
    }
}

/// Get the toast queue for the current tree.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Provider that owns the queue and renders the stack above the page.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let items = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    let toasts = use_context_provider(|| Toasts { items, next_id });

    rsx! {
        {children}

        div {
            class: "toast-stack",
            for toast in items() {
                div {
                    key: "{toast.id}",
                    class: format!("toast {}", toast.level.class()),
                    onclick: {
                        let mut toasts = toasts;
                        let id = toast.id;
                        move |_| toasts.dismiss(id)
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
