use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A message queued for toast display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub message: String,
    pub kind: ToastKind,
}

impl ToastMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

/// Auto-dismissing notification, fixed to the top-right corner.
/// Calls `on_close` after three seconds; UI feedback only, no data contract.
#[component]
pub fn Toast(toast: ToastMessage, on_close: EventHandler<()>) -> Element {
    use_effect(move || {
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_secs(3)).await;

            on_close.call(());
        });
    });

    let kind_class = match toast.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };

    rsx! {
        div {
            class: "toast {kind_class}",
            span { class: "toast-icon", if toast.kind == ToastKind::Error { "!" } else { "✓" } }
            span { "{toast.message}" }
        }
    }
}
