//! Transient notifications, one visible at a time.

use dioxus::prelude::*;

use crate::membership::sleep_ms;

/// How long a toast stays visible.
const DISMISS_MS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    message: String,
    kind: ToastKind,
    // distinguishes back-to-back toasts with identical text
    serial: u64,
}

/// Handle for raising toasts from any screen.
#[derive(Clone, Copy)]
pub struct ToastApi {
    current: Signal<Option<Toast>>,
    serial: Signal<u64>,
}

impl ToastApi {
    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Error);
    }

    fn show(&mut self, message: String, kind: ToastKind) {
        let serial = *self.serial.read() + 1;
        self.serial.set(serial);
        self.current.set(Some(Toast {
            message,
            kind,
            serial,
        }));

        let mut current = self.current;
        spawn(async move {
            sleep_ms(DISMISS_MS).await;
            // a newer toast may have replaced this one
            let still_ours = current
                .read()
                .as_ref()
                .map(|t| t.serial == serial)
                .unwrap_or(false);
            if still_ours {
                current.set(None);
            }
        });
    }
}

pub fn use_toast() -> ToastApi {
    use_context::<ToastApi>()
}

/// Mount once at the app root; renders the active toast above `children`.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let current = use_signal(|| None::<Toast>);
    let serial = use_signal(|| 0u64);
    use_context_provider(|| ToastApi { current, serial });

    rsx! {
        if let Some(toast) = current() {
            div {
                class: match toast.kind {
                    ToastKind::Success => "toast toast-success",
                    ToastKind::Error => "toast toast-error",
                },
                "{toast.message}"
            }
        }
        {children}
    }
}
