//! Shared UI for the KickZone workspace: screen views, components, and the
//! hooks every screen composes (session context, endpoint fetching, the
//! optimistic membership toggle).

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{use_session, SessionProvider, SessionState};

mod fetch;
pub use fetch::{use_endpoint, Endpoint};

mod membership;
pub use membership::{use_membership, Membership, GUARD_RELEASE_MS};

pub mod forms;
pub mod format;

mod toast;
pub use toast::{use_toast, ToastApi, ToastKind, ToastProvider};

pub mod views;
