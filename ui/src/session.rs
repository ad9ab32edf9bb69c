use dioxus::prelude::*;

/// The signed-in user, shared through context so any screen can read it.
///
/// `user` is `None` until sign-in completes and again after sign-out. Screens
/// that allow anonymous browsing check it before offering write actions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<api::User>,
}

impl SessionState {
    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.id.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Provides the session to the component tree. Mount once at the app root.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(SessionState::default()));
    rsx! {
        {children}
    }
}

/// The session signal. Write to it on sign-in, sign-out and profile edits.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}
