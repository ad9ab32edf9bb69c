//! One module per screen. Views own screen state and API calls; navigation
//! is handed back to the platform crate through `EventHandler` props.

mod sign_in;
pub use sign_in::SignInView;

mod sign_up;
pub use sign_up::SignUpView;

mod onboarding;
pub use onboarding::OnboardingView;

mod home;
pub use home::HomeView;

mod post_detail;
pub use post_detail::PostDetailView;

mod create_post;
pub use create_post::CreatePostView;

mod explore;
pub use explore::ExploreView;

mod search;
pub use search::SearchView;

mod leagues;
pub use leagues::LeaguesView;

mod league_detail;
pub use league_detail::LeagueDetailView;

mod team_detail;
pub use team_detail::TeamDetailView;

mod player_detail;
pub use player_detail::PlayerDetailView;

mod training;
pub use training::TrainingView;

mod training_detail;
pub use training_detail::TrainingDetailView;

mod settings;
pub use settings::SettingsView;

mod profile;
pub use profile::ProfileView;

mod role_profile;
pub use role_profile::RoleProfileView;

use dioxus::prelude::*;

/// Read the first file from a file-input change event into an upload asset.
pub(crate) async fn picked_image(evt: FormEvent) -> Option<api::ImageAsset> {
    let engine = evt.files()?;
    let name = engine.files().into_iter().next()?;
    let bytes = engine.read_file(&name).await?;
    let mime = match name.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    };
    Some(api::ImageAsset {
        bytes,
        file_name: name,
        mime: mime.to_string(),
    })
}
