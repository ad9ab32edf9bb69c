//! Thin wrappers that bind the shared screens to this app's router.

mod tabs_layout;
pub use tabs_layout::TabsLayout;

mod auth;
pub use auth::{Onboarding, SignIn, SignUp};

mod feed;
pub use feed::{Create, Home, PostDetail};

mod explore;
pub use explore::{Explore, Search};

mod clubs;
pub use clubs::{LeagueDetail, Leagues, PlayerDetail, TeamDetail};

mod training;
pub use training::{Training, TrainingDetail};

mod settings;
pub use settings::{Profile, RoleProfile, Settings};
