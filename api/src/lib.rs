//! # KickZone REST client
//!
//! Everything the KickZone frontends know about the backend lives here: a
//! configured HTTP client, the typed response contracts, the encrypted token
//! store, and one module of endpoint functions per backend area.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Singleton `reqwest` client: base URL, timeout, bearer-token interceptor, JSON/multipart verbs |
//! | [`error`] | [`ApiError`]: network / status / decode / token-store failures |
//! | [`models`] | Serde contracts for every payload the backend serves |
//! | [`token`] | AES-256-GCM encrypted session-token file |
//! | [`auth`] | Sign-in (200/403/405 classification), sign-up, onboarding, account management |
//! | [`posts`] | Feed, post detail, likes, comments, multipart create/edit |
//! | [`profile`] | Account and role-record editors, picker reference data |
//! | [`clubs`] | Teams, leagues, standings, player/team stats, fan follows, search |
//! | [`trainings`] | Training sessions, attendance, participants |
//!
//! The backend enforces all invariants; this crate's job is to issue requests,
//! fail fast on payloads that do not match the declared contracts, and never
//! retry on its own.

pub mod auth;
pub mod client;
pub mod clubs;
pub mod error;
pub mod models;
pub mod posts;
pub mod profile;
pub mod token;
pub mod trainings;

pub use auth::SignIn;
pub use client::{client, ApiClient};
pub use error::ApiError;
pub use models::*;
pub use posts::ImageAsset;
