//! # API crate: fullstack server functions for SocialCard
//!
//! The frontends only need one thing from the server: who is signed in, so
//! the create page can pre-fill the card's email.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | none | Where the signed-in user lives in the session and how the reported identity is chosen |
//! | [`models`] | none | The client-safe [`UserInfo`] |
//! | [`settings`] | loader: `server` | Server settings (dev identity, session cookie) via the `config` crate |
//!
//! ## Server functions exposed here
//!
//! Compiled twice: once with full server logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that forwards
//! the call over HTTP.
//!
//! - `get_current_user`

use dioxus::prelude::*;

pub mod auth;
pub mod models;
pub mod settings;

pub use models::UserInfo;

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let session_user: Option<UserInfo> = session
        .get(auth::SESSION_USER_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let identity = &settings::get_settings().identity;
    Ok(auth::resolve_identity(session_user, identity))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}
