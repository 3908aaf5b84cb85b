//! # API crate — typed HTTP client for the Whisper backend
//!
//! Everything the client knows about the backend lives here: the wire
//! models, the [`WhisperApi`] trait describing the REST surface, and the
//! [`ApiClient`] implementation over `reqwest`.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`WhisperApi`] trait and its `reqwest` implementation |
//! | [`error`] | [`ApiError`]: transport failures and non-2xx responses |
//! | [`models`] | Wire types (`UserInfo`, `Post`, forms) and list-derived helpers |
//!
//! Session handling is cookie-based: the browser attaches the session
//! cookie because every request opts into `fetch` credentials, and native
//! builds (tests, checks) get the same behavior from a client-side cookie
//! jar. The crate never interprets the cookie itself.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, WhisperApi};
pub use error::ApiError;
pub use models::{Credentials, Post, PostDraft, PostEdit, SignupForm, SortBy, UserInfo};
