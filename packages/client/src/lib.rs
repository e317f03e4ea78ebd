//! # Client crate — data layer for the Forgepoint site and admin panel
//!
//! Everything the two Dioxus apps need to talk to the content API, with no
//! Dioxus dependency so the whole layer is testable natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Entity structs decoding the backend's JSON (`_id`, camelCase fields) |
//! | [`resource`] | [`Resource`](resource::Resource) schemas, the [`Draft`](resource::Draft) form buffer and required-field validation |
//! | [`backend`] | The [`Backend`](backend::Backend) transport trait and the platform-neutral multipart payload |
//! | [`http`] | [`HttpBackend`] — `reqwest` on both native and wasm targets |
//! | [`memory`] | [`MemoryBackend`] — in-memory fake with a request log, for tests and offline development |
//! | [`session`] | [`Session`] — the bearer credential, resolved once at startup |
//! | [`admin`] | Tagged-phase state machine and operations behind every admin screen |
//! | [`listing`] | Three-phase loader for the public, read-only list pages |
//! | [`config`] | [`ApiConfig`] — backend base URL |

pub mod admin;
pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod listing;
pub mod memory;
pub mod models;
pub mod resource;
pub mod session;

pub use config::ApiConfig;
pub use error::Error;
pub use http::HttpBackend;
pub use memory::MemoryBackend;
pub use session::Session;
