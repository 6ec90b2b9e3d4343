//! HTTP boundary around [`tally_core`].
//!
//! Two routes: `POST /auth` trades credentials for a signed bearer token,
//! `POST /sum` aggregates a JSON document for a token holder and answers
//! with the SHA-256 digest of the decimal total.

pub mod auth;
pub mod config;
pub mod digest;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use routes::app;
