//! HTTP surface for the gethashes digest service
//!
//! Exposes the digest dispatcher from hash-core over three endpoints
//! (`/ping`, `/string`, `/file`) plus the static landing page and `/img`
//! assets. Logical failures are serialized into the JSON body with HTTP 200;
//! see [`handlers`].

pub mod error;
pub mod handlers;
pub mod server;
pub mod staging;

pub use error::{Error, Result};
pub use server::{AppState, HashServer, ServerConfig, router};
