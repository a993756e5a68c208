#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)] // TODO(deps-001): remove once transitive dependencies converge.

//! Shared building blocks for the Interview Trainer clients.
//!
//! The browser client and the command-line client both talk to the training
//! API through [`client::ApiClient`]. The only thing that differs between them
//! is where the session blob lives, which is abstracted by
//! [`store::SessionStore`].

pub mod client;
pub mod config;
pub mod errors;
pub mod format;
pub mod models;
pub mod store;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use errors::{ClientError, ClientResult, StoreError};
pub use store::{MemorySessionStore, SessionStore};
