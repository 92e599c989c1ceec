//! # holocron-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the catalog JSON API (`/user`, `/character`, `/planet`,
//!   `/starship`, the favorite routes) and a machine-readable sitemap at `/`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `holocron-app` (for port traits and services) and
//! `holocron-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod sitemap;
pub mod state;
