//! # holocron-domain
//!
//! Pure domain model for the holocron catalog.
//!
//! ## Responsibilities
//! - Foundational types: typed integer identifiers, error conventions
//! - Define **Users** (accounts that may hold favorites)
//! - Define the catalog resources: **Characters**, **Planets**, **Starships**
//! - Define **Favorites** (join rows pointing at a catalog resource)
//! - Express partial updates as explicit per-field merges
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;
