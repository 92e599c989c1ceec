//! # holocron-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository` — CRUD for users, plus lookup by email
//!   - `CharacterRepository`, `PlanetRepository`, `StarshipRepository` — CRUD for the catalog
//!   - `FavoriteRepository` — insert, scan, and single-row delete on the favorite tables
//! - Define **driving/inbound ports** as use-case structs:
//!   - `UserService` — register, get, list, delete, per-user favorites
//!   - `CharacterService`, `PlanetService`, `StarshipService` — get, list, partial update
//!   - `FavoriteService` — add (after an existence check), remove one, list
//!
//! ## Dependency rule
//! Depends on `holocron-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
