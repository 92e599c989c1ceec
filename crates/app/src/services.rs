//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod character_service;
pub mod favorite_service;
pub mod planet_service;
pub mod starship_service;
pub mod user_service;
