//! Pure data structures (DTOs) stored and exchanged by the directory.

pub mod user;

pub use user::*;
