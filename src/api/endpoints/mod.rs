//! API endpoint handlers.

pub mod health;
pub mod screenings;
pub mod vision;
