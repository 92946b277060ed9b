// handlers/mod.rs - HTTP entry points
//
// students: list view, add/edit/delete forms and CSV export
// health:   liveness check for the record store
pub mod health;
pub mod students;

pub use health::health;
pub use students::*;
