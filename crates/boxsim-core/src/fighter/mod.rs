//! Fighter lifecycle: procedural generation, yearly aging, and config
//! validation. Complements the static `models::fighter` data definitions.

pub mod aging;
pub mod generator;
pub mod validation;

pub use aging::{apply_yearly_aging, should_consider_retirement};
pub use generator::{generate_fighter, generate_roster};
pub use validation::{is_valid, validate_fighter, ValidationIssue};
