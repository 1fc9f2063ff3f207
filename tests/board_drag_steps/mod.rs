//! Step definitions for board drag BDD scenarios.

mod given;
mod then;
mod when;
pub mod world;
