//! Task board for Kalenote.
//!
//! Tasks live in one of four columns and move between them through typed
//! patches or drag interactions. Moving a task into the doing column is
//! gated by the daily or weekly time budget. Every mutation is applied
//! locally first and mirrored to a remote record store; a failed remote call
//! is reported, never rolled back. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
