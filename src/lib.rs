//! Kalenote: the core of a personal task board.
//!
//! This crate holds the state and rules behind a four-column board (inbox,
//! to do, doing, done): optimistic task mutations backed by a remote record
//! store, a drag state machine that resolves drops into status changes,
//! time-budget admission control for the doing column, search and filtering
//! with priority ordering, and deterministic tag colours.
//!
//! # Architecture
//!
//! Kalenote follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Tasks, settings, presets, and the board store
//! - [`telemetry`]: Tracing subscriber bootstrap

pub mod board;
pub mod telemetry;
