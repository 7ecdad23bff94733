//! Host integration
//!
//! The application that owns the scene implements [`SceneHost`]; a
//! [`Stacker`] reads object geometry through it, runs the solvers and writes
//! the resulting translations back. Selection and options are always passed
//! in explicitly, never read from shared state.
//!
//! - [`adapter`] - The host trait and bounds snapshots
//! - [`operator`] - Validated stack, drop and settle operations

pub mod adapter;
pub mod operator;

pub use adapter::{snapshot, snapshot_all, SceneHost};
pub use operator::Stacker;
