//! Tabular Q-learning value-table engine
//!
//! This crate provides:
//! - A dense Q-value table over fixed, ordered state and action spaces
//! - Greedy best-action queries with first-in-order tie-breaking
//! - In-place Bellman (Q-learning) updates
//! - Validated, serde-backed configuration

pub mod config;
pub mod error;
pub mod identifiers;
pub mod q_learning;
pub mod space;

pub use config::{Hyperparameters, TableConfig};
pub use error::{Error, Result};
pub use identifiers::{ActionId, StateId};
pub use q_learning::{Transition, ValueTable};
pub use space::{ActionSpace, Label, Space, StateSpace};
