//! Tabular Q-learning
//!
//! A [`ValueTable`] stores one Q-value per (action, state) pair for finite,
//! enumerable spaces fixed at construction. Values move toward the
//! bootstrapped target with the off-policy Q-learning rule:
//!
//! ```text
//! Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
//! ```
//!
//! Exploration, environments and training loops live with the caller; the
//! table only answers greedy queries and absorbs [`Transition`]s.
//!
//! ## Usage Example
//!
//! ```
//! use qlearning::q_learning::{Transition, ValueTable};
//!
//! let mut table = ValueTable::new(
//!     ["A", "B"],  // states
//!     ["up", "down"], // actions
//!     0.0,         // initial_reward
//!     0.5,         // learning_rate
//!     0.9,         // discount_factor
//! )?;
//!
//! table.apply(&Transition::new("A", "up", 10.0, "B"))?;
//! assert_eq!(*table.best_action(&"A")?, "up");
//! # Ok::<(), qlearning::Error>(())
//! ```

pub mod transition;
pub mod value_table;

// Public re-exports
pub use transition::Transition;
pub use value_table::ValueTable;
