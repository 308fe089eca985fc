//! Common test utilities for the qlearning test suite.

#![allow(dead_code)]

use qlearning::ValueTable;
use rand::{Rng, rngs::StdRng};

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every cell of `table`, row-major by action.
pub fn snapshot(table: &ValueTable<usize, usize>) -> Vec<f64> {
    let (n_actions, n_states) = table.dimensions();
    let mut cells = Vec::with_capacity(n_actions * n_states);
    for action in 0..n_actions {
        for state in 0..n_states {
            cells.push(table.value(&state, &action).unwrap());
        }
    }
    cells
}

/// Table with random dimensions and hyperparameters over `0..n` labels.
pub fn random_table(rng: &mut StdRng) -> ValueTable<usize, usize> {
    let n_states = rng.random_range(1..12);
    let n_actions = rng.random_range(1..6);
    let initial_reward = rng.random_range(-5.0..5.0);
    let learning_rate = rng.random_range(0.0..=1.0);
    let discount_factor = rng.random_range(0.0..=1.0);
    ValueTable::new(
        0..n_states,
        0..n_actions,
        initial_reward,
        learning_rate,
        discount_factor,
    )
    .unwrap()
}
