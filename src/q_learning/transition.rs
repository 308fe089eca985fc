//! Observed environment transitions.

use serde::{Deserialize, Serialize};

/// One step of experience: taking `action` in `state` yielded `reward` and
/// led to `next_state`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition<S, A> {
    pub state: S,
    pub action: A,
    pub reward: f64,
    pub next_state: S,
}

impl<S, A> Transition<S, A> {
    pub fn new(state: S, action: A, reward: f64, next_state: S) -> Self {
        Self {
            state,
            action,
            reward,
            next_state,
        }
    }
}

impl<S, A> From<(S, A, f64, S)> for Transition<S, A> {
    fn from((state, action, reward, next_state): (S, A, f64, S)) -> Self {
        Self::new(state, action, reward, next_state)
    }
}
