//! Dense action-value table for tabular Q-learning

use log::{debug, trace};

use crate::{
    config::{Hyperparameters, TableConfig},
    error::{Error, Result},
    q_learning::transition::Transition,
    space::{ActionSpace, Label, StateSpace},
};

/// Value table mapping every (action, state) pair to a Q-value
///
/// Rows are actions and columns are states, both in construction order.
/// Cells live in one flat buffer, row-major by action.
#[derive(Debug, Clone)]
pub struct ValueTable<S: Label, A: Label> {
    states: StateSpace<S>,
    actions: ActionSpace<A>,
    /// Q-values: `values[action * n_states + state]`
    values: Vec<f64>,
    hyperparameters: Hyperparameters,
    initial_reward: f64,
}

impl<S: Label, A: Label> ValueTable<S, A> {
    /// Create a table with every cell set to `initial_reward`
    ///
    /// # Arguments
    ///
    /// * `states` - State identifiers, in order (non-empty, distinct)
    /// * `actions` - Action identifiers, in order (non-empty, distinct)
    /// * `initial_reward` - Starting Q-value for every pair
    /// * `learning_rate` - α parameter
    /// * `discount_factor` - γ parameter
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if either space is empty or
    /// has duplicates, or if any numeric argument is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use qlearning::ValueTable;
    ///
    /// let mut table = ValueTable::new(["A", "B"], ["up", "down"], 0.0, 0.5, 0.9).unwrap();
    /// table.update(&"A", &"up", 10.0, &"B").unwrap();
    ///
    /// assert_eq!(table.value(&"A", &"up").unwrap(), 5.0);
    /// assert_eq!(*table.best_action(&"A").unwrap(), "up");
    /// ```
    pub fn new(
        states: impl IntoIterator<Item = S>,
        actions: impl IntoIterator<Item = A>,
        initial_reward: f64,
        learning_rate: f64,
        discount_factor: f64,
    ) -> Result<Self> {
        Self::with_spaces(
            StateSpace::new("state", states)?,
            ActionSpace::new("action", actions)?,
            initial_reward,
            Hyperparameters {
                learning_rate,
                discount_factor,
            },
        )
    }

    /// Create a table taking its numeric parameters from a config
    pub fn from_config(
        states: impl IntoIterator<Item = S>,
        actions: impl IntoIterator<Item = A>,
        config: &TableConfig,
    ) -> Result<Self> {
        Self::new(
            states,
            actions,
            config.initial_reward,
            config.learning_rate,
            config.discount_factor,
        )
    }

    /// Create a table over prebuilt spaces
    pub fn with_spaces(
        states: StateSpace<S>,
        actions: ActionSpace<A>,
        initial_reward: f64,
        hyperparameters: Hyperparameters,
    ) -> Result<Self> {
        if !initial_reward.is_finite() {
            return Err(Error::invalid_configuration(format!(
                "initial_reward must be finite, got {initial_reward}"
            )));
        }
        hyperparameters.validate()?;

        let values = vec![initial_reward; actions.len() * states.len()];
        debug!(
            "created value table: {} actions x {} states, initial value {}",
            actions.len(),
            states.len(),
            initial_reward
        );

        Ok(Self {
            states,
            actions,
            values,
            hyperparameters,
            initial_reward,
        })
    }

    /// Greedy action for `state`
    ///
    /// Ties go to the action that appears first in construction order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] if `state` is not in the table.
    pub fn best_action(&self, state: &S) -> Result<&A> {
        let column = self.state_index(state)?;
        let row = self.best_action_index(column);
        Ok(&self.actions.as_slice()[row])
    }

    /// Highest Q-value in `state`, i.e. the value of [`Self::best_action`]
    pub fn max_value(&self, state: &S) -> Result<f64> {
        let column = self.state_index(state)?;
        let row = self.best_action_index(column);
        Ok(self.values[self.cell(row, column)])
    }

    /// Q-value of a single (state, action) pair
    pub fn value(&self, state: &S, action: &A) -> Result<f64> {
        let column = self.state_index(state)?;
        let row = self.action_index(action)?;
        Ok(self.values[self.cell(row, column)])
    }

    /// All Q-values for `state`, in action order
    pub fn action_values(&self, state: &S) -> Result<Vec<(&A, f64)>> {
        let column = self.state_index(state)?;
        Ok(self
            .actions
            .iter()
            .enumerate()
            .map(|(row, action)| (action, self.values[self.cell(row, column)]))
            .collect())
    }

    /// Q-learning update: off-policy TD control
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// The bootstrap term is read from the table before the write, so a
    /// self-transition (`next_state == state`) sees the old value. Every
    /// identifier is resolved first; on error nothing is written.
    pub fn update(&mut self, state: &S, action: &A, reward: f64, next_state: &S) -> Result<()> {
        let column = self.state_index(state)?;
        let row = self.action_index(action)?;
        let next_column = self.state_index(next_state)?;

        let cell = self.cell(row, column);
        let current_q = self.values[cell];
        let best_next = self.best_action_index(next_column);
        let max_next_q = self.values[self.cell(best_next, next_column)];

        let Hyperparameters {
            learning_rate,
            discount_factor,
        } = self.hyperparameters;
        let td_target = reward + discount_factor * max_next_q;
        let new_q = current_q + learning_rate * (td_target - current_q);
        self.values[cell] = new_q;

        trace!(
            "Q({state:?}, {action:?}): {current_q} -> {new_q} (reward {reward}, next {next_state:?})"
        );
        Ok(())
    }

    /// Apply the update for one observed transition
    pub fn apply(&mut self, transition: &Transition<S, A>) -> Result<()> {
        self.update(
            &transition.state,
            &transition.action,
            transition.reward,
            &transition.next_state,
        )
    }

    pub fn states(&self) -> &StateSpace<S> {
        &self.states
    }

    pub fn actions(&self) -> &ActionSpace<A> {
        &self.actions
    }

    pub fn hyperparameters(&self) -> Hyperparameters {
        self.hyperparameters
    }

    pub fn initial_reward(&self) -> f64 {
        self.initial_reward
    }

    /// `(number of actions, number of states)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.actions.len(), self.states.len())
    }

    fn state_index(&self, state: &S) -> Result<usize> {
        self.states
            .index_of(state)
            .ok_or_else(|| Error::unknown_state(state))
    }

    fn action_index(&self, action: &A) -> Result<usize> {
        self.actions
            .index_of(action)
            .ok_or_else(|| Error::unknown_action(action))
    }

    fn cell(&self, row: usize, column: usize) -> usize {
        row * self.states.len() + column
    }

    /// First row holding the column maximum. NaN cells never win; an all-NaN
    /// column yields row 0.
    fn best_action_index(&self, column: usize) -> usize {
        let mut best: Option<(usize, f64)> = None;
        for row in 0..self.actions.len() {
            let q = self.values[self.cell(row, column)];
            if q.is_nan() {
                continue;
            }
            match best {
                Some((_, best_q)) if q <= best_q => {}
                _ => best = Some((row, q)),
            }
        }
        best.map_or(0, |(row, _)| row)
    }
}
