//! Planner tunables.

use crate::{CoreError, CoreResult};

/// Parameters shared by RRT-Connect and RRT*.
///
/// Typically built with struct-update syntax over `Default`:
///
/// ```
/// use rrt_core::PlannerConfig;
///
/// let config = PlannerConfig { max_nodes: 4_000, seed: 7, ..PlannerConfig::default() };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Sample budget.  A planner that has not reached the goal after this
    /// many iterations gives up and returns an empty path.
    pub max_nodes: usize,

    /// Maximum step length of a single tree extension.
    pub epsilon: f64,

    /// Probability of targeting the goal (RRT*) or the opposite tree's root
    /// (RRT-Connect) instead of a random free sample.
    pub goal_bias: f64,

    /// RRT* neighbourhood radius for parent selection and rewiring.  Must be
    /// strictly greater than `epsilon`.
    pub search_radius: f64,

    /// Master RNG seed.  The same seed always produces the same plan.
    pub seed: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_nodes:     10_000,
            epsilon:       0.2,
            goal_bias:     0.1,
            search_radius: 1.0,
            seed:          42,
        }
    }
}

impl PlannerConfig {
    /// Reject parameter combinations the planners cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_nodes == 0 {
            return Err(CoreError::Config("max_nodes must be at least 1".into()));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(CoreError::Config(format!(
                "epsilon must be positive and finite, got {}",
                self.epsilon
            )));
        }
        if !(0.0..=1.0).contains(&self.goal_bias) {
            return Err(CoreError::Config(format!(
                "goal_bias must lie in [0, 1], got {}",
                self.goal_bias
            )));
        }
        if !(self.search_radius.is_finite() && self.search_radius > self.epsilon) {
            return Err(CoreError::Config(format!(
                "search_radius ({}) must exceed epsilon ({})",
                self.search_radius, self.epsilon
            )));
        }
        Ok(())
    }
}
