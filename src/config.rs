//! Search configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::PathPlannerError;
use crate::graph_algos::Cost;
use crate::grid::GridGraph;


/// Cost of one step between adjacent cells
pub const DEFAULT_MOVEMENT_COST: Cost = 5;

/// A* search settings
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Uniform cost of moving to a 4-connected neighbour, also scales the heuristic
    pub movement_cost: Cost,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            movement_cost: DEFAULT_MOVEMENT_COST,
        }
    }
}

impl SearchConfig {

    pub fn with_movement_cost(mut self, movement_cost: Cost) -> Self {
        self.movement_cost = movement_cost;
        self
    }

    /// Movement cost must be positive for the heuristic to stay admissible
    pub fn validate(&self) -> Result<(), PathPlannerError> {
        if self.movement_cost <= 0 {
            return Err(PathPlannerError::InvalidConfig(format!(
                "movement_cost must be positive, got {}",
                self.movement_cost
            )));
        }
        Ok(())
    }

    /// Checks the movement cost against a specific grid
    /// The worst case priority is a path through every cell plus the widest Manhattan
    /// estimate, both must fit in a Cost
    pub fn validate_for(&self, graph: &GridGraph) -> Result<(), PathPlannerError> {
        self.validate()?;

        let steps = Cost::try_from(graph.len())
            .ok()
            .zip(Cost::try_from(graph.width() + graph.height()).ok())
            .and_then(|(cells, span)| cells.checked_add(span));

        match steps.and_then(|steps| steps.checked_mul(self.movement_cost)) {
            Some(_) => Ok(()),
            None => Err(PathPlannerError::InvalidConfig(format!(
                "movement_cost {} overflows path costs on a {} x {} grid",
                self.movement_cost,
                graph.width(),
                graph.height()
            ))),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_builder() {
        let config = SearchConfig::default();
        assert_eq!(config.movement_cost, DEFAULT_MOVEMENT_COST);
        assert!(config.validate().is_ok());

        let config = config.with_movement_cost(1);
        assert_eq!(config.movement_cost, 1);
    }

    #[test]
    fn test_rejects_non_positive_cost() {
        let result = SearchConfig::default().with_movement_cost(0).validate();
        assert!(matches!(result, Err(PathPlannerError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_cost_too_large_for_grid() {
        let graph: GridGraph = "@.X\n".parse().unwrap();

        assert!(SearchConfig::default().validate_for(&graph).is_ok());

        // 3 cells plus a span of 4 steps
        let largest = Cost::MAX / 7;
        assert!(SearchConfig::default().with_movement_cost(largest).validate_for(&graph).is_ok());

        let result = SearchConfig::default().with_movement_cost(largest + 1).validate_for(&graph);
        assert!(matches!(result, Err(PathPlannerError::InvalidConfig(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_partial_config_uses_defaults() {
        let config: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SearchConfig::default());

        let config: SearchConfig = serde_json::from_str(r#"{"movement_cost": 2}"#).unwrap();
        assert_eq!(config.movement_cost, 2);

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"movement_cost":2}"#);
    }
}
