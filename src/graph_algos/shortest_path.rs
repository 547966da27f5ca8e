use crate::errors::PathPlannerError;
use super::{GraphNodeMap, SearchNode};

/// Construct the shortest path from the goal node to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap - every node the search recorded, keyed by Cell ID
/// goal: &SearchNode - terminal node, its parent chain ends at the node with no parent
/// Pure: the map is only read, so calling it twice gives the same path
pub fn shortest_path(node_map: &GraphNodeMap, goal: &SearchNode) -> Result<Vec<SearchNode>, PathPlannerError> {

    let mut path = vec![*goal];
    let mut parent = goal.parent;

    // Trace back from goal to start
    while let Some(parent_id) = parent {
        // A chain longer than the map can only come from a cycle
        if path.len() > node_map.len() {
            return Err(PathPlannerError::BrokenParentChain);
        }

        let node = node_map
            .get(&parent_id)
            .ok_or(PathPlannerError::MissingParent(parent_id))?;
        path.push(*node);
        parent = node.parent;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: usize, g: i64, parent: Option<usize>) -> SearchNode {
        SearchNode { id, g, parent }
    }

    fn map_of(nodes: &[SearchNode]) -> GraphNodeMap {
        nodes.iter().map(|n| (n.id, *n)).collect()
    }

    #[test]
    fn test_follows_parents_start_to_goal() {
        let map = map_of(&[node(0, 0, None), node(1, 5, Some(0)), node(2, 10, Some(1)), node(7, 5, Some(0))]);
        let goal = map[&2];

        let path: Vec<_> = shortest_path(&map, &goal).unwrap().iter().map(|n| n.id).collect();
        assert_eq!(path, vec![0, 1, 2]);

        // Same input, same output
        let again: Vec<_> = shortest_path(&map, &goal).unwrap().iter().map(|n| n.id).collect();
        assert_eq!(again, path);
    }

    #[test]
    fn test_start_is_its_own_path() {
        let map = map_of(&[node(3, 0, None)]);
        let path = shortest_path(&map, &map[&3]).unwrap();
        assert_eq!(path, vec![node(3, 0, None)]);
    }

    #[test]
    fn test_missing_parent() {
        let map = map_of(&[node(1, 5, Some(0))]);
        let result = shortest_path(&map, &map[&1]);
        assert!(matches!(result, Err(PathPlannerError::MissingParent(0))));
    }

    #[test]
    fn test_cycle_is_reported() {
        let map = map_of(&[node(1, 5, Some(2)), node(2, 5, Some(1))]);
        let result = shortest_path(&map, &map[&1]);
        assert!(matches!(result, Err(PathPlannerError::BrokenParentChain)));
    }
}
