use crate::errors::PathPlannerError;
use crate::collections::{HeapEntry, IndexedMinHeap};
use crate::config::SearchConfig;
use crate::geometry::manhattan_distance;
use crate::grid::{CellId, GridGraph};
use super::{shortest_path, Cost, GraphNodeMap};

use log::{debug, trace};



/// Node on A* graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub id: CellId,
    pub g: Cost, // Cost to reach this node from the start
    pub parent: Option<CellId>, // None only for the start node
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize, // Nodes taken off the open list
    pub reopened: usize, // Closed nodes moved back to the open list
    pub peak_open: usize, // Largest open list size seen
}

/// Successful search: the terminal node plus every node needed to walk its parents
#[derive(Debug, Clone)]
pub struct Solution {
    goal: SearchNode,
    nodes: GraphNodeMap,
    stats: SearchStats,
}

impl Solution {

    /// Terminal node, its parent chain is the path
    pub fn goal(&self) -> &SearchNode {
        &self.goal
    }

    pub fn cost(&self) -> Cost {
        self.goal.g
    }

    pub fn nodes(&self) -> &GraphNodeMap {
        &self.nodes
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Nodes from start to goal
    pub fn path_nodes(&self) -> Result<Vec<SearchNode>, PathPlannerError> {
        shortest_path(&self.nodes, &self.goal)
    }

    /// Cell IDs from start to goal
    pub fn path(&self) -> Result<Vec<CellId>, PathPlannerError> {
        Ok(self.path_nodes()?.into_iter().map(|node| node.id).collect())
    }

    /// (x, y) coordinates from start to goal
    pub fn path_coordinates(&self, graph: &GridGraph) -> Result<Vec<(usize, usize)>, PathPlannerError> {
        self.path()?
            .into_iter()
            .map(|id| graph.coordinates_of(id).map_err(PathPlannerError::from))
            .collect()
    }
}

/// Terminal state of a search
/// Running out of open nodes is a normal outcome: the maze has no solution
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Found(Solution),
    Exhausted(SearchStats),
}

impl SearchOutcome {

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            SearchOutcome::Exhausted(_) => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            SearchOutcome::Exhausted(_) => None,
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            SearchOutcome::Found(solution) => solution.stats,
            SearchOutcome::Exhausted(stats) => *stats,
        }
    }
}

/// A* Algorithm over a grid graph
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The open list is an [`IndexedMinHeap`] keyed by Cell ID, so a node whose cost improves
/// is removed and re-inserted instead of being pushed twice. The closed list maps each
/// finalized Cell ID to its node. A Cell ID is never in both lists at once.
#[derive(Debug, Clone, Default)]
pub struct AStar {
    config: SearchConfig,
}

impl AStar {

    pub fn new(config: SearchConfig) -> Result<Self, PathPlannerError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search from the graph's Start cell to its Finish cell
    pub fn plan(&self, graph: &GridGraph) -> Result<SearchOutcome, PathPlannerError> {
        self.plan_between(graph, graph.start(), graph.finish())
    }

    /// Search between two cells using the Manhattan distance heuristic
    /// The distance is scaled by the movement cost, which keeps it admissible and consistent
    pub fn plan_between(&self, graph: &GridGraph, start: CellId, goal: CellId) -> Result<SearchOutcome, PathPlannerError> {
        // Bounds the heuristic product below as well as the search costs
        self.config.validate_for(graph)?;

        let (goal_x, goal_y) = graph.coordinates_of(goal)?;
        let (goal_x, goal_y) = (goal_x as Cost, goal_y as Cost);
        let width = graph.width();
        let movement_cost = self.config.movement_cost;

        let heuristic = move |id: CellId| {
            let (x, y) = ((id % width) as Cost, (id / width) as Cost);
            manhattan_distance(x, y, goal_x, goal_y) * movement_cost
        };

        self.plan_with_heuristic(graph, start, goal, heuristic)
    }

    /// Search between two cells with a caller supplied heuristic
    /// An inconsistent heuristic is handled by re-opening closed nodes, an inadmissible
    /// one may return a longer path
    pub fn plan_with_heuristic<H>(&self, graph: &GridGraph, start: CellId, goal: CellId, heuristic_fn: H) -> Result<SearchOutcome, PathPlannerError>
    where
        H: Fn(CellId) -> Cost,
    {
        // Both ends must be real cells
        graph.coordinates_of(start)?;
        graph.coordinates_of(goal)?;
        self.config.validate_for(graph)?;

        debug!(
            "[AStar] plan: start={} goal={} movement_cost={}",
            start, goal, self.config.movement_cost
        );

        let outcome = self.search(graph, start, goal, heuristic_fn)?;

        match &outcome {
            SearchOutcome::Found(solution) => debug!(
                "[AStar] found: cost={} stats={:?}",
                solution.cost(),
                solution.stats
            ),
            SearchOutcome::Exhausted(stats) => debug!("[AStar] exhausted: stats={:?}", stats),
        }

        Ok(outcome)
    }

    /// Traverses the graph using A* until the goal leaves the open list or the open list runs dry
    fn search<H>(&self, graph: &GridGraph, start: CellId, goal: CellId, heuristic_fn: H) -> Result<SearchOutcome, PathPlannerError>
    where
        H: Fn(CellId) -> Cost,
    {
        let movement_cost = self.config.movement_cost;
        let mut stats = SearchStats::default();

        // Open List
        // Nodes that need to be evaluated, keyed by Cell ID
        // Sorting is done by f_cost (cost + heuristic)
        let mut open_list: IndexedMinHeap<Cost, CellId, SearchNode> = IndexedMinHeap::new();

        // Closed List
        // Finalized nodes, holds the best known cost and parent of each
        let mut closed_list = GraphNodeMap::default();

        open_list.insert(
            heuristic_fn(start),
            start,
            SearchNode { id: start, g: 0, parent: None },
        )?;
        stats.peak_open = 1;

        while let Some(HeapEntry { payload: current, .. }) = open_list.extract_min() {
            stats.expanded += 1;
            trace!("[AStar] expand: id={} g={}", current.id, current.g);

            // Check if we've reached the goal
            if current.id == goal {
                let nodes = collect_nodes(closed_list, &open_list, current);
                return Ok(SearchOutcome::Found(Solution { goal: current, nodes, stats }));
            }

            closed_list.insert(current.id, current);

            for neighbor in graph.neighbors(current.id) {

                // new cost to reach this node = step cost + node cost
                // A caller supplied heuristic is unbounded, so both sums are checked
                let tentative_g = current.g
                    .checked_add(movement_cost)
                    .ok_or(PathPlannerError::CostOverflow(current.id))?;
                let improved = SearchNode { id: neighbor, g: tentative_g, parent: Some(current.id) };
                let f_cost = tentative_g
                    .checked_add(heuristic_fn(neighbor))
                    .ok_or(PathPlannerError::CostOverflow(current.id))?;

                if let Some(entry) = open_list.get(&neighbor) {
                    if entry.payload.g > tentative_g {
                        // Cheaper path to a node still waiting in the open list
                        open_list.remove_and_extract(&neighbor)?;
                        open_list.insert(f_cost, neighbor, improved)?;
                    }
                } else if let Some(closed) = closed_list.get(&neighbor) {
                    if closed.g > tentative_g {
                        // Cheaper path to a finalized node, it has to be evaluated again
                        trace!("[AStar] reopen: id={} g={} -> {}", neighbor, closed.g, tentative_g);
                        closed_list.swap_remove(&neighbor);
                        open_list.insert(f_cost, neighbor, improved)?;
                        stats.reopened += 1;
                    }
                } else {
                    // This is the first time we're seeing this neighbor
                    open_list.insert(f_cost, neighbor, improved)?;
                }
            }

            stats.peak_open = stats.peak_open.max(open_list.len());
        }

        Ok(SearchOutcome::Exhausted(stats))
    }
}

/// Every node the search still holds, so any parent link can be resolved
fn collect_nodes(mut closed_list: GraphNodeMap, open_list: &IndexedMinHeap<Cost, CellId, SearchNode>, goal: SearchNode) -> GraphNodeMap {
    closed_list.reserve(open_list.len() + 1);
    for entry in open_list.iter() {
        closed_list.insert(entry.key, entry.payload);
    }
    closed_list.insert(goal.id, goal);
    closed_list
}
