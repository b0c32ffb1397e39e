//! Traversal family: breadth-first and depth-first search
//!
//! Both variants walk the component containing the start node. Neighbor
//! lists arrive sorted from the validator, and DFS pushes them in reverse,
//! so both variants visit ties in lexicographic order and every trace is a
//! pure function of the input text.

use super::TraceGenerator;
use crate::input::GraphParams;
use crate::trace::view::{Cell, DisplayState, Emphasis, Marker};
use crate::trace::{GenerationError, Trace, TraceBuilder};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Snapshot state for graph traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphState {
    /// All nodes in declaration order
    pub nodes: Vec<String>,
    /// Nodes visited so far, in visit order
    pub order: Vec<String>,
    /// Pending nodes: queue front-first for BFS, stack top-first for DFS
    pub frontier: Vec<String>,
    /// Node being expanded right now
    pub current: Option<String>,
    /// "queue" or "stack", for the summary line
    pub frontier_label: &'static str,
}

impl DisplayState for GraphState {
    fn cells(&self) -> Vec<Cell> {
        self.nodes
            .iter()
            .map(|node| {
                let emphasis = if self.current.as_deref() == Some(node.as_str()) {
                    Emphasis::Active
                } else if self.order.contains(node) {
                    Emphasis::Accent
                } else {
                    Emphasis::Normal
                };
                Cell {
                    id: node.clone(),
                    label: node.clone(),
                    emphasis,
                }
            })
            .collect()
    }

    fn markers(&self) -> Vec<Marker> {
        let mut markers = Vec::new();
        if let Some(current) = &self.current {
            markers.push(Marker {
                label: "cur".to_string(),
                cell_id: current.clone(),
            });
        }
        if let Some(next) = self.frontier.first() {
            markers.push(Marker {
                label: "next".to_string(),
                cell_id: next.clone(),
            });
        }
        markers
    }

    fn summary(&self) -> String {
        format!(
            "visited {}/{} | {}: [{}]",
            self.order.len(),
            self.nodes.len(),
            self.frontier_label,
            self.frontier.join(", ")
        )
    }
}

fn check_start(algorithm: &'static str, params: &GraphParams) -> Result<(), GenerationError> {
    if !params.adjacency.contains_key(&params.start) {
        return Err(GenerationError::InconsistentParams {
            algorithm,
            message: format!("start node '{}' has no adjacency entry", params.start),
        });
    }
    Ok(())
}

/// Breadth-first search from the start node.
pub struct BreadthFirst;

const BFS_LISTING: &[&str] = &[
    "queue = [start], seen = {start}",
    "while queue is not empty:",
    "    node = queue.pop_front()",
    "    visit(node)",
    "    for neighbor of node (sorted):",
    "        if neighbor not in seen:",
    "            seen.add(neighbor)",
    "            queue.push_back(neighbor)",
    "return visit order",
];

impl TraceGenerator for BreadthFirst {
    type Params = GraphParams;
    type State = GraphState;

    fn name(&self) -> &'static str {
        "breadth-first"
    }

    fn listing(&self) -> &'static [&'static str] {
        BFS_LISTING
    }

    fn generate(&self, params: &GraphParams) -> Result<Trace<GraphState>, GenerationError> {
        check_start("graph/bfs", params)?;
        let mut builder = TraceBuilder::new("graph/bfs");

        let mut queue: VecDeque<String> = VecDeque::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut order: Vec<String> = Vec::new();

        queue.push_back(params.start.clone());
        seen.insert(params.start.clone());

        let state = |order: &[String], queue: &VecDeque<String>, current: Option<&str>| GraphState {
            nodes: params.nodes.clone(),
            order: order.to_vec(),
            frontier: queue.iter().cloned().collect(),
            current: current.map(|c| c.to_string()),
            frontier_label: "queue",
        };

        builder.record(
            state(&order, &queue, None),
            format!(
                "Seed the queue with the start node '{}' and mark it seen.",
                params.start
            ),
            Some(0),
        );

        while let Some(node) = queue.pop_front() {
            order.push(node.clone());
            builder.record(
                state(&order, &queue, Some(&node)),
                format!(
                    "Dequeue '{}' and visit it; it is number {} in the traversal.",
                    node,
                    order.len()
                ),
                Some(3),
            );

            let neighbors = params.adjacency.get(&node).cloned().unwrap_or_default();
            for neighbor in neighbors {
                if seen.insert(neighbor.clone()) {
                    queue.push_back(neighbor.clone());
                    builder.record(
                        state(&order, &queue, Some(&node)),
                        format!(
                            "Neighbor '{}' of '{}' is unseen; enqueue it behind the current frontier.",
                            neighbor, node
                        ),
                        Some(7),
                    );
                }
            }
        }

        let unreached = params.nodes.len() - order.len();
        let tail = if unreached == 0 {
            "every node was reached.".to_string()
        } else {
            format!("{} node(s) were unreachable from the start.", unreached)
        };
        builder.record_terminal(
            state(&order, &queue, None),
            format!(
                "Queue drained; visit order is [{}] and {}",
                order.join(", "),
                tail
            ),
            Some(8),
        );
        builder.finish()
    }
}

/// Depth-first search from the start node, explicit stack.
pub struct DepthFirst;

const DFS_LISTING: &[&str] = &[
    "stack = [start], seen = {start}",
    "while stack is not empty:",
    "    node = stack.pop()",
    "    visit(node)",
    "    for neighbor of node (reverse sorted):",
    "        if neighbor not in seen:",
    "            seen.add(neighbor)",
    "            stack.push(neighbor)",
    "return visit order",
];

impl TraceGenerator for DepthFirst {
    type Params = GraphParams;
    type State = GraphState;

    fn name(&self) -> &'static str {
        "depth-first"
    }

    fn listing(&self) -> &'static [&'static str] {
        DFS_LISTING
    }

    fn generate(&self, params: &GraphParams) -> Result<Trace<GraphState>, GenerationError> {
        check_start("graph/dfs", params)?;
        let mut builder = TraceBuilder::new("graph/dfs");

        let mut stack: Vec<String> = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut order: Vec<String> = Vec::new();

        stack.push(params.start.clone());
        seen.insert(params.start.clone());

        // Frontier is shown top-first so the "next" marker lands on the node
        // that will actually pop.
        let state = |order: &[String], stack: &[String], current: Option<&str>| GraphState {
            nodes: params.nodes.clone(),
            order: order.to_vec(),
            frontier: stack.iter().rev().cloned().collect(),
            current: current.map(|c| c.to_string()),
            frontier_label: "stack",
        };

        builder.record(
            state(&order, &stack, None),
            format!(
                "Seed the stack with the start node '{}' and mark it seen.",
                params.start
            ),
            Some(0),
        );

        while let Some(node) = stack.pop() {
            order.push(node.clone());
            builder.record(
                state(&order, &stack, Some(&node)),
                format!(
                    "Pop '{}' and visit it; it is number {} in the traversal.",
                    node,
                    order.len()
                ),
                Some(3),
            );

            // Reverse push so the lexicographically smallest neighbor pops
            // first.
            let neighbors = params.adjacency.get(&node).cloned().unwrap_or_default();
            for neighbor in neighbors.into_iter().rev() {
                if seen.insert(neighbor.clone()) {
                    stack.push(neighbor.clone());
                    builder.record(
                        state(&order, &stack, Some(&node)),
                        format!(
                            "Neighbor '{}' of '{}' is unseen; push it to explore before backtracking.",
                            neighbor, node
                        ),
                        Some(7),
                    );
                }
            }
        }

        let unreached = params.nodes.len() - order.len();
        let tail = if unreached == 0 {
            "every node was reached.".to_string()
        } else {
            format!("{} node(s) were unreachable from the start.", unreached)
        };
        builder.record_terminal(
            state(&order, &stack, None),
            format!(
                "Stack emptied; visit order is [{}] and {}",
                order.join(", "),
                tail
            ),
            Some(8),
        );
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_graph;

    #[test]
    fn bfs_visits_level_by_level() {
        let params = parse_graph("nodes: a b c d e; edges: a-b a-c b-d c-e; start: a").unwrap();
        let trace = BreadthFirst.generate(&params).unwrap();
        assert_eq!(trace.last().state.order, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn dfs_dives_before_backtracking() {
        let params = parse_graph("nodes: a b c d e; edges: a-b a-c b-d c-e; start: a").unwrap();
        let trace = DepthFirst.generate(&params).unwrap();
        assert_eq!(trace.last().state.order, vec!["a", "b", "d", "c", "e"]);
    }

    #[test]
    fn unreachable_nodes_stay_unvisited() {
        let params = parse_graph("nodes: a b c; edges: a-b; start: a").unwrap();
        let trace = BreadthFirst.generate(&params).unwrap();
        assert_eq!(trace.last().state.order, vec!["a", "b"]);
    }
}
