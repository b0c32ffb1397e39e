//! Input validation: raw text to typed algorithm parameters
//!
//! Each algorithm family declares one parse function. The functions are
//! callable on their own (the session re-validates stored input on a variant
//! switch without touching the loaded trace) and every failure names the
//! violated constraint via [`ValidationError`].
//!
//! # Size caps
//!
//! Trace generation materializes the whole history up front, so every schema
//! carries an explicit bound that keeps generation time and memory small:
//!
//! - integer arrays: [`MIN_ARRAY_LEN`]..=[`MAX_ARRAY_LEN`] elements
//! - graphs: at most [`MAX_GRAPH_NODES`] nodes and [`MAX_GRAPH_EDGES`] edges
//! - queue programs: 1..=[`MAX_QUEUE_OPS`] operations

use rustc_hash::FxHashMap;
use std::fmt;

pub const MIN_ARRAY_LEN: usize = 2;
pub const MAX_ARRAY_LEN: usize = 64;
pub const MAX_GRAPH_NODES: usize = 26;
pub const MAX_GRAPH_EDGES: usize = 64;
pub const MAX_QUEUE_OPS: usize = 64;

/// A rejected input, naming the constraint it violated.
///
/// Always recoverable: the caller keeps its editing surface, and no playback
/// state is touched.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Input contained no elements at all
    Empty,

    /// A token that should have been an integer
    NotANumber { token: String },

    /// Fewer elements than the schema minimum
    TooFew { got: usize, min: usize },

    /// More elements than the schema cap
    TooMany { got: usize, max: usize },

    /// Heights must be non-negative
    NegativeHeight { value: i64 },

    /// A required `key:` section is absent from a graph description
    MissingSection { section: &'static str },

    /// Node declared twice
    DuplicateNode { name: String },

    /// Edge endpoint not present in the node list
    UnknownNode { name: String },

    /// Edge text not of the form `a-b`
    BadEdge { text: String },

    /// Start node not present in the node list
    StartNodeMissing { name: String },

    /// Queue operation not `enqueue N` or `dequeue`
    BadOperation { text: String },

    /// A dequeue at this position would run on an empty queue
    DequeueOnEmpty { op_index: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "input is empty"),
            ValidationError::NotANumber { token } => {
                write!(f, "'{}' is not an integer", token)
            }
            ValidationError::TooFew { got, min } => {
                write!(f, "need at least {} elements, got {}", min, got)
            }
            ValidationError::TooMany { got, max } => {
                write!(f, "at most {} elements supported, got {}", max, got)
            }
            ValidationError::NegativeHeight { value } => {
                write!(f, "heights must be non-negative, got {}", value)
            }
            ValidationError::MissingSection { section } => {
                write!(f, "missing '{}:' section", section)
            }
            ValidationError::DuplicateNode { name } => {
                write!(f, "node '{}' declared twice", name)
            }
            ValidationError::UnknownNode { name } => {
                write!(f, "edge references undeclared node '{}'", name)
            }
            ValidationError::BadEdge { text } => {
                write!(f, "'{}' is not an edge of the form a-b", text)
            }
            ValidationError::StartNodeMissing { name } => {
                write!(f, "start node '{}' is not in the node list", name)
            }
            ValidationError::BadOperation { text } => {
                write!(f, "'{}' is not 'enqueue N' or 'dequeue'", text)
            }
            ValidationError::DequeueOnEmpty { op_index } => {
                write!(
                    f,
                    "operation {} dequeues from an already-empty queue",
                    op_index + 1
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse comma-separated non-negative integers (bar heights).
pub fn parse_heights(raw: &str) -> Result<Vec<i64>, ValidationError> {
    let tokens: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(ValidationError::Empty);
    }
    if tokens.len() < MIN_ARRAY_LEN {
        return Err(ValidationError::TooFew {
            got: tokens.len(),
            min: MIN_ARRAY_LEN,
        });
    }
    if tokens.len() > MAX_ARRAY_LEN {
        return Err(ValidationError::TooMany {
            got: tokens.len(),
            max: MAX_ARRAY_LEN,
        });
    }

    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        let value: i64 = token.parse().map_err(|_| ValidationError::NotANumber {
            token: token.to_string(),
        })?;
        if value < 0 {
            return Err(ValidationError::NegativeHeight { value });
        }
        values.push(value);
    }
    Ok(values)
}

/// Validated graph input for the traversal family.
///
/// Adjacency lists are sorted and deduplicated so traversal order is a pure
/// function of the input text.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphParams {
    /// Declaration order, preserved for display
    pub nodes: Vec<String>,
    /// Undirected adjacency; every key and neighbor appears in `nodes`
    pub adjacency: FxHashMap<String, Vec<String>>,
    pub start: String,
}

/// Parse a graph description of the form
/// `nodes: a b c; edges: a-b b-c; start: a`.
///
/// Edges are undirected. The `edges` section may be empty but must be
/// present; every endpoint and the start node must be declared.
pub fn parse_graph(raw: &str) -> Result<GraphParams, ValidationError> {
    let mut nodes_text = None;
    let mut edges_text = None;
    let mut start_text = None;

    for section in raw.split(';') {
        let section = section.trim();
        if section.is_empty() {
            continue;
        }
        let Some((key, value)) = section.split_once(':') else {
            continue;
        };
        match key.trim() {
            "nodes" => nodes_text = Some(value.trim().to_string()),
            "edges" => edges_text = Some(value.trim().to_string()),
            "start" => start_text = Some(value.trim().to_string()),
            _ => {}
        }
    }

    let nodes_text = nodes_text.ok_or(ValidationError::MissingSection { section: "nodes" })?;
    let edges_text = edges_text.ok_or(ValidationError::MissingSection { section: "edges" })?;
    let start = start_text.ok_or(ValidationError::MissingSection { section: "start" })?;

    let nodes: Vec<String> = nodes_text
        .split_whitespace()
        .map(|n| n.to_string())
        .collect();
    if nodes.is_empty() {
        return Err(ValidationError::Empty);
    }
    if nodes.len() > MAX_GRAPH_NODES {
        return Err(ValidationError::TooMany {
            got: nodes.len(),
            max: MAX_GRAPH_NODES,
        });
    }

    let mut adjacency: FxHashMap<String, Vec<String>> = FxHashMap::default();
    for node in &nodes {
        if adjacency.contains_key(node) {
            return Err(ValidationError::DuplicateNode { name: node.clone() });
        }
        adjacency.insert(node.clone(), Vec::new());
    }

    let edges: Vec<&str> = edges_text.split_whitespace().collect();
    if edges.len() > MAX_GRAPH_EDGES {
        return Err(ValidationError::TooMany {
            got: edges.len(),
            max: MAX_GRAPH_EDGES,
        });
    }
    for edge in edges {
        let Some((a, b)) = edge.split_once('-') else {
            return Err(ValidationError::BadEdge {
                text: edge.to_string(),
            });
        };
        if a.is_empty() || b.is_empty() {
            return Err(ValidationError::BadEdge {
                text: edge.to_string(),
            });
        }
        for endpoint in [a, b] {
            if !adjacency.contains_key(endpoint) {
                return Err(ValidationError::UnknownNode {
                    name: endpoint.to_string(),
                });
            }
        }
        if let Some(list) = adjacency.get_mut(a) {
            list.push(b.to_string());
        }
        if let Some(list) = adjacency.get_mut(b) {
            list.push(a.to_string());
        }
    }

    for neighbors in adjacency.values_mut() {
        neighbors.sort();
        neighbors.dedup();
    }

    if !adjacency.contains_key(&start) {
        return Err(ValidationError::StartNodeMissing { name: start });
    }

    Ok(GraphParams {
        nodes,
        adjacency,
        start,
    })
}

/// One operation of a queue program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOp {
    Enqueue(i64),
    Dequeue,
}

/// Parse a comma-separated queue program: `enqueue 5, enqueue 3, dequeue`.
///
/// The schema also checks balance: no prefix of the program may dequeue more
/// elements than were enqueued before it, so the generator never faces an
/// empty-queue dequeue.
pub fn parse_queue_ops(raw: &str) -> Result<Vec<QueueOp>, ValidationError> {
    let tokens: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(ValidationError::Empty);
    }
    if tokens.len() > MAX_QUEUE_OPS {
        return Err(ValidationError::TooMany {
            got: tokens.len(),
            max: MAX_QUEUE_OPS,
        });
    }

    let mut ops = Vec::with_capacity(tokens.len());
    let mut depth: usize = 0;
    for (op_index, token) in tokens.iter().enumerate() {
        let mut words = token.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("enqueue"), Some(number), None) => {
                let value: i64 = number.parse().map_err(|_| ValidationError::NotANumber {
                    token: number.to_string(),
                })?;
                depth += 1;
                ops.push(QueueOp::Enqueue(value));
            }
            (Some("dequeue"), None, None) => {
                if depth == 0 {
                    return Err(ValidationError::DequeueOnEmpty { op_index });
                }
                depth -= 1;
                ops.push(QueueOp::Dequeue);
            }
            _ => {
                return Err(ValidationError::BadOperation {
                    text: token.to_string(),
                });
            }
        }
    }
    Ok(ops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_happy_path() {
        let heights = parse_heights("0, 1,0,2 ,1").unwrap();
        assert_eq!(heights, vec![0, 1, 0, 2, 1]);
    }

    #[test]
    fn heights_reject_bad_token() {
        assert_eq!(
            parse_heights("1,x,3"),
            Err(ValidationError::NotANumber {
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn heights_reject_too_few() {
        assert_eq!(
            parse_heights("7"),
            Err(ValidationError::TooFew { got: 1, min: 2 })
        );
    }

    #[test]
    fn heights_reject_negative() {
        assert_eq!(
            parse_heights("3,-1"),
            Err(ValidationError::NegativeHeight { value: -1 })
        );
    }

    #[test]
    fn graph_happy_path() {
        let graph = parse_graph("nodes: a b c; edges: a-b b-c; start: a").unwrap();
        assert_eq!(graph.nodes, vec!["a", "b", "c"]);
        assert_eq!(graph.start, "a");
        assert_eq!(graph.adjacency["b"], vec!["a", "c"]);
    }

    #[test]
    fn graph_neighbors_sorted_and_deduped() {
        let graph = parse_graph("nodes: a b c; edges: a-c a-b a-b; start: a").unwrap();
        assert_eq!(graph.adjacency["a"], vec!["b", "c"]);
    }

    #[test]
    fn graph_reject_unknown_endpoint() {
        assert_eq!(
            parse_graph("nodes: a b; edges: a-z; start: a"),
            Err(ValidationError::UnknownNode {
                name: "z".to_string()
            })
        );
    }

    #[test]
    fn graph_reject_missing_start_section() {
        assert_eq!(
            parse_graph("nodes: a b; edges: a-b"),
            Err(ValidationError::MissingSection { section: "start" })
        );
    }

    #[test]
    fn graph_reject_absent_start_node() {
        assert_eq!(
            parse_graph("nodes: a b; edges: a-b; start: q"),
            Err(ValidationError::StartNodeMissing {
                name: "q".to_string()
            })
        );
    }

    #[test]
    fn queue_ops_happy_path() {
        let ops = parse_queue_ops("enqueue 5, enqueue 3, dequeue").unwrap();
        assert_eq!(
            ops,
            vec![QueueOp::Enqueue(5), QueueOp::Enqueue(3), QueueOp::Dequeue]
        );
    }

    #[test]
    fn queue_ops_reject_underflow() {
        assert_eq!(
            parse_queue_ops("enqueue 1, dequeue, dequeue"),
            Err(ValidationError::DequeueOnEmpty { op_index: 2 })
        );
    }

    #[test]
    fn queue_ops_reject_garbage() {
        assert_eq!(
            parse_queue_ops("push 4"),
            Err(ValidationError::BadOperation {
                text: "push 4".to_string()
            })
        );
    }
}
