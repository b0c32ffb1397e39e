//! Queue-operation replay
//!
//! Replays a validated program of enqueue/dequeue operations, narrating the
//! queue contents before and after each mutation. Every enqueued element
//! keeps the ordinal it was enqueued with as its stable display id, so an
//! overlay can follow one element from back to front.

use super::TraceGenerator;
use crate::input::QueueOp;
use crate::trace::view::{Cell, DisplayState, Emphasis, Marker};
use crate::trace::{GenerationError, Trace, TraceBuilder};

/// One element in the queue, tagged with its enqueue ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueItem {
    pub seq: usize,
    pub value: i64,
}

/// Snapshot state for the queue family.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueState {
    /// Front of the queue first
    pub items: Vec<QueueItem>,
    pub total_enqueues: usize,
    pub total_dequeues: usize,
    /// Element touched by the most recent operation
    pub touched: Option<usize>,
}

impl QueueState {
    /// Values front-to-back, without the display ordinals.
    pub fn values(&self) -> Vec<i64> {
        self.items.iter().map(|item| item.value).collect()
    }
}

impl DisplayState for QueueState {
    fn cells(&self) -> Vec<Cell> {
        self.items
            .iter()
            .map(|item| Cell {
                id: format!("e{}", item.seq),
                label: item.value.to_string(),
                emphasis: if self.touched == Some(item.seq) {
                    Emphasis::Active
                } else {
                    Emphasis::Normal
                },
            })
            .collect()
    }

    fn markers(&self) -> Vec<Marker> {
        let mut markers = Vec::new();
        if let Some(front) = self.items.first() {
            markers.push(Marker {
                label: "front".to_string(),
                cell_id: format!("e{}", front.seq),
            });
        }
        if let Some(back) = self.items.last() {
            if self.items.len() > 1 {
                markers.push(Marker {
                    label: "back".to_string(),
                    cell_id: format!("e{}", back.seq),
                });
            }
        }
        markers
    }

    fn summary(&self) -> String {
        format!(
            "len = {} | enqueues = {} | dequeues = {}",
            self.items.len(),
            self.total_enqueues,
            self.total_dequeues
        )
    }
}

/// Straight replay of the validated operation list.
pub struct QueueOps;

const QUEUE_OPS_LISTING: &[&str] = &[
    "queue = []",
    "for op in program:",
    "    if op is enqueue x:",
    "        queue.push_back(x)",
    "    if op is dequeue:",
    "        queue.pop_front()",
    "return queue",
];

impl TraceGenerator for QueueOps {
    type Params = Vec<QueueOp>;
    type State = QueueState;

    fn name(&self) -> &'static str {
        "replay"
    }

    fn listing(&self) -> &'static [&'static str] {
        QUEUE_OPS_LISTING
    }

    fn generate(&self, ops: &Vec<QueueOp>) -> Result<Trace<QueueState>, GenerationError> {
        if ops.is_empty() {
            return Err(GenerationError::InconsistentParams {
                algorithm: "queue/replay",
                message: "empty operation list".to_string(),
            });
        }

        let mut builder = TraceBuilder::new("queue/replay");
        let mut items: Vec<QueueItem> = Vec::new();
        let mut total_enqueues = 0usize;
        let mut total_dequeues = 0usize;

        let state = |items: &[QueueItem], enq: usize, deq: usize, touched: Option<usize>| {
            QueueState {
                items: items.to_vec(),
                total_enqueues: enq,
                total_dequeues: deq,
                touched,
            }
        };

        builder.record(
            state(&items, total_enqueues, total_dequeues, None),
            format!("Start with an empty queue; {} operation(s) to run.", ops.len()),
            Some(0),
        );

        for (op_index, op) in ops.iter().enumerate() {
            match *op {
                QueueOp::Enqueue(value) => {
                    builder.record(
                        state(&items, total_enqueues, total_dequeues, None),
                        format!(
                            "Operation {}: enqueue {} — new elements join at the back.",
                            op_index + 1,
                            value
                        ),
                        Some(2),
                    );
                    let seq = total_enqueues;
                    items.push(QueueItem { seq, value });
                    total_enqueues += 1;
                    builder.record(
                        state(&items, total_enqueues, total_dequeues, Some(seq)),
                        format!(
                            "{} is now at the back; the queue holds {} element(s).",
                            value,
                            items.len()
                        ),
                        Some(3),
                    );
                }
                QueueOp::Dequeue => {
                    // Validation guarantees the queue is non-empty here; an
                    // empty queue means the schemas drifted apart.
                    if items.is_empty() {
                        return Err(GenerationError::InconsistentParams {
                            algorithm: "queue/replay",
                            message: format!("operation {} dequeues an empty queue", op_index + 1),
                        });
                    }
                    let front = items[0];
                    builder.record(
                        state(&items, total_enqueues, total_dequeues, Some(front.seq)),
                        format!(
                            "Operation {}: dequeue — the front element {} leaves first (FIFO).",
                            op_index + 1,
                            front.value
                        ),
                        Some(4),
                    );
                    items.remove(0);
                    total_dequeues += 1;
                    builder.record(
                        state(&items, total_enqueues, total_dequeues, None),
                        format!(
                            "{} has left the queue; {} element(s) remain.",
                            front.value,
                            items.len()
                        ),
                        Some(5),
                    );
                }
            }
        }

        let values: Vec<String> = items.iter().map(|item| item.value.to_string()).collect();
        builder.record_terminal(
            state(&items, total_enqueues, total_dequeues, None),
            format!(
                "Program finished: queue is [{}] after {} enqueue(s) and {} dequeue(s).",
                values.join(", "),
                total_enqueues,
                total_dequeues
            ),
            Some(6),
        );
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_queue_ops;

    #[test]
    fn reference_scenario() {
        let ops = parse_queue_ops("enqueue 5, enqueue 3, dequeue").unwrap();
        let trace = QueueOps.generate(&ops).unwrap();
        let last = &trace.last().state;
        assert_eq!(last.values(), vec![3]);
        assert_eq!(last.total_enqueues, 2);
        assert_eq!(last.total_dequeues, 1);
    }

    #[test]
    fn element_ids_are_stable_across_snapshots() {
        let ops = parse_queue_ops("enqueue 5, enqueue 3, dequeue").unwrap();
        let trace = QueueOps.generate(&ops).unwrap();
        // After the dequeue, the survivor keeps the id it was enqueued with.
        let last_cells = trace.last().state.cells();
        assert_eq!(last_cells.len(), 1);
        assert_eq!(last_cells[0].id, "e1");
    }
}
