//! Array family: trapping rain water and container with most water
//!
//! Both problems ship a brute-force and a two-pointer variant over the same
//! [`ArrayState`] record, so the renderer can switch between them without
//! caring which one produced the trace.

use super::TraceGenerator;
use crate::trace::view::{Cell, DisplayState, Emphasis, Marker};
use crate::trace::{GenerationError, Trace, TraceBuilder};

/// Snapshot state for algorithms that walk pointers over an integer array.
///
/// `values` is a full copy of the input array; `pointers` are (label, index)
/// pairs; `accented` marks elements already counted or part of the best
/// answer so far.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayState {
    pub values: Vec<i64>,
    pub pointers: Vec<(&'static str, usize)>,
    pub accented: Vec<usize>,
    pub result_label: &'static str,
    pub result: i64,
}

impl ArrayState {
    fn new(
        values: &[i64],
        pointers: Vec<(&'static str, usize)>,
        accented: Vec<usize>,
        result_label: &'static str,
        result: i64,
    ) -> Self {
        ArrayState {
            values: values.to_vec(),
            pointers,
            accented,
            result_label,
            result,
        }
    }
}

impl DisplayState for ArrayState {
    fn cells(&self) -> Vec<Cell> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let emphasis = if self.pointers.iter().any(|&(_, p)| p == i) {
                    Emphasis::Active
                } else if self.accented.contains(&i) {
                    Emphasis::Accent
                } else {
                    Emphasis::Normal
                };
                Cell {
                    id: format!("v{}", i),
                    label: value.to_string(),
                    emphasis,
                }
            })
            .collect()
    }

    fn markers(&self) -> Vec<Marker> {
        self.pointers
            .iter()
            .map(|&(label, index)| Marker {
                label: label.to_string(),
                cell_id: format!("v{}", index),
            })
            .collect()
    }

    fn bars(&self) -> Option<Vec<u64>> {
        // Heights are validated non-negative
        Some(self.values.iter().map(|&v| v.max(0) as u64).collect())
    }

    fn summary(&self) -> String {
        format!("{} = {}", self.result_label, self.result)
    }
}

fn check_min_len(algorithm: &'static str, heights: &[i64]) -> Result<(), GenerationError> {
    if heights.len() < 2 {
        return Err(GenerationError::InconsistentParams {
            algorithm,
            message: format!("need at least 2 heights, got {}", heights.len()),
        });
    }
    Ok(())
}

/// Trapping rain water, converging pointers, O(n).
pub struct TrapTwoPointer;

const TRAP_TWO_POINTER_LISTING: &[&str] = &[
    "left = 0, right = n - 1",
    "left_max = 0, right_max = 0, water = 0",
    "while left < right:",
    "    if height[left] < height[right]:",
    "        left_max = max(left_max, height[left])",
    "        water += left_max - height[left]",
    "        left += 1",
    "    else:",
    "        right_max = max(right_max, height[right])",
    "        water += right_max - height[right]",
    "        right -= 1",
    "return water",
];

impl TraceGenerator for TrapTwoPointer {
    type Params = Vec<i64>;
    type State = ArrayState;

    fn name(&self) -> &'static str {
        "two pointers"
    }

    fn listing(&self) -> &'static [&'static str] {
        TRAP_TWO_POINTER_LISTING
    }

    fn generate(&self, heights: &Vec<i64>) -> Result<Trace<ArrayState>, GenerationError> {
        check_min_len("trap/two-pointer", heights)?;
        let mut builder = TraceBuilder::new("trap/two-pointer");

        let mut left = 0usize;
        let mut right = heights.len() - 1;
        let mut left_max = 0i64;
        let mut right_max = 0i64;
        let mut water = 0i64;
        let mut counted: Vec<usize> = Vec::new();

        let state = |l: usize, r: usize, counted: &[usize], water: i64| {
            ArrayState::new(
                heights,
                vec![("L", l), ("R", r)],
                counted.to_vec(),
                "water",
                water,
            )
        };

        builder.record(
            state(left, right, &counted, water),
            format!(
                "Start with left at index 0 and right at index {}; no water trapped yet.",
                right
            ),
            Some(0),
        );

        while left < right {
            builder.record(
                state(left, right, &counted, water),
                format!(
                    "Compare height[{}]={} with height[{}]={}; the shorter side limits the water level.",
                    left, heights[left], right, heights[right]
                ),
                Some(3),
            );

            if heights[left] < heights[right] {
                left_max = left_max.max(heights[left]);
                let gained = left_max - heights[left];
                water += gained;
                counted.push(left);
                let explanation = if gained > 0 {
                    format!(
                        "Column {} sits below left_max={}, trapping {} unit(s); water is now {}. Move left inward.",
                        left, left_max, gained, water
                    )
                } else {
                    format!(
                        "Column {} is the new left_max={}, so it traps nothing. Move left inward.",
                        left, left_max
                    )
                };
                left += 1;
                builder.record(state(left, right, &counted, water), explanation, Some(6));
            } else {
                right_max = right_max.max(heights[right]);
                let gained = right_max - heights[right];
                water += gained;
                counted.push(right);
                let explanation = if gained > 0 {
                    format!(
                        "Column {} sits below right_max={}, trapping {} unit(s); water is now {}. Move right inward.",
                        right, right_max, gained, water
                    )
                } else {
                    format!(
                        "Column {} is the new right_max={}, so it traps nothing. Move right inward.",
                        right, right_max
                    )
                };
                right -= 1;
                builder.record(state(left, right, &counted, water), explanation, Some(10));
            }
        }

        builder.record_terminal(
            state(left, right, &counted, water),
            format!(
                "The pointers met, so every column has been accounted for: total trapped water is {}.",
                water
            ),
            Some(11),
        );
        builder.finish()
    }
}

/// Trapping rain water, per-column scan of both sides, O(n²).
pub struct TrapBruteForce;

const TRAP_BRUTE_FORCE_LISTING: &[&str] = &[
    "water = 0",
    "for i in 0 .. n:",
    "    left_max  = max(height[0 ..= i])",
    "    right_max = max(height[i .. n])",
    "    water += min(left_max, right_max) - height[i]",
    "return water",
];

impl TraceGenerator for TrapBruteForce {
    type Params = Vec<i64>;
    type State = ArrayState;

    fn name(&self) -> &'static str {
        "brute force"
    }

    fn listing(&self) -> &'static [&'static str] {
        TRAP_BRUTE_FORCE_LISTING
    }

    fn generate(&self, heights: &Vec<i64>) -> Result<Trace<ArrayState>, GenerationError> {
        check_min_len("trap/brute-force", heights)?;
        let mut builder = TraceBuilder::new("trap/brute-force");

        let mut water = 0i64;
        let mut counted: Vec<usize> = Vec::new();

        let state = |i: usize, counted: &[usize], water: i64| {
            ArrayState::new(heights, vec![("i", i)], counted.to_vec(), "water", water)
        };

        builder.record(
            state(0, &counted, water),
            "Visit every column and scan both sides for the walls that enclose it.",
            Some(0),
        );

        for i in 0..heights.len() {
            // Re-scanned from scratch every iteration; that is the point of
            // this variant.
            let left_max = heights[..=i].iter().copied().max().unwrap_or(0);
            let right_max = heights[i..].iter().copied().max().unwrap_or(0);
            let level = left_max.min(right_max);
            let gained = level - heights[i];

            builder.record(
                state(i, &counted, water),
                format!(
                    "At column {}: tallest wall to the left is {}, to the right is {}; water can stand at level {}.",
                    i, left_max, right_max, level
                ),
                Some(3),
            );

            if gained > 0 {
                water += gained;
                counted.push(i);
                builder.record(
                    state(i, &counted, water),
                    format!(
                        "Column {} (height {}) holds {} unit(s) below level {}; water is now {}.",
                        i, heights[i], gained, level, water
                    ),
                    Some(4),
                );
            }
        }

        let last = heights.len() - 1;
        builder.record_terminal(
            state(last, &counted, water),
            format!(
                "Every column has been measured: total trapped water is {}.",
                water
            ),
            Some(5),
        );
        builder.finish()
    }
}

/// Container with most water, converging pointers, O(n).
pub struct ContainerTwoPointer;

const CONTAINER_TWO_POINTER_LISTING: &[&str] = &[
    "left = 0, right = n - 1",
    "best = 0",
    "while left < right:",
    "    area = min(height[left], height[right]) * (right - left)",
    "    best = max(best, area)",
    "    if height[left] < height[right]: left += 1",
    "    else: right -= 1",
    "return best",
];

impl TraceGenerator for ContainerTwoPointer {
    type Params = Vec<i64>;
    type State = ArrayState;

    fn name(&self) -> &'static str {
        "two pointers"
    }

    fn listing(&self) -> &'static [&'static str] {
        CONTAINER_TWO_POINTER_LISTING
    }

    fn generate(&self, heights: &Vec<i64>) -> Result<Trace<ArrayState>, GenerationError> {
        check_min_len("container/two-pointer", heights)?;
        let mut builder = TraceBuilder::new("container/two-pointer");

        let mut left = 0usize;
        let mut right = heights.len() - 1;
        let mut best = 0i64;
        let mut best_pair: Option<(usize, usize)> = None;

        let state = |l: usize, r: usize, best_pair: Option<(usize, usize)>, best: i64| {
            let accented = best_pair.map(|(a, b)| vec![a, b]).unwrap_or_default();
            ArrayState::new(heights, vec![("L", l), ("R", r)], accented, "best area", best)
        };

        builder.record(
            state(left, right, best_pair, best),
            "Start with the widest container: left at the first line, right at the last.",
            Some(0),
        );

        while left < right {
            let width = (right - left) as i64;
            let limit = heights[left].min(heights[right]);
            let area = limit * width;

            builder.record(
                state(left, right, best_pair, best),
                format!(
                    "Lines {} and {} span width {}; the shorter line (height {}) caps the area at {}.",
                    left, right, width, limit, area
                ),
                Some(3),
            );

            if area > best {
                best = area;
                best_pair = Some((left, right));
                builder.record(
                    state(left, right, best_pair, best),
                    format!("Area {} beats the previous best; remember this pair.", area),
                    Some(4),
                );
            }

            // Moving the taller line can only shrink the area, so advance the
            // shorter one.
            let explanation;
            let line;
            if heights[left] < heights[right] {
                left += 1;
                explanation = format!(
                    "The left line is shorter, so a taller candidate can only be found by moving left to {}.",
                    left
                );
                line = 5;
            } else {
                right -= 1;
                explanation = format!(
                    "The right line is not taller, so move right inward to {}.",
                    right
                );
                line = 6;
            }
            builder.record(state(left, right, best_pair, best), explanation, Some(line));
        }

        builder.record_terminal(
            state(left, right, best_pair, best),
            format!(
                "The pointers met; the largest container holds area {}.",
                best
            ),
            Some(7),
        );
        builder.finish()
    }
}

/// Container with most water, all pairs, O(n²).
pub struct ContainerBruteForce;

const CONTAINER_BRUTE_FORCE_LISTING: &[&str] = &[
    "best = 0",
    "for i in 0 .. n:",
    "    for j in i + 1 .. n:",
    "        area = min(height[i], height[j]) * (j - i)",
    "        best = max(best, area)",
    "return best",
];

impl TraceGenerator for ContainerBruteForce {
    type Params = Vec<i64>;
    type State = ArrayState;

    fn name(&self) -> &'static str {
        "brute force"
    }

    fn listing(&self) -> &'static [&'static str] {
        CONTAINER_BRUTE_FORCE_LISTING
    }

    fn generate(&self, heights: &Vec<i64>) -> Result<Trace<ArrayState>, GenerationError> {
        check_min_len("container/brute-force", heights)?;
        let mut builder = TraceBuilder::new("container/brute-force");

        let mut best = 0i64;
        let mut best_pair: Option<(usize, usize)> = None;

        let state = |i: usize, j: usize, best_pair: Option<(usize, usize)>, best: i64| {
            let accented = best_pair.map(|(a, b)| vec![a, b]).unwrap_or_default();
            ArrayState::new(
                heights,
                vec![("i", i), ("j", j)],
                accented,
                "best area",
                best,
            )
        };

        builder.record(
            state(0, 1, best_pair, best),
            "Try every pair of lines and keep the largest area seen.",
            Some(0),
        );

        for i in 0..heights.len() {
            for j in i + 1..heights.len() {
                let width = (j - i) as i64;
                let area = heights[i].min(heights[j]) * width;

                builder.record(
                    state(i, j, best_pair, best),
                    format!(
                        "Pair ({}, {}): width {} times limiting height {} gives area {}.",
                        i,
                        j,
                        width,
                        heights[i].min(heights[j]),
                        area
                    ),
                    Some(3),
                );

                if area > best {
                    best = area;
                    best_pair = Some((i, j));
                    builder.record(
                        state(i, j, best_pair, best),
                        format!("Area {} is a new best.", area),
                        Some(4),
                    );
                }
            }
        }

        let n = heights.len();
        builder.record_terminal(
            state(n - 2, n - 1, best_pair, best),
            format!("All pairs tried; the largest container holds area {}.", best),
            Some(5),
        );
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trap_variants_agree_on_reference_input() {
        let heights = vec![0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1];
        let fast = TrapTwoPointer.generate(&heights).unwrap();
        let slow = TrapBruteForce.generate(&heights).unwrap();
        assert_eq!(fast.last().state.result, 6);
        assert_eq!(slow.last().state.result, 6);
    }

    #[test]
    fn container_variants_agree_on_reference_input() {
        let heights = vec![1, 8, 6, 2, 5, 4, 8, 3, 7];
        let fast = ContainerTwoPointer.generate(&heights).unwrap();
        let slow = ContainerBruteForce.generate(&heights).unwrap();
        assert_eq!(fast.last().state.result, 49);
        assert_eq!(slow.last().state.result, 49);
    }

    #[test]
    fn generators_reject_single_element() {
        let heights = vec![5];
        assert!(TrapTwoPointer.generate(&heights).is_err());
        assert!(ContainerBruteForce.generate(&heights).is_err());
    }
}
