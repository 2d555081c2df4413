use std::collections::HashSet;

use crate::config::ProcessorConfig;
use crate::error::ArrayResult;
use crate::math::{Array2, RowMatrix};
use crate::processors::processor_trait::ArrayProcessor;
use crate::processors::utils;

/// Processor built from iterator adaptors. Produces the same results and
/// errors as [`LoopProcessor`](crate::processors::loops::LoopProcessor).
#[derive(Debug, Clone, Default)]
pub struct IterProcessor {
    config: ProcessorConfig,
}

impl IterProcessor {
    pub fn new(config: ProcessorConfig) -> ArrayResult<Self> {
        utils::check_config(&config)?;
        Ok(IterProcessor { config })
    }
}

impl ArrayProcessor for IterProcessor {
    fn none_match(&self, input: &[i32]) -> bool {
        let divisor = self.config.divisor;
        !input.iter().any(|num| num.wrapping_rem(divisor) == 0)
    }

    fn some_match(&self, input: &[i32], predicate: &dyn Fn(i32) -> bool) -> bool {
        input.iter().any(|&num| predicate(num))
    }

    fn all_match(
        &self,
        input: &[&str],
        transform: &dyn Fn(&str) -> i32,
        predicate: &dyn Fn(i32) -> bool,
    ) -> bool {
        input.iter().all(|s| predicate(transform(s)))
    }

    fn copy_values(
        &self,
        input: &[i32],
        start_inclusive: isize,
        end_exclusive: isize,
    ) -> ArrayResult<Vec<i32>> {
        let (start, end) = utils::check_copy_bounds(input.len(), start_inclusive, end_exclusive)?;
        Ok(input[start..end].to_vec())
    }

    fn replace(&self, input: &[i32]) -> Vec<i32> {
        input
            .iter()
            .enumerate()
            .map(|(i, &num)| {
                if i % 2 == 0 {
                    num.wrapping_mul(2)
                } else {
                    num.wrapping_neg()
                }
            })
            .collect()
    }

    fn find_second_max(&self, input: &[i32]) -> i32 {
        let mut sorted = input.to_vec();
        sorted.sort_unstable();
        sorted
            .windows(2)
            .rev()
            .find(|pair| pair[0] != pair[1])
            .map(|pair| pair[0])
            .unwrap_or_else(|| panic!("find_second_max requires at least two distinct values"))
    }

    fn rearrange(&self, input: &[i32]) -> Vec<i32> {
        let negatives = input.iter().rev().filter(|&&num| num < 0);
        let rest = input.iter().rev().filter(|&&num| num >= 0);
        negatives.chain(rest).copied().collect()
    }

    fn filter(&self, input: &[i32]) -> Vec<i32> {
        let max = input
            .iter()
            .copied()
            .max()
            .unwrap_or_else(|| panic!("filter requires a non-empty input"));
        let threshold = max.saturating_sub(self.config.filter_window);
        input.iter().copied().filter(|&num| num >= threshold).collect()
    }

    fn insert_values(
        &self,
        input: &[i32],
        start_inclusive: isize,
        values: &[i32],
    ) -> ArrayResult<Vec<i32>> {
        let start = utils::check_insert_index(input.len(), start_inclusive)?;
        let (head, tail) = input.split_at(start);
        Ok(head.iter().chain(values).chain(tail).copied().collect())
    }

    fn merge_sorted_arrays(&self, input: &[i32], input2: &[i32]) -> ArrayResult<Vec<i32>> {
        let mut output = Vec::with_capacity(input.len() + input2.len());
        let mut first = input.iter().copied().peekable();
        let mut second = input2.iter().copied().peekable();

        while let (Some(&a), Some(&b)) = (first.peek(), second.peek()) {
            let next = if a < b {
                first.next();
                a
            } else {
                second.next();
                b
            };
            utils::push_ascending(&mut output, next)?;
        }

        first
            .chain(second)
            .try_for_each(|num| utils::push_ascending(&mut output, num))?;
        Ok(output)
    }

    fn matrix_multiplication(
        &self,
        left: Option<&RowMatrix>,
        right: Option<&RowMatrix>,
    ) -> ArrayResult<Array2<i32>> {
        let ops = utils::prepare_multiplication(left, right)?;

        let right = &ops.right;
        let cols = ops.cols;

        let data: Vec<i32> = ops
            .left
            .iter()
            .flat_map(|row| {
                (0..cols).map(move |c| {
                    row.iter()
                        .zip(right)
                        .fold(0i32, |acc, (&l, r)| acc.wrapping_add(l.wrapping_mul(r[c])))
                })
            })
            .collect();

        Ok(Array2::from_shape_vec((ops.rows(), cols), data)?)
    }

    fn distinct(&self, input: &[i32]) -> Vec<i32> {
        let mut seen = HashSet::with_capacity(input.len());
        input.iter().copied().filter(|&num| seen.insert(num)).collect()
    }

    fn name(&self) -> &str {
        "iterators"
    }
}
