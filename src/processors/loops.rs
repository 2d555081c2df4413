use std::collections::HashSet;

use crate::config::ProcessorConfig;
use crate::error::ArrayResult;
use crate::math::{Array2, RowMatrix};
use crate::processors::processor_trait::ArrayProcessor;
use crate::processors::utils;

/// Processor written with explicit index loops.
#[derive(Debug, Clone, Default)]
pub struct LoopProcessor {
    config: ProcessorConfig,
}

impl LoopProcessor {
    pub fn new(config: ProcessorConfig) -> ArrayResult<Self> {
        utils::check_config(&config)?;
        Ok(LoopProcessor { config })
    }
}

impl ArrayProcessor for LoopProcessor {
    fn none_match(&self, input: &[i32]) -> bool {
        for &num in input {
            if num.wrapping_rem(self.config.divisor) == 0 {
                return false;
            }
        }
        true
    }

    fn some_match(&self, input: &[i32], predicate: &dyn Fn(i32) -> bool) -> bool {
        for &num in input {
            if predicate(num) {
                return true;
            }
        }
        false
    }

    fn all_match(
        &self,
        input: &[&str],
        transform: &dyn Fn(&str) -> i32,
        predicate: &dyn Fn(i32) -> bool,
    ) -> bool {
        for s in input {
            if !predicate(transform(s)) {
                return false;
            }
        }
        true
    }

    fn copy_values(
        &self,
        input: &[i32],
        start_inclusive: isize,
        end_exclusive: isize,
    ) -> ArrayResult<Vec<i32>> {
        let (start, end) = utils::check_copy_bounds(input.len(), start_inclusive, end_exclusive)?;

        let mut output = Vec::with_capacity(end - start);
        for &num in &input[start..end] {
            output.push(num);
        }
        Ok(output)
    }

    fn replace(&self, input: &[i32]) -> Vec<i32> {
        let mut output = input.to_vec();
        utils::replace_in_place(&mut output);
        output
    }

    fn find_second_max(&self, input: &[i32]) -> i32 {
        let mut sorted = input.to_vec();
        sorted.sort_unstable();

        let mut i = sorted.len().saturating_sub(1);
        while i > 0 {
            if sorted[i - 1] != sorted[i] {
                return sorted[i - 1];
            }
            i -= 1;
        }
        panic!("find_second_max requires at least two distinct values");
    }

    fn rearrange(&self, input: &[i32]) -> Vec<i32> {
        let mut output = Vec::with_capacity(input.len());

        for i in (0..input.len()).rev() {
            if input[i] < 0 {
                output.push(input[i]);
            }
        }
        for i in (0..input.len()).rev() {
            if input[i] >= 0 {
                output.push(input[i]);
            }
        }
        output
    }

    fn filter(&self, input: &[i32]) -> Vec<i32> {
        assert!(!input.is_empty(), "filter requires a non-empty input");

        let mut max = input[0];
        for &num in &input[1..] {
            if num > max {
                max = num;
            }
        }
        let threshold = max.saturating_sub(self.config.filter_window);

        let mut output = Vec::new();
        for &num in input {
            if num >= threshold {
                output.push(num);
            }
        }
        output
    }

    fn insert_values(
        &self,
        input: &[i32],
        start_inclusive: isize,
        values: &[i32],
    ) -> ArrayResult<Vec<i32>> {
        let start = utils::check_insert_index(input.len(), start_inclusive)?;

        let mut output = Vec::with_capacity(input.len() + values.len());
        for &num in &input[..start] {
            output.push(num);
        }
        for &num in values {
            output.push(num);
        }
        for &num in &input[start..] {
            output.push(num);
        }
        Ok(output)
    }

    fn merge_sorted_arrays(&self, input: &[i32], input2: &[i32]) -> ArrayResult<Vec<i32>> {
        let mut output = Vec::with_capacity(input.len() + input2.len());
        let mut idx1 = 0;
        let mut idx2 = 0;

        while idx1 < input.len() && idx2 < input2.len() {
            if input[idx1] < input2[idx2] {
                utils::push_ascending(&mut output, input[idx1])?;
                idx1 += 1;
            } else {
                utils::push_ascending(&mut output, input2[idx2])?;
                idx2 += 1;
            }
        }

        for &num in &input[idx1..] {
            utils::push_ascending(&mut output, num)?;
        }
        for &num in &input2[idx2..] {
            utils::push_ascending(&mut output, num)?;
        }
        Ok(output)
    }

    fn matrix_multiplication(
        &self,
        left: Option<&RowMatrix>,
        right: Option<&RowMatrix>,
    ) -> ArrayResult<Array2<i32>> {
        let ops = utils::prepare_multiplication(left, right)?;
        let mut output = Array2::<i32>::zeros(ops.rows(), ops.cols);

        for r in 0..ops.rows() {
            for c in 0..ops.cols {
                let mut acc = 0i32;
                for k in 0..ops.inner() {
                    acc = acc.wrapping_add(ops.left[r][k].wrapping_mul(ops.right[k][c]));
                }
                output[(r, c)] = acc;
            }
        }
        Ok(output)
    }

    fn distinct(&self, input: &[i32]) -> Vec<i32> {
        let mut seen = HashSet::with_capacity(input.len());
        let mut output = Vec::new();
        for &num in input {
            if seen.insert(num) {
                output.push(num);
            }
        }
        output
    }

    fn name(&self) -> &str {
        "loops"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_processor_rejects_zero_divisor() {
        let config = ProcessorConfig {
            divisor: 0,
            ..ProcessorConfig::default()
        };
        assert!(LoopProcessor::new(config).is_err());
    }

    #[test]
    fn test_none_match_custom_divisor() {
        let p = LoopProcessor::new(ProcessorConfig {
            divisor: 3,
            ..ProcessorConfig::default()
        })
        .unwrap();
        assert!(p.none_match(&[1, 2, 4, 5]));
        assert!(!p.none_match(&[1, 2, 9]));
    }

    #[test]
    fn test_merge_checks_copied_tail() {
        let p = LoopProcessor::default();
        assert!(p
            .merge_sorted_arrays(&[1], &[2, 5, 3])
            .unwrap_err()
            .is_invalid_argument());
        assert!(p.merge_sorted_arrays(&[3, 1], &[2]).unwrap_err().is_invalid_argument());
        assert_eq!(p.merge_sorted_arrays(&[1], &[2, 5, 9]).unwrap(), vec![1, 2, 5, 9]);
    }

    #[test]
    fn test_merge_ties_take_second_input_first() {
        let p = LoopProcessor::default();
        assert_eq!(p.merge_sorted_arrays(&[1, 2], &[1, 2]).unwrap(), vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_filter_window_from_config() {
        let p = LoopProcessor::new(ProcessorConfig {
            filter_window: 0,
            ..ProcessorConfig::default()
        })
        .unwrap();
        assert_eq!(p.filter(&[3, 7, 7, 1]), vec![7, 7]);
    }

    #[test]
    fn test_filter_near_min_does_not_wrap() {
        let p = LoopProcessor::default();
        assert_eq!(p.filter(&[i32::MIN, i32::MIN + 5]), vec![i32::MIN, i32::MIN + 5]);
    }

    #[test]
    fn test_matrix_multiplication_wide_right() {
        let p = LoopProcessor::default();
        let left = RowMatrix::from(vec![vec![1, 2]]);
        let right = RowMatrix::from(vec![vec![1, 0, 2], vec![0, 1, 3]]);
        let out = p.matrix_multiplication(Some(&left), Some(&right)).unwrap();
        assert_eq!(out.to_rows(), vec![vec![1, 2, 8]]);
    }

    #[test]
    fn test_matrix_multiplication_wraps() {
        let p = LoopProcessor::default();
        let left = RowMatrix::from(vec![vec![i32::MAX, 1]]);
        let right = RowMatrix::from(vec![vec![1], vec![1]]);
        let out = p.matrix_multiplication(Some(&left), Some(&right)).unwrap();
        assert_eq!(out[(0, 0)], i32::MIN);
    }
}
