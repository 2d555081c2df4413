use crate::error::ArrayResult;
use crate::math::{Array2, RowMatrix};
use crate::processors::utils;

/// The full set of array operations.
///
/// Every implementation must agree on results and on the error returned for
/// a given input. Predicates and transforms are taken as `&dyn Fn` so that
/// processors can be handed around as `Box<dyn ArrayProcessor>`.
pub trait ArrayProcessor: Send + Sync {
    /// True if no element is divisible by the configured divisor.
    fn none_match(&self, input: &[i32]) -> bool;

    /// True if at least one element satisfies `predicate`. Stops at the first match.
    fn some_match(&self, input: &[i32], predicate: &dyn Fn(i32) -> bool) -> bool;

    /// True if `predicate(transform(s))` holds for every string. Stops at the
    /// first failure.
    fn all_match(
        &self,
        input: &[&str],
        transform: &dyn Fn(&str) -> i32,
        predicate: &dyn Fn(i32) -> bool,
    ) -> bool;

    /// Copy `input[start_inclusive..end_exclusive]` into a new vector.
    ///
    /// Returns `InvalidArgument` if `start_inclusive > end_exclusive`,
    /// `start_inclusive < 0` or `end_exclusive > input.len()`.
    fn copy_values(
        &self,
        input: &[i32],
        start_inclusive: isize,
        end_exclusive: isize,
    ) -> ArrayResult<Vec<i32>>;

    /// Double even-indexed values and negate odd-indexed ones.
    ///
    /// `input` is left untouched; see [`crate::replace_in_place`] for the
    /// mutating form.
    fn replace(&self, input: &[i32]) -> Vec<i32>;

    /// Second largest distinct value.
    ///
    /// # Panics
    ///
    /// Panics if `input` holds fewer than two distinct values.
    fn find_second_max(&self, input: &[i32]) -> i32;

    /// Negative values first, then the rest, each group in reverse order of
    /// appearance.
    fn rearrange(&self, input: &[i32]) -> Vec<i32>;

    /// Keep, in order, every value no more than the filter window below the
    /// maximum.
    ///
    /// `max - window` saturates at `i32::MIN` rather than wrapping, so a
    /// maximum within the window of `i32::MIN` keeps every element instead
    /// of wrapping to a huge threshold that drops them all.
    ///
    /// # Panics
    ///
    /// Panics if `input` is empty.
    fn filter(&self, input: &[i32]) -> Vec<i32>;

    /// Insert `values` before `input[start_inclusive]`.
    ///
    /// Returns `InvalidArgument` unless `0 <= start_inclusive < input.len()`;
    /// appending at `input.len()` is rejected as well.
    fn insert_values(
        &self,
        input: &[i32],
        start_inclusive: isize,
        values: &[i32],
    ) -> ArrayResult<Vec<i32>>;

    /// Merge two ascending sequences.
    ///
    /// Every element placed in the output, including those copied after one
    /// side runs out, is compared with the one before it; a descending pair
    /// fails with `InvalidArgument`. The check rides along with the merge
    /// walk; no separate scan of either input is made.
    fn merge_sorted_arrays(&self, input: &[i32], input2: &[i32]) -> ArrayResult<Vec<i32>>;

    /// Check that `left * right` is well defined.
    fn validate_for_matrix_multiplication(
        &self,
        left: Option<&RowMatrix>,
        right: Option<&RowMatrix>,
    ) -> ArrayResult<()> {
        utils::validate_for_matrix_multiplication(left, right)
    }

    /// Multiply `left * right`. Arithmetic wraps on `i32` overflow.
    fn matrix_multiplication(
        &self,
        left: Option<&RowMatrix>,
        right: Option<&RowMatrix>,
    ) -> ArrayResult<Array2<i32>>;

    /// Drop repeated values, keeping the first occurrence of each.
    fn distinct(&self, input: &[i32]) -> Vec<i32>;

    /// Optional human readable name for the processor
    fn name(&self) -> &str {
        "array-processor"
    }
}
