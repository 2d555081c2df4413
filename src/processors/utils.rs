//! Argument checks shared by every processor, so that all implementations
//! report the same error for the same input.

use crate::config::ProcessorConfig;
use crate::error::{ArrayError, ArrayResult};
use crate::math::RowMatrix;

/// Resolve `[start_inclusive, end_exclusive)` against a sequence of `len`
/// elements.
pub fn check_copy_bounds(
    len: usize,
    start_inclusive: isize,
    end_exclusive: isize,
) -> ArrayResult<(usize, usize)> {
    if start_inclusive > end_exclusive
        || start_inclusive < 0
        || end_exclusive as usize > len
    {
        return Err(ArrayError::invalid(format!(
            "Index out of bounds: [{}, {}) for length {}",
            start_inclusive, end_exclusive, len
        )));
    }
    Ok((start_inclusive as usize, end_exclusive as usize))
}

/// Resolve an insertion index. Only positions strictly inside the sequence
/// are accepted.
pub fn check_insert_index(len: usize, start_inclusive: isize) -> ArrayResult<usize> {
    if start_inclusive < 0 || start_inclusive as usize >= len {
        return Err(ArrayError::invalid(format!(
            "Index: {} for length {}",
            start_inclusive, len
        )));
    }
    Ok(start_inclusive as usize)
}

pub fn check_config(config: &ProcessorConfig) -> ArrayResult<()> {
    if config.divisor == 0 {
        return Err(ArrayError::invalid("divisor must be non-zero"));
    }
    if config.filter_window < 0 {
        return Err(ArrayError::invalid(format!(
            "filter_window must be non-negative, got {}",
            config.filter_window
        )));
    }
    Ok(())
}

/// Double even-indexed values and negate odd-indexed ones, in place.
pub fn replace_in_place(input: &mut [i32]) {
    for i in 0..input.len() {
        if i % 2 == 0 {
            input[i] = input[i].wrapping_mul(2);
        } else {
            input[i] = input[i].wrapping_neg();
        }
    }
}

/// Append `value` to a merge output, failing if it is smaller than the
/// element placed before it.
pub fn push_ascending(output: &mut Vec<i32>, value: i32) -> ArrayResult<()> {
    if let Some(&prev) = output.last() {
        if value < prev {
            log::debug!("merge found descending pair at output index {}", output.len());
            return Err(ArrayError::invalid("inputs are not sorted"));
        }
    }
    output.push(value);
    Ok(())
}

pub fn validate_for_matrix_multiplication(
    left: Option<&RowMatrix>,
    right: Option<&RowMatrix>,
) -> ArrayResult<()> {
    let (left, right) = match (left, right) {
        (Some(l), Some(r)) => (l, r),
        (None, _) => return Err(ArrayError::null("left matrix is absent")),
        (_, None) => return Err(ArrayError::null("right matrix is absent")),
    };

    if left.is_empty() || right.is_empty() {
        return Err(ArrayError::invalid(format!(
            "matrices must have at least one row ({}, {})",
            left.row_count(),
            right.row_count()
        )));
    }

    if let Some(row) = left.first_missing_row() {
        return Err(ArrayError::null(format!("left matrix row {} is absent", row)));
    }
    if let Some(row) = right.first_missing_row() {
        return Err(ArrayError::null(format!("right matrix row {} is absent", row)));
    }

    for row in left.rows().flatten() {
        if row.len() != right.row_count() {
            return Err(ArrayError::invalid(format!(
                "Left matrix row != right matrix column ({},{})",
                row.len(),
                right.row_count()
            )));
        }
    }
    Ok(())
}

/// Validated operands of a multiplication, with every row present.
#[derive(Debug)]
pub struct Operands<'a> {
    pub left: Vec<&'a [i32]>,
    pub right: Vec<&'a [i32]>,
    /// Column count of the product, taken from the first right row.
    pub cols: usize,
}

impl Operands<'_> {
    pub fn rows(&self) -> usize {
        self.left.len()
    }

    pub fn inner(&self) -> usize {
        self.right.len()
    }
}

/// Run the validator, then collect rows and fix the output shape.
///
/// Right rows whose length differs from the first right row are rejected
/// here, since the validator only checks the inner dimension.
pub fn prepare_multiplication<'a>(
    left: Option<&'a RowMatrix>,
    right: Option<&'a RowMatrix>,
) -> ArrayResult<Operands<'a>> {
    validate_for_matrix_multiplication(left, right)?;
    let left = dense_rows(left, "left")?;
    let right = dense_rows(right, "right")?;

    let cols = right.first().map_or(0, |r| r.len());
    if let Some((idx, row)) = right.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(ArrayError::invalid(format!(
            "right matrix row {} has {} columns, expected {}",
            idx,
            row.len(),
            cols
        )));
    }

    log::trace!(
        "multiplying ({}x{}) by ({}x{})",
        left.len(),
        right.len(),
        right.len(),
        cols
    );

    Ok(Operands { left, right, cols })
}

fn dense_rows<'a>(matrix: Option<&'a RowMatrix>, side: &str) -> ArrayResult<Vec<&'a [i32]>> {
    matrix
        .and_then(|m| m.rows().collect::<Option<Vec<_>>>())
        .ok_or_else(|| ArrayError::null(format!("{} matrix has absent rows", side)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_bounds() {
        assert_eq!(check_copy_bounds(4, 0, 4), Ok((0, 4)));
        assert_eq!(check_copy_bounds(4, 2, 2), Ok((2, 2)));
        assert!(check_copy_bounds(4, 3, 2).unwrap_err().is_invalid_argument());
        assert!(check_copy_bounds(4, -1, 3).unwrap_err().is_invalid_argument());
        assert!(check_copy_bounds(4, 0, 5).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_insert_index() {
        assert_eq!(check_insert_index(3, 0), Ok(0));
        assert_eq!(check_insert_index(3, 2), Ok(2));
        assert!(check_insert_index(3, 3).is_err());
        assert!(check_insert_index(3, -1).is_err());
        assert!(check_insert_index(0, 0).is_err());
    }

    #[test]
    fn test_replace_in_place_mutates_caller_storage() {
        let mut values = vec![1, 2, 3, 4];
        replace_in_place(&mut values);
        assert_eq!(values, vec![2, -2, 6, -4]);
    }

    #[test]
    fn test_replace_in_place_wraps() {
        let mut values = vec![i32::MAX, i32::MIN];
        replace_in_place(&mut values);
        assert_eq!(values, vec![-2, i32::MIN]);
    }

    #[test]
    fn test_push_ascending() {
        let mut output = vec![1, 3];
        assert!(push_ascending(&mut output, 3).is_ok());
        assert_eq!(
            push_ascending(&mut output, 2).unwrap_err(),
            ArrayError::invalid("inputs are not sorted")
        );
        assert_eq!(output, vec![1, 3, 3]);

        let mut empty = Vec::new();
        assert!(push_ascending(&mut empty, i32::MIN).is_ok());
    }

    #[test]
    fn test_check_config() {
        assert!(check_config(&ProcessorConfig::default()).is_ok());
        let zero = ProcessorConfig {
            divisor: 0,
            ..ProcessorConfig::default()
        };
        assert!(check_config(&zero).unwrap_err().is_invalid_argument());
        let negative = ProcessorConfig {
            filter_window: -1,
            ..ProcessorConfig::default()
        };
        assert!(check_config(&negative).is_err());
    }

    #[test]
    fn test_validation_order() {
        let empty = RowMatrix::default();
        let holey = RowMatrix::with_rows(vec![None]);
        let ok = RowMatrix::from(vec![vec![1]]);

        assert!(validate_for_matrix_multiplication(None, Some(&empty))
            .unwrap_err()
            .is_null_reference());
        assert!(validate_for_matrix_multiplication(Some(&empty), Some(&holey))
            .unwrap_err()
            .is_invalid_argument());
        assert!(validate_for_matrix_multiplication(Some(&ok), Some(&holey))
            .unwrap_err()
            .is_null_reference());
        assert!(validate_for_matrix_multiplication(Some(&ok), Some(&ok)).is_ok());
    }

    #[test]
    fn test_prepare_rejects_jagged_right_matrix() {
        let left = RowMatrix::from(vec![vec![1, 2]]);
        let right = RowMatrix::from(vec![vec![1, 2], vec![3]]);
        let err = prepare_multiplication(Some(&left), Some(&right)).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
