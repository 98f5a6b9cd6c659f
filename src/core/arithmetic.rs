use crate::utils::error::{DemoError, Result};
use std::iter::Sum;

/// Sum of all values; zero for an empty slice. Overflow behaves like `+` on `T`.
pub fn calculate_sum<T>(numbers: &[T]) -> T
where
    T: Sum<T> + Copy,
{
    numbers.iter().copied().sum()
}

/// Overflow-checked variant of [`calculate_sum`].
pub fn try_calculate_sum(numbers: &[i64]) -> Result<i64> {
    numbers
        .iter()
        .try_fold(0i64, |acc, &n| acc.checked_add(n))
        .ok_or_else(|| DemoError::Overflow {
            operation: "sum of numbers".to_string(),
        })
}

/// `x * x` for every `x` in `0..count`.
pub fn squares(count: u32) -> Vec<u64> {
    (0..u64::from(count)).map(|x| x * x).collect()
}
