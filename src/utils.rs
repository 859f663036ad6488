use std::ops::{Add, Div, Mul, Range, Sub};

/// Wraps a possibly-negative index onto `[0, len)` with a true mathematical
/// modulo, so `-1` aliases `len - 1` and `len` aliases `0`.
pub fn wrap_index(i: isize, len: usize) -> usize {
    i.rem_euclid(len as isize) as usize
}

pub fn map_t_of_range_a_to_range_b<T>(t: T, range_a: Range<T>, range_b: Range<T>) -> T
where
    T: Copy + Sub<Output = T> + Div<Output = T> + Add<Output = T> + Mul<Output = T>,
{
    let slope = (range_b.end - range_b.start) / (range_a.end - range_a.start);
    range_b.start + slope * (t - range_a.start)
}
