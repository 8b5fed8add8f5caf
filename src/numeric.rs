//! Small numeric helpers: a generic maximum, macro-generated arithmetic and
//! score grading.

/// Largest element of `slice`, or `None` when it is empty.
pub fn find_max<T: PartialOrd + Copy>(slice: &[T]) -> Option<T> {
    slice.iter().copied().fold(None, |max, x| match max {
        Some(m) if m >= x => Some(m),
        _ => Some(x),
    })
}

/// Sum of `a` and `b`, or zero when `a` is not positive.
pub fn calculate_sum(a: i32, b: i32) -> i32 {
    if a > 0 {
        return a + b;
    }
    0
}

macro_rules! binary_op {
    ($name:ident, $op:tt) => {
        pub fn $name(a: i32, b: i32) -> i32 {
            a $op b
        }
    };
}

binary_op!(multiply, *);
binary_op!(subtract, -);

/// Letter grade for a score out of 100.
pub fn grade(score: u32) -> &'static str {
    match score {
        90..=100 => "A",
        80..=89 => "B",
        70..=79 => "C",
        _ => "F",
    }
}
