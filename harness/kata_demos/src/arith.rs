//! Recursive arithmetic: factorial and pairwise max.
//!
//! Known boundary: factorial overflows `i64` past n = 20. The
//! multiplications wrap rather than guard; large-n inputs are not a
//! supported case, only a defined one.

/// Factorial by direct recursion. `n <= 1` returns 1.
pub fn factorial(n: i64) -> i64 {
    if n <= 1 {
        1
    } else {
        n.wrapping_mul(factorial(n - 1))
    }
}

/// Factorial by accumulator passing; tail position carries the product.
///
/// Agrees with [`factorial`] for every n when seeded with `acc = 1`.
pub fn factorial_acc(n: i64, acc: i64) -> i64 {
    if n < 1 {
        acc
    } else {
        factorial_acc(n - 1, acc.wrapping_mul(n))
    }
}

/// Larger of two values; ties return either operand (they are equal).
pub fn max2(a: i64, b: i64) -> i64 {
    if a > b {
        a
    } else {
        b
    }
}

/// Largest of three values by pairwise reduction.
///
/// The reduction order does not affect the result: max over a total
/// order is associative and commutative.
pub fn max3(a: i64, b: i64, c: i64) -> i64 {
    max2(max2(a, b), c)
}
