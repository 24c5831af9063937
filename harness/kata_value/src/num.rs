//! Tagged numeric values with promote-then-operate semantics.

use std::cmp::Ordering;
use std::fmt;

use crate::NumKind;

/// A numeric value tagged by kind.
///
/// Binary operations use direct enum-based dispatch over the operand pair:
/// the pair is widened to its most general kind and the operation runs in
/// that representation. The type set is fixed, so pattern matching is
/// preferred over trait objects for exhaustiveness checking.
#[derive(Clone, Copy, Debug)]
pub enum Num {
    /// 64-bit signed integer value.
    Long(i64),
    /// Single-precision float value.
    Float(f32),
    /// Double-precision float value.
    Double(f64),
}

/// An operand pair after promotion to its common kind.
///
/// Every arithmetic and comparison operation goes through this, so the
/// widening rule lives in exactly one place.
enum Widened {
    Long(i64, i64),
    Float(f32, f32),
    Double(f64, f64),
}

#[expect(
    clippy::cast_precision_loss,
    reason = "long-to-float widening is the source representation's implicit conversion; precision loss for large magnitudes is part of the modeled semantics"
)]
fn widen_pair(a: Num, b: Num) -> Widened {
    match (a, b) {
        (Num::Long(x), Num::Long(y)) => Widened::Long(x, y),
        (Num::Long(x), Num::Float(y)) => Widened::Float(x as f32, y),
        (Num::Float(x), Num::Long(y)) => Widened::Float(x, y as f32),
        (Num::Float(x), Num::Float(y)) => Widened::Float(x, y),
        (Num::Long(x), Num::Double(y)) => Widened::Double(x as f64, y),
        (Num::Double(x), Num::Long(y)) => Widened::Double(x, y as f64),
        (Num::Float(x), Num::Double(y)) => Widened::Double(f64::from(x), y),
        (Num::Double(x), Num::Float(y)) => Widened::Double(x, f64::from(y)),
        (Num::Double(x), Num::Double(y)) => Widened::Double(x, y),
    }
}

impl Num {
    /// Kind tag of this value.
    pub fn kind(self) -> NumKind {
        match self {
            Self::Long(_) => NumKind::Long,
            Self::Float(_) => NumKind::Float,
            Self::Double(_) => NumKind::Double,
        }
    }

    /// Widen toward `target`, never narrowing: the result's kind is the
    /// most general of the current kind and `target`.
    ///
    /// Long-to-float and long-to-double follow the source
    /// representation's implicit conversion; float-to-double is exact.
    #[expect(
        clippy::cast_precision_loss,
        reason = "long-to-float and long-to-double widening follow the source representation's implicit conversion"
    )]
    pub fn widen_to(self, target: NumKind) -> Self {
        match self.kind().most_general(target) {
            NumKind::Long => self,
            NumKind::Float => match self {
                Self::Long(v) => Self::Float(v as f32),
                other => other,
            },
            NumKind::Double => match self {
                Self::Long(v) => Self::Double(v as f64),
                Self::Float(v) => Self::Double(f64::from(v)),
                Self::Double(v) => Self::Double(v),
            },
        }
    }

    /// Sum of the promoted pair. Long addition wraps.
    ///
    /// The result carries the most general kind of the two operands:
    /// `long + float` computes in single precision, anything involving a
    /// double computes in double precision.
    pub fn add(self, rhs: Self) -> Self {
        match widen_pair(self, rhs) {
            Widened::Long(a, b) => Self::Long(a.wrapping_add(b)),
            Widened::Float(a, b) => Self::Float(a + b),
            Widened::Double(a, b) => Self::Double(a + b),
        }
    }

    /// Difference of the promoted pair. Long subtraction wraps.
    pub fn sub(self, rhs: Self) -> Self {
        match widen_pair(self, rhs) {
            Widened::Long(a, b) => Self::Long(a.wrapping_sub(b)),
            Widened::Float(a, b) => Self::Float(a - b),
            Widened::Double(a, b) => Self::Double(a - b),
        }
    }

    /// Value equality: equality after widening, ignoring the kind tags.
    ///
    /// Float comparison goes through `partial_cmp` for IEEE 754 compliant
    /// results (NaN != NaN, -0.0 == 0.0).
    pub fn value_eq(self, rhs: Self) -> bool {
        match widen_pair(self, rhs) {
            Widened::Long(a, b) => a == b,
            Widened::Float(a, b) => a.partial_cmp(&b) == Some(Ordering::Equal),
            Widened::Double(a, b) => a.partial_cmp(&b) == Some(Ordering::Equal),
        }
    }

    /// Three-way comparison over the promoted pair.
    ///
    /// Uses the total order (`total_cmp`) so the result matches a boxed
    /// `compare_to`: NaN sorts greatest and -0.0 sorts below +0.0. For the
    /// finite values the demos use this agrees with the partial order.
    pub fn compare(self, rhs: Self) -> Ordering {
        match widen_pair(self, rhs) {
            Widened::Long(a, b) => a.cmp(&b),
            Widened::Float(a, b) => a.total_cmp(&b),
            Widened::Double(a, b) => a.total_cmp(&b),
        }
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
        }
    }
}
