//! Boxed numeric values with kind-strict equality.

use std::cmp::Ordering;
use std::fmt;

use crate::Num;
use crate::NumKind;

/// A boxed numeric value.
///
/// Boxing freezes the kind tag alongside the bits, which splits comparison
/// into three distinct modes:
/// - [`BoxedNum::value_eq`]: equality after widening, ignoring kinds
/// - [`BoxedNum::boxed_eq`]: kind tag AND bit pattern must both match
/// - [`BoxedNum::compare_to`]: three-way ordering over the widened pair
///
/// A double box therefore never boxed-equals a float box, even when the
/// two are value-equal after conversion.
#[derive(Clone, Copy, Debug)]
pub struct BoxedNum {
    value: Num,
}

impl BoxedNum {
    /// Box a numeric value, freezing its kind.
    pub fn new(value: Num) -> Self {
        Self { value }
    }

    /// The stored kind tag.
    pub fn kind(self) -> NumKind {
        self.value.kind()
    }

    /// The unboxed value.
    pub fn num(self) -> Num {
        self.value
    }

    /// Value equality against an unboxed operand (widening, kind-blind).
    pub fn value_eq(self, rhs: Num) -> bool {
        self.value.value_eq(rhs)
    }

    /// Kind-strict equality: both the kind tags and the bit patterns must
    /// match. Numeric closeness is irrelevant.
    pub fn boxed_eq(self, rhs: Self) -> bool {
        match (self.value, rhs.value) {
            (Num::Long(a), Num::Long(b)) => a == b,
            (Num::Float(a), Num::Float(b)) => a.to_bits() == b.to_bits(),
            (Num::Double(a), Num::Double(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }

    /// Three-way comparison against an unboxed operand.
    pub fn compare_to(self, rhs: Num) -> Ordering {
        self.value.compare(rhs)
    }

    /// Add with widening; the stored kind becomes the most general of the
    /// stored and argument kinds.
    pub fn add_assign(&mut self, rhs: Num) {
        self.value = self.value.add(rhs);
    }

    /// Subtract with widening, as [`BoxedNum::add_assign`].
    pub fn sub_assign(&mut self, rhs: Num) {
        self.value = self.value.sub(rhs);
    }
}

impl fmt::Display for BoxedNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn boxed_eq_is_kind_strict() {
        let double_box = BoxedNum::new(Num::Double(30.0));
        let float_box = BoxedNum::new(Num::Float(30.0));
        assert!(double_box.value_eq(Num::Float(30.0)));
        assert!(!double_box.boxed_eq(float_box));
    }

    #[test]
    fn boxed_eq_same_kind_same_bits() {
        let a = BoxedNum::new(Num::Double(30.1));
        let b = BoxedNum::new(Num::Double(30.1));
        assert!(a.boxed_eq(b));
    }

    #[test]
    fn boxed_eq_distinguishes_zero_signs() {
        // Bit-pattern equality: -0.0 and +0.0 are value-equal but not
        // boxed-equal.
        let neg = BoxedNum::new(Num::Double(-0.0));
        let pos = BoxedNum::new(Num::Double(0.0));
        assert!(neg.value_eq(Num::Double(0.0)));
        assert!(!neg.boxed_eq(pos));
    }

    #[test]
    fn add_assign_widens_stored_kind() {
        let mut boxed = BoxedNum::new(Num::Float(1.0));
        boxed.add_assign(Num::Double(2.0));
        assert_eq!(boxed.kind(), NumKind::Double);
    }

    #[test]
    fn compare_to_is_widened_three_way() {
        let boxed = BoxedNum::new(Num::Double(2.5));
        assert_eq!(boxed.compare_to(Num::Long(2)), Ordering::Greater);
        assert_eq!(boxed.compare_to(Num::Float(2.5)), Ordering::Equal);
        assert_eq!(boxed.compare_to(Num::Double(3.0)), Ordering::Less);
    }
}
