//! Numeric kind tags and the widening lattice.

use std::fmt;

/// Kind tag for a numeric value.
///
/// The derived `Ord` encodes the widening lattice: `Long < Float < Double`.
/// Promotion always moves toward the most general kind among the operands;
/// double wins over float wins over long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumKind {
    /// 64-bit signed integer.
    Long,
    /// Single-precision (32-bit) float.
    Float,
    /// Double-precision (64-bit) float.
    Double,
}

impl NumKind {
    /// The wider of two kinds; the kind a binary operation computes in.
    #[inline]
    pub fn most_general(self, other: Self) -> Self {
        self.max(other)
    }

    /// Human-readable kind name.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for NumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lattice_widens_toward_double() {
        assert_eq!(
            NumKind::most_general(NumKind::Long, NumKind::Float),
            NumKind::Float
        );
        assert_eq!(
            NumKind::most_general(NumKind::Float, NumKind::Double),
            NumKind::Double
        );
        assert_eq!(
            NumKind::most_general(NumKind::Long, NumKind::Double),
            NumKind::Double
        );
    }

    #[test]
    fn most_general_is_commutative() {
        let kinds = [NumKind::Long, NumKind::Float, NumKind::Double];
        for a in kinds {
            for b in kinds {
                assert_eq!(a.most_general(b), b.most_general(a));
            }
        }
    }

    #[test]
    fn most_general_is_idempotent() {
        for k in [NumKind::Long, NumKind::Float, NumKind::Double] {
            assert_eq!(k.most_general(k), k);
        }
    }

    #[test]
    fn type_names() {
        assert_eq!(NumKind::Long.type_name(), "long");
        assert_eq!(NumKind::Float.type_name(), "float");
        assert_eq!(NumKind::Double.type_name(), "double");
    }
}
