//! Operation signatures.

use std::fmt;

use kata_value::NumKind;
use smallvec::SmallVec;

/// An operation signature: name plus ordered parameter kinds.
///
/// Call sites select among same-named operations by exact arity and kind
/// match; the signature is the key the selection happens on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    name: &'static str,
    params: SmallVec<[NumKind; 3]>,
}

impl Signature {
    /// Build a signature from explicit parameter kinds.
    pub fn new(name: &'static str, params: impl IntoIterator<Item = NumKind>) -> Self {
        Self {
            name,
            params: params.into_iter().collect(),
        }
    }

    /// Shorthand for the demo operations, which all take long parameters.
    pub fn longs(name: &'static str, arity: usize) -> Self {
        Self::new(name, std::iter::repeat_n(NumKind::Long, arity))
    }

    /// Operation name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Parameter count.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Ordered parameter kinds.
    pub fn params(&self) -> &[NumKind] {
        &self.params
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, kind) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{kind}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_renders_name_and_kinds() {
        let sig = Signature::longs("add", 2);
        assert_eq!(sig.to_string(), "add(long, long)");
        assert_eq!(sig.arity(), 2);
    }

    #[test]
    fn signatures_differ_by_arity() {
        assert_ne!(Signature::longs("add", 2), Signature::longs("add", 3));
        assert_eq!(Signature::longs("add", 2), Signature::longs("add", 2));
    }

    #[test]
    fn mixed_kind_signature() {
        let sig = Signature::new("scale", [NumKind::Long, NumKind::Double]);
        assert_eq!(sig.to_string(), "scale(long, double)");
        assert_eq!(sig.params(), [NumKind::Long, NumKind::Double]);
    }
}
