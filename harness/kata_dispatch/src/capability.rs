//! Capability types and references.

use std::fmt;

use crate::errors::{DispatchError, DispatchResult};

/// Tag for the closed set of capability types.
///
/// `Negator` derives from `Calculator`: its instance `add` negates and
/// weights its operands instead of summing them. The set is fixed, so
/// subtype walks are plain pattern matches rather than trait objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Base capability: plain integer arithmetic.
    Calculator,
    /// Derived capability: negating, weighted arithmetic.
    Negator,
}

impl TypeTag {
    /// Immediate supertype, if any.
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::Calculator => None,
            Self::Negator => Some(Self::Calculator),
        }
    }

    /// Whether a value of this type can bind to a reference declared as
    /// `target`.
    pub fn widens_to(self, target: Self) -> bool {
        self.chain().any(|t| t == target)
    }

    /// This type followed by its supertypes, most specific first.
    pub fn chain(self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(self), |t| t.parent())
    }

    /// Human-readable type name.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::Negator => "Negator",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A reference typed by a declared capability but bound at construction to
/// one concrete runtime variant.
///
/// Created once and never reassigned; used only for read-only dispatch.
/// The declared tag governs which signatures are visible, the bound tag
/// governs which implementation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapabilityRef {
    declared: TypeTag,
    bound: TypeTag,
}

impl CapabilityRef {
    /// Bind a runtime variant to a declared reference type.
    ///
    /// Fails with [`DispatchError::InvalidBinding`] when the variant does
    /// not widen to the declared type.
    pub fn bind(declared: TypeTag, bound: TypeTag) -> DispatchResult<Self> {
        if bound.widens_to(declared) {
            Ok(Self { declared, bound })
        } else {
            Err(DispatchError::InvalidBinding {
                declared: declared.type_name(),
                bound: bound.type_name(),
            })
        }
    }

    /// The declared (compile-time) type of the reference.
    pub fn declared(self) -> TypeTag {
        self.declared
    }

    /// The runtime variant the reference is bound to.
    pub fn bound(self) -> TypeTag {
        self.bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn derived_widens_to_base() {
        assert!(TypeTag::Negator.widens_to(TypeTag::Calculator));
        assert!(TypeTag::Negator.widens_to(TypeTag::Negator));
        assert!(!TypeTag::Calculator.widens_to(TypeTag::Negator));
    }

    #[test]
    fn chain_is_most_specific_first() {
        let chain: Vec<_> = TypeTag::Negator.chain().collect();
        assert_eq!(chain, vec![TypeTag::Negator, TypeTag::Calculator]);
    }

    #[test]
    fn bind_accepts_widening() {
        let r = CapabilityRef::bind(TypeTag::Calculator, TypeTag::Negator);
        assert!(r.is_ok());
    }

    #[test]
    fn bind_rejects_narrowing() {
        let err = CapabilityRef::bind(TypeTag::Negator, TypeTag::Calculator);
        assert_eq!(
            err,
            Err(DispatchError::InvalidBinding {
                declared: "Negator",
                bound: "Calculator",
            })
        );
    }
}
