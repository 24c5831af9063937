//! Overload sets: same-named operations keyed by arity.

use rustc_hash::FxHashMap;

use crate::errors::{DispatchError, DispatchResult};
use crate::signature::Signature;

/// Body of a demo operation.
///
/// Invariant: the registry only invokes a body with exactly the arity its
/// registered signature declares.
pub type OpFn = fn(&[i64]) -> i64;

/// One registered alternative of an overload set.
#[derive(Clone)]
pub struct Overload {
    signature: Signature,
    body: OpFn,
}

impl Overload {
    /// The alternative's declared signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Run the body.
    pub fn invoke(&self, args: &[i64]) -> i64 {
        (self.body)(args)
    }
}

/// Same-named operations disambiguated by parameter count.
///
/// Declaring two operations with the same name differing only in arity is
/// legal; declaring two with the same arity is rejected at registration,
/// which is this library's stand-in for a compile-time ambiguity error.
/// Resolution is an exact arity match with no runtime fallback.
#[derive(Clone)]
pub struct OverloadSet {
    owner: &'static str,
    alternatives: FxHashMap<usize, Overload>,
}

impl OverloadSet {
    /// Empty set owned by the named type.
    pub fn new(owner: &'static str) -> Self {
        Self {
            owner,
            alternatives: FxHashMap::default(),
        }
    }

    /// Register an alternative.
    pub fn register(&mut self, signature: Signature, body: OpFn) -> DispatchResult<()> {
        let arity = signature.arity();
        if self.alternatives.contains_key(&arity) {
            return Err(DispatchError::DuplicateSignature {
                type_name: self.owner,
                signature: signature.to_string(),
            });
        }
        self.alternatives.insert(arity, Overload { signature, body });
        Ok(())
    }

    /// Exact-arity lookup.
    pub fn resolve(&self, arity: usize) -> Option<&Overload> {
        self.alternatives.get(&arity)
    }

    /// Whether an alternative with this arity exists.
    pub fn has_arity(&self, arity: usize) -> bool {
        self.alternatives.contains_key(&arity)
    }
}
