//! The two dispatch tables: type-level and instance resolution.

use rustc_hash::FxHashMap;

use crate::capability::{CapabilityRef, TypeTag};
use crate::errors::{DispatchError, DispatchResult};
use crate::overload::{OpFn, OverloadSet};
use crate::signature::Signature;

/// A registered type-level operation.
#[derive(Clone)]
struct StaticOp {
    signature: Signature,
    body: OpFn,
}

/// Registry holding both resolution tables.
///
/// Type-level operations are keyed by `(declared type, name)` and resolved
/// by walking the qualified type's chain; the runtime value plays no part,
/// so a redeclaration on a derived type hides the base one without
/// overriding it. Instance operations are keyed by runtime variant tag;
/// the declared type of the reference filters visibility, the bound
/// variant selects the implementation.
#[derive(Clone, Default)]
pub struct DispatchRegistry {
    statics: FxHashMap<(TypeTag, &'static str), StaticOp>,
    instances: FxHashMap<TypeTag, FxHashMap<&'static str, OverloadSet>>,
}

// Demo operation bodies. The registry guarantees the slice length matches
// the registered signature's arity before a body runs.

fn calc_add(args: &[i64]) -> i64 {
    args[0] + args[1]
}

fn calc_cmp(args: &[i64]) -> i64 {
    match args[0].cmp(&args[1]) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

fn calc_is_equal(args: &[i64]) -> i64 {
    i64::from(args[0] == args[1])
}

fn negator_add(args: &[i64]) -> i64 {
    -args[0] - 2 * args[1]
}

fn negator_add3(args: &[i64]) -> i64 {
    -args[0] - 2 * args[1] - 3 * args[2]
}

impl DispatchRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry for the built-in demo types.
    ///
    /// `Calculator` declares static `add`, `cmp`, and `is_equal`, plus an
    /// instance `add(long, long)`. `Negator` redeclares static `add`
    /// (hiding), overrides instance `add(long, long)`, and adds a
    /// derived-only instance `add(long, long, long)`.
    pub fn builtin() -> DispatchResult<Self> {
        let mut registry = Self::new();

        registry.register_static(TypeTag::Calculator, Signature::longs("add", 2), calc_add)?;
        registry.register_static(TypeTag::Calculator, Signature::longs("cmp", 2), calc_cmp)?;
        registry.register_static(
            TypeTag::Calculator,
            Signature::longs("is_equal", 2),
            calc_is_equal,
        )?;
        registry.register_instance(TypeTag::Calculator, Signature::longs("add", 2), calc_add)?;

        registry.register_static(TypeTag::Negator, Signature::longs("add", 2), negator_add)?;
        registry.register_instance(TypeTag::Negator, Signature::longs("add", 2), negator_add)?;
        registry.register_instance(TypeTag::Negator, Signature::longs("add", 3), negator_add3)?;

        Ok(registry)
    }

    /// Register a type-level operation on `tag`.
    ///
    /// A second registration with the same name on the same type is the
    /// static configuration error.
    pub fn register_static(
        &mut self,
        tag: TypeTag,
        signature: Signature,
        body: OpFn,
    ) -> DispatchResult<()> {
        let key = (tag, signature.name());
        if self.statics.contains_key(&key) {
            return Err(DispatchError::DuplicateSignature {
                type_name: tag.type_name(),
                signature: signature.to_string(),
            });
        }
        self.statics.insert(key, StaticOp { signature, body });
        Ok(())
    }

    /// Register an instance operation on `tag`, growing its overload set.
    pub fn register_instance(
        &mut self,
        tag: TypeTag,
        signature: Signature,
        body: OpFn,
    ) -> DispatchResult<()> {
        self.instances
            .entry(tag)
            .or_default()
            .entry(signature.name())
            .or_insert_with(|| OverloadSet::new(tag.type_name()))
            .register(signature, body)
    }

    /// Call a type-level operation through a qualified path.
    ///
    /// Resolution is by the qualified type alone, walking up the chain
    /// when the type does not redeclare the operation. The bound runtime
    /// value of any reference is irrelevant here.
    pub fn call_static(
        &self,
        qualified: TypeTag,
        name: &'static str,
        args: &[i64],
    ) -> DispatchResult<i64> {
        for tag in qualified.chain() {
            if let Some(op) = self.statics.get(&(tag, name)) {
                if op.signature.arity() != args.len() {
                    return Err(DispatchError::NoVisibleOverload {
                        declared: qualified.type_name(),
                        name,
                        arity: args.len(),
                    });
                }
                tracing::debug!(%tag, name, "static dispatch");
                return Ok((op.body)(args));
            }
        }
        Err(DispatchError::UnknownOperation {
            type_name: qualified.type_name(),
            name,
        })
    }

    /// Call an instance operation through a capability reference.
    ///
    /// The declared type decides visibility: an arity with no matching
    /// signature on the declared chain is invisible even when the bound
    /// variant declares it. The bound variant then decides the body, most
    /// specific type first.
    pub fn call_instance(
        &self,
        reference: CapabilityRef,
        name: &'static str,
        args: &[i64],
    ) -> DispatchResult<i64> {
        let arity = args.len();
        self.check_visibility(reference.declared(), name, arity)?;

        for tag in reference.bound().chain() {
            let resolved = self
                .instances
                .get(&tag)
                .and_then(|ops| ops.get(name))
                .and_then(|set| set.resolve(arity));
            if let Some(overload) = resolved {
                tracing::debug!(
                    declared = %reference.declared(),
                    bound = %tag,
                    signature = %overload.signature(),
                    "instance dispatch"
                );
                return Ok(overload.invoke(args));
            }
        }

        // Visible through the declared chain but absent from the bound
        // chain cannot happen: binding requires the bound variant to widen
        // to the declared type, so the declared chain is a suffix of the
        // bound chain.
        Err(DispatchError::NoVisibleOverload {
            declared: reference.declared().type_name(),
            name,
            arity,
        })
    }

    fn check_visibility(
        &self,
        declared: TypeTag,
        name: &'static str,
        arity: usize,
    ) -> DispatchResult<()> {
        let mut name_known = false;
        for tag in declared.chain() {
            if let Some(set) = self.instances.get(&tag).and_then(|ops| ops.get(name)) {
                name_known = true;
                if set.has_arity(arity) {
                    return Ok(());
                }
            }
        }
        if name_known {
            Err(DispatchError::NoVisibleOverload {
                declared: declared.type_name(),
                name,
                arity,
            })
        } else {
            Err(DispatchError::UnknownOperation {
                type_name: declared.type_name(),
                name,
            })
        }
    }
}
