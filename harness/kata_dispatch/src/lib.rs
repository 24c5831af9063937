//! Kata Dispatch - overload and override resolution for the demo types.
//!
//! Resolution is split across two separate tables, and keeping them
//! separate is the whole point:
//! - *type-level* (static) operations live in a table keyed by the
//!   declared type tag; calling through a qualified path resolves by that
//!   type alone, so a redeclaration on a derived type hides the base
//!   operation but never overrides it
//! - *instance* operations live in per-type [`OverloadSet`]s keyed by the
//!   runtime variant tag; the declared type of a [`CapabilityRef`] decides
//!   which signatures are visible, the bound variant decides which body
//!   runs
//!
//! Same-named operations differing by parameter count form an overload
//! set; registering two signatures with the same arity is a configuration
//! error rejected when the registry is built, never a runtime fallback.

mod capability;
mod errors;
mod overload;
mod registry;
mod signature;

pub use capability::{CapabilityRef, TypeTag};
pub use errors::{DispatchError, DispatchResult};
pub use overload::{OpFn, Overload, OverloadSet};
pub use registry::DispatchRegistry;
pub use signature::Signature;
