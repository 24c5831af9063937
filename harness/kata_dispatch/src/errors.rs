//! Dispatch resolution errors.

use thiserror::Error;

/// Result alias for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Error produced while building or querying the dispatch tables.
///
/// `DuplicateSignature` and `InvalidBinding` surface at construction time;
/// the other variants are resolution failures at a call site.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No operation with this name anywhere on the type's chain.
    #[error("no operation named `{name}` on type `{type_name}`")]
    UnknownOperation {
        /// Type the lookup started from.
        type_name: &'static str,
        /// Requested operation name.
        name: &'static str,
    },

    /// The name exists, but no overload with this arity is visible
    /// through the given declared type.
    #[error("no {arity}-argument overload of `{name}` is visible through `{declared}`")]
    NoVisibleOverload {
        /// Declared type of the reference or qualified path.
        declared: &'static str,
        /// Requested operation name.
        name: &'static str,
        /// Argument count at the call site.
        arity: usize,
    },

    /// Two operations with the same name and arity were registered on one
    /// type. The static configuration error of overload resolution.
    #[error("duplicate signature `{signature}` registered on `{type_name}`")]
    DuplicateSignature {
        /// Type the colliding registration targeted.
        type_name: &'static str,
        /// Rendered signature of the rejected registration.
        signature: String,
    },

    /// The runtime variant does not widen to the declared reference type.
    #[error("a `{bound}` value cannot bind to a reference declared as `{declared}`")]
    InvalidBinding {
        /// Declared reference type.
        declared: &'static str,
        /// Offending runtime variant.
        bound: &'static str,
    },
}
