//! Kata Value - numeric kinds, widening promotion, and boxed comparison.
//!
//! This crate models mixed-kind numeric expressions the way a widening
//! type system evaluates them:
//! - `NumKind`: the closed set of numeric kinds with a widening lattice
//! - `Num`: a tagged numeric value; binary operations promote both
//!   operands to their most general kind before computing
//! - `BoxedNum`: a boxed value whose equality is kind-strict (kind tag
//!   plus bit pattern), separate from widening value equality
//!
//! The three comparison modes deliberately diverge: a computed double
//! can value-equal a long literal, fail value-equality against a float
//! literal that displays the same digits, and never boxed-equal a float
//! box regardless of value.

mod boxed;
mod kind;
mod num;

pub use boxed::BoxedNum;
pub use kind::NumKind;
pub use num::Num;
