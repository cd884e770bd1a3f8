//! Logical combinators over rules
//!
//! Each combinator is a small generic struct wrapping its operands, so a
//! composed rule is itself a rule and composes further. Construction never
//! evaluates anything; evaluation order is fixed and documented per
//! combinator.
//!
//! - [`And`]: sequencing; rejects with the first failing operand's reason
//! - [`Or`]: alternative; accepts on the first accepting operand
//! - [`Not`]: inversion

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, AndAll, and, and_all};
pub use not::{Not, not};
pub use or::{Or, or};
