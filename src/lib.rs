//! Empty-coalescing and nil-coalescing assignment operations.
//!
//! These operations choose between a left-hand operand and a lazily produced default, depending on
//! whether the left-hand operand is *absent* ([None]) or *empty* (as defined by [IsEmpty]):
//!
//! - [coalesce()] and its variants return the left-hand operand if it is present and non-empty, and
//!   otherwise the default. They never modify their operands.
//! - [coalesce_assign] and [coalesce_assign_option] fill an absent [Option] slot with the default
//!   and return the stored value.
//! - [empty_coalesce_assign] and its variants fill an absent *or empty* slot with the default.
//!
//! In every case the default producer is a [FnOnce] closure which is only called when the left-hand
//! operand fails its test. Each operation also has a `try_` variant whose producer returns a
//! [Result]; an error from the producer is returned unchanged and nothing is written.
//!
//! The [OptionExt] and [ValueExt] traits expose the same operations as methods, which reads better
//! when several fallbacks are chained:
//!
//! ```
//! use coalescing_ops::OptionExt;
//!
//! let nickname: Option<String> = Some(String::new());
//! let username: Option<String> = None;
//! let name = nickname
//!     .non_empty_or_else(|| username)
//!     .unwrap_non_empty_or_else(|| "anonymous".to_owned());
//! assert_eq!(name, "anonymous");
//! ```

pub use self::{
    assign::{
        coalesce_assign, coalesce_assign_option, empty_coalesce_assign,
        empty_coalesce_assign_option, empty_coalesce_assign_value,
        empty_coalesce_assign_value_option, try_coalesce_assign, try_coalesce_assign_option,
        try_empty_coalesce_assign, try_empty_coalesce_assign_option,
        try_empty_coalesce_assign_value, try_empty_coalesce_assign_value_option,
    },
    coalesce::{
        coalesce, coalesce_option, coalesce_value, coalesce_value_option, try_coalesce,
        try_coalesce_option, try_coalesce_value, try_coalesce_value_option,
    },
    ext::{OptionExt, ValueExt},
};

pub mod assign;
pub mod coalesce;
mod empty;
pub mod ext;
#[cfg(feature = "serde_json")]
mod json;

// --------------------------------------------------------------------------

/// Types with a notion of being "empty", typically collections with no elements.
///
/// Emptiness is the only capability the coalescing operations require of a container. It must be
/// decided by the value's contents (e.g. a length of zero), not by comparison against some
/// sentinel value.
///
/// This crate implements the trait for the standard strings, slices, arrays, collections and
/// ranges, and forwards it through references, [Box], [Rc](std::rc::Rc), [Arc](std::sync::Arc) and
/// [Cow](std::borrow::Cow).
#[cfg_attr(
    feature = "serde_json",
    doc = "With the `serde_json` feature, it is also implemented for [serde_json::Map]."
)]
pub trait IsEmpty {
    /// Returns true if the value contains no elements.
    fn is_empty(&self) -> bool;
}

/// Returns `value` unless it is absent or empty.
fn filter_non_empty<C: IsEmpty>(value: Option<C>) -> Option<C> {
    value.filter(|value| !value.is_empty())
}

/// Returns true if `value` is present and non-empty.
fn present_non_empty<C: IsEmpty>(value: &Option<C>) -> bool {
    filter_non_empty(value.as_ref()).is_some()
}
