//! Empty-coalescing: choose the left-hand operand unless it is absent or empty.
//!
//! None of these functions modify their operands. Because each result can be fed back in as the
//! left-hand operand of another call, they chain: the first present, non-empty candidate wins and
//! the producers for later candidates are never called.

use std::convert::Infallible;

use crate::{present_non_empty, IsEmpty};

/// Returns the contents of `optional` if it is present and non-empty, and otherwise the result of
/// `default`.
///
/// The result may still be empty if the default is.
///
/// ```
/// use coalescing_ops::coalesce;
///
/// let name = "AB";
/// assert_eq!(coalesce(Some(&name[..1]), || "New Item"), "A");
/// assert_eq!(coalesce(Some(&name[..0]), || "New Item"), "New Item");
/// assert_eq!(coalesce(None, || "New Item"), "New Item");
/// ```
pub fn coalesce<C: IsEmpty>(optional: Option<C>, default: impl FnOnce() -> C) -> C {
    unwrap(try_coalesce(optional, || Ok(default())))
}

/// Returns `optional` if it is present and non-empty, and otherwise the result of `default`, which
/// may itself be absent.
pub fn coalesce_option<C: IsEmpty>(
    optional: Option<C>,
    default: impl FnOnce() -> Option<C>,
) -> Option<C> {
    unwrap(try_coalesce_option(optional, || Ok(default())))
}

/// Returns `value` if it is non-empty, and otherwise the result of `default`.
pub fn coalesce_value<C: IsEmpty>(value: C, default: impl FnOnce() -> C) -> C {
    unwrap(try_coalesce_value(value, || Ok(default())))
}

/// Returns `value` if it is non-empty, and otherwise the result of `default` if that is present.
/// If `value` is empty and `default` yields [None], the empty `value` is returned.
pub fn coalesce_value_option<C: IsEmpty>(value: C, default: impl FnOnce() -> Option<C>) -> C {
    unwrap(try_coalesce_value_option(value, || Ok(default())))
}

// --------------------------------------------------------------------------
// Fallible producers

/// Like [coalesce], but the default producer may fail. Its error is returned unchanged.
pub fn try_coalesce<C: IsEmpty, E>(
    optional: Option<C>,
    default: impl FnOnce() -> Result<C, E>,
) -> Result<C, E> {
    match optional {
        Some(value) if !value.is_empty() => Ok(value),
        _ => default(),
    }
}

/// Like [coalesce_option], but the default producer may fail. Its error is returned unchanged.
pub fn try_coalesce_option<C: IsEmpty, E>(
    optional: Option<C>,
    default: impl FnOnce() -> Result<Option<C>, E>,
) -> Result<Option<C>, E> {
    if present_non_empty(&optional) {
        return Ok(optional);
    }
    default()
}

/// Like [coalesce_value], but the default producer may fail. Its error is returned unchanged.
pub fn try_coalesce_value<C: IsEmpty, E>(
    value: C,
    default: impl FnOnce() -> Result<C, E>,
) -> Result<C, E> {
    if !value.is_empty() {
        return Ok(value);
    }
    default()
}

/// Like [coalesce_value_option], but the default producer may fail. Its error is returned
/// unchanged.
pub fn try_coalesce_value_option<C: IsEmpty, E>(
    value: C,
    default: impl FnOnce() -> Result<Option<C>, E>,
) -> Result<C, E> {
    if !value.is_empty() {
        return Ok(value);
    }
    Ok(default()?.unwrap_or(value))
}

pub(crate) fn unwrap<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

// --------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn value_option_keeps_empty_left_when_default_absent() {
        let calls = Cell::new(0);
        let result = coalesce_value_option(String::new(), || {
            calls.set(calls.get() + 1);
            None
        });
        assert_eq!(result, "");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn option_returns_absent_default() {
        assert_eq!(coalesce_option(Some(Vec::<u8>::new()), || None), None);
    }

    #[test]
    fn try_skips_producer_for_non_empty_left() {
        let result: Result<_, &str> = try_coalesce(Some("left"), || Err("unreachable"));
        assert_eq!(result, Ok("left"));
    }
}
