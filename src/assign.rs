//! Coalescing assignment: fill an absent (or empty) slot with a default and return the stored value.
//!
//! The slot is only written when the default producer is called and yields a value worth storing.
//! In the `try_` variants a failing producer leaves the slot exactly as it was.

use crate::{coalesce::unwrap, filter_non_empty, present_non_empty, IsEmpty};

// --------------------------------------------------------------------------
// Nil-coalescing assignment

/// Returns the value in `optional`, first storing the result of `default` if it is absent.
///
/// This is [Option::get_or_insert_with] under the naming of this crate.
///
/// ```
/// use std::collections::HashMap;
///
/// use coalescing_ops::coalesce_assign;
///
/// let mut ages = HashMap::from([("one", Some(1)), ("forty-two", None)]);
/// assert_eq!(*coalesce_assign(ages.get_mut("one").unwrap(), || 42), 1);
/// assert_eq!(*coalesce_assign(ages.get_mut("forty-two").unwrap(), || 42), 42);
/// assert_eq!(ages["forty-two"], Some(42));
/// ```
pub fn coalesce_assign<T>(optional: &mut Option<T>, default: impl FnOnce() -> T) -> &mut T {
    unwrap(try_coalesce_assign(optional, || Ok(default())))
}

/// Returns the value in `optional`, first storing the result of `default` if it is absent.
///
/// If both `optional` and the default are absent, `optional` is left as [None] and [None] is
/// returned.
pub fn coalesce_assign_option<T>(
    optional: &mut Option<T>,
    default: impl FnOnce() -> Option<T>,
) -> Option<&mut T> {
    unwrap(try_coalesce_assign_option(optional, || Ok(default())))
}

/// Like [coalesce_assign], but the default producer may fail. On error `optional` is not modified.
pub fn try_coalesce_assign<T, E>(
    optional: &mut Option<T>,
    default: impl FnOnce() -> Result<T, E>,
) -> Result<&mut T, E> {
    match optional {
        Some(value) => Ok(value),
        None => Ok(optional.insert(default()?)),
    }
}

/// Like [coalesce_assign_option], but the default producer may fail. On error `optional` is not
/// modified.
pub fn try_coalesce_assign_option<T, E>(
    optional: &mut Option<T>,
    default: impl FnOnce() -> Result<Option<T>, E>,
) -> Result<Option<&mut T>, E> {
    if optional.is_none() {
        if let Some(value) = default()? {
            *optional = Some(value);
        }
    }
    Ok(optional.as_mut())
}

// --------------------------------------------------------------------------
// Empty-coalescing assignment

/// Returns the contents of `optional` if it is present and non-empty. Otherwise stores the result
/// of `default` in `optional` and returns it.
///
/// The default is stored even if it is empty itself.
///
/// ```
/// use std::collections::HashMap;
///
/// use coalescing_ops::empty_coalesce_assign;
///
/// let mut last_names = HashMap::from([("John", Some("Smith".to_owned())), ("Tim", Some(String::new()))]);
/// let fallback = || "Apple".to_owned();
///
/// assert_eq!(empty_coalesce_assign(last_names.get_mut("John").unwrap(), fallback), "Smith");
/// assert_eq!(empty_coalesce_assign(last_names.get_mut("Tim").unwrap(), fallback), "Apple");
/// assert_eq!(last_names["Tim"].as_deref(), Some("Apple"));
/// ```
pub fn empty_coalesce_assign<C: IsEmpty>(
    optional: &mut Option<C>,
    default: impl FnOnce() -> C,
) -> &mut C {
    unwrap(try_empty_coalesce_assign(optional, || Ok(default())))
}

/// Returns the contents of `optional` if it is present and non-empty. Otherwise, if `default`
/// yields a present and non-empty value, stores it in `optional` and returns it.
///
/// An absent or empty default never replaces the contents of `optional`: in that case `optional`
/// is returned as it was, absent or empty. In particular an absent `optional` stays absent when the
/// default is present but empty.
pub fn empty_coalesce_assign_option<C: IsEmpty>(
    optional: &mut Option<C>,
    default: impl FnOnce() -> Option<C>,
) -> Option<&mut C> {
    unwrap(try_empty_coalesce_assign_option(optional, || Ok(default())))
}

/// Returns `value` if it is non-empty. Otherwise, if `default` yields a non-empty value, stores it
/// in `value` and returns it; an empty default leaves `value` unchanged.
pub fn empty_coalesce_assign_value<C: IsEmpty>(value: &mut C, default: impl FnOnce() -> C) -> &mut C {
    unwrap(try_empty_coalesce_assign_value(value, || Ok(default())))
}

/// Returns `value` if it is non-empty. Otherwise, if `default` yields a present and non-empty
/// value, stores it in `value` and returns it; an absent or empty default leaves `value` unchanged.
pub fn empty_coalesce_assign_value_option<C: IsEmpty>(
    value: &mut C,
    default: impl FnOnce() -> Option<C>,
) -> &mut C {
    unwrap(try_empty_coalesce_assign_value_option(value, || Ok(default())))
}

/// Like [empty_coalesce_assign], but the default producer may fail. On error `optional` is not
/// modified.
pub fn try_empty_coalesce_assign<C: IsEmpty, E>(
    optional: &mut Option<C>,
    default: impl FnOnce() -> Result<C, E>,
) -> Result<&mut C, E> {
    if !present_non_empty(optional) {
        *optional = Some(default()?);
    }
    match optional {
        Some(value) => Ok(value),
        None => unreachable!(),
    }
}

/// Like [empty_coalesce_assign_option], but the default producer may fail. On error `optional` is
/// not modified.
pub fn try_empty_coalesce_assign_option<C: IsEmpty, E>(
    optional: &mut Option<C>,
    default: impl FnOnce() -> Result<Option<C>, E>,
) -> Result<Option<&mut C>, E> {
    if !present_non_empty(optional) {
        let new_value = default()?;
        if present_non_empty(&new_value) {
            *optional = new_value;
        }
    }
    Ok(optional.as_mut())
}

/// Like [empty_coalesce_assign_value], but the default producer may fail. On error `value` is not
/// modified.
pub fn try_empty_coalesce_assign_value<C: IsEmpty, E>(
    value: &mut C,
    default: impl FnOnce() -> Result<C, E>,
) -> Result<&mut C, E> {
    if value.is_empty() {
        let new_value = default()?;
        if !new_value.is_empty() {
            *value = new_value;
        }
    }
    Ok(value)
}

/// Like [empty_coalesce_assign_value_option], but the default producer may fail. On error `value`
/// is not modified.
pub fn try_empty_coalesce_assign_value_option<C: IsEmpty, E>(
    value: &mut C,
    default: impl FnOnce() -> Result<Option<C>, E>,
) -> Result<&mut C, E> {
    if value.is_empty() {
        if let Some(new_value) = filter_non_empty(default()?) {
            *value = new_value;
        }
    }
    Ok(value)
}

// --------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_option_ignores_absent_default() {
        let mut slot = None::<u32>;
        assert_eq!(coalesce_assign_option(&mut slot, || None), None);
        assert_eq!(slot, None);
    }

    #[test]
    fn returned_reference_aliases_slot() {
        let mut slot = None;
        *coalesce_assign(&mut slot, || 1) = 7;
        assert_eq!(slot, Some(7));

        let mut names = Some(Vec::<&str>::new());
        empty_coalesce_assign(&mut names, Vec::new).push("first");
        assert_eq!(names, Some(vec!["first"]));
    }

    #[test]
    fn non_empty_slot_is_returned_in_place() {
        let mut names = Some(vec!["first"]);
        empty_coalesce_assign(&mut names, || vec!["default"]).push("second");
        assert_eq!(names, Some(vec!["first", "second"]));
    }

    #[test]
    fn try_error_leaves_empty_slot() {
        let mut slot = Some(String::new());
        let result = try_empty_coalesce_assign(&mut slot, || Err::<String, _>(()));
        assert_eq!(result, Err(()));
        assert_eq!(slot.as_deref(), Some(""));
    }
}
