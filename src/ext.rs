//! Method-call forms of the coalescing operations.
//!
//! These delegate to the free functions in [coalesce](mod@crate::coalesce) and
//! [assign](crate::assign), and make fallback chains read left to right:
//!
//! ```
//! use coalescing_ops::{OptionExt, ValueExt};
//!
//! let configured: Option<Vec<&str>> = Some(vec![]);
//! let hosts = configured
//!     .non_empty_or_else(|| None)
//!     .unwrap_non_empty_or_else(|| vec!["localhost"]);
//! assert_eq!(hosts, ["localhost"]);
//!
//! assert_eq!(String::new().or_else_if_empty(|| "untitled".to_owned()), "untitled");
//! ```

use crate::{assign, coalesce, IsEmpty};

/// Coalescing methods for an optional container.
pub trait OptionExt {
    /// The container type held by the option.
    type Item;

    /// Returns the contents if present and non-empty, and [None] otherwise.
    fn filter_non_empty(self) -> Option<Self::Item>;

    /// See [coalesce](crate::coalesce()).
    fn unwrap_non_empty_or_else<F: FnOnce() -> Self::Item>(self, default: F) -> Self::Item;

    /// See [coalesce_option](crate::coalesce_option).
    fn non_empty_or_else<F>(self, default: F) -> Option<Self::Item>
    where
        F: FnOnce() -> Option<Self::Item>;

    /// See [empty_coalesce_assign](crate::empty_coalesce_assign).
    fn get_non_empty_or_insert_with<F>(&mut self, default: F) -> &mut Self::Item
    where
        F: FnOnce() -> Self::Item;
}

impl<C: IsEmpty> OptionExt for Option<C> {
    type Item = C;

    fn filter_non_empty(self) -> Option<C> {
        crate::filter_non_empty(self)
    }
    fn unwrap_non_empty_or_else<F: FnOnce() -> C>(self, default: F) -> C {
        coalesce::coalesce(self, default)
    }
    fn non_empty_or_else<F>(self, default: F) -> Option<C>
    where
        F: FnOnce() -> Option<C>,
    {
        coalesce::coalesce_option(self, default)
    }
    fn get_non_empty_or_insert_with<F>(&mut self, default: F) -> &mut C
    where
        F: FnOnce() -> C,
    {
        assign::empty_coalesce_assign(self, default)
    }
}

/// Coalescing methods for a container that is never absent.
pub trait ValueExt: IsEmpty + Sized {
    /// Returns `Some(self)` unless `self` is empty.
    fn non_empty(self) -> Option<Self> {
        crate::filter_non_empty(Some(self))
    }

    /// See [coalesce_value](crate::coalesce_value).
    fn or_else_if_empty<F: FnOnce() -> Self>(self, default: F) -> Self {
        coalesce::coalesce_value(self, default)
    }

    /// See [coalesce_value_option](crate::coalesce_value_option).
    fn or_option_if_empty<F: FnOnce() -> Option<Self>>(self, default: F) -> Self {
        coalesce::coalesce_value_option(self, default)
    }

    /// See [empty_coalesce_assign_value](crate::empty_coalesce_assign_value).
    fn replace_if_empty_with<F: FnOnce() -> Self>(&mut self, default: F) -> &mut Self {
        assign::empty_coalesce_assign_value(self, default)
    }
}

impl<C: IsEmpty> ValueExt for C {}

// --------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_non_empty() {
        assert_eq!(Some("").filter_non_empty(), None);
        assert_eq!(Some("a").filter_non_empty(), Some("a"));
        assert_eq!(None::<&str>.filter_non_empty(), None);
    }

    #[test]
    fn item_names_container() {
        fn first_name<O: OptionExt<Item = String>>(name: O) -> String {
            name.unwrap_non_empty_or_else(|| "anonymous".to_owned())
        }
        assert_eq!(first_name(Some(String::new())), "anonymous");
        assert_eq!(first_name(Some("Ada".to_owned())), "Ada");
    }

    #[test]
    fn non_empty() {
        assert_eq!(Vec::<u8>::new().non_empty(), None);
        assert_eq!(vec![1].non_empty(), Some(vec![1]));
    }

    #[test]
    fn replace_if_empty_with() {
        let mut title = String::new();
        title.replace_if_empty_with(|| "X".to_owned()).push('!');
        assert_eq!(title, "X!");
    }

    #[test]
    fn get_non_empty_or_insert_with() {
        let mut tags: Option<Vec<&str>> = None;
        assert_eq!(tags.get_non_empty_or_insert_with(|| vec!["new"]), &["new"]);
        assert_eq!(tags.get_non_empty_or_insert_with(|| vec!["other"]), &["new"]);
    }
}
