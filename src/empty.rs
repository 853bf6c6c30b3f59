//! [IsEmpty] implementations for standard collections, strings, ranges, and the pointer types that
//! wrap them.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
    ffi::{OsStr, OsString},
    ops::{Range, RangeInclusive},
    rc::Rc,
    sync::Arc,
};

use crate::IsEmpty;

macro_rules! impl_empty {
    ({$($generics:tt)*}, $Coll:ty $(,)?) => {
        impl<$($generics)*> IsEmpty for $Coll {
            fn is_empty(&self) -> bool {
                // resolves to the inherent method
                self.is_empty()
            }
        }
    };
}

impl_empty!({}, str);
impl_empty!({}, String);
impl_empty!({}, OsStr);
impl_empty!({ T }, [T]);
impl_empty!({ T }, Vec<T>);
impl_empty!({ T }, VecDeque<T>);
impl_empty!({ T }, LinkedList<T>);
impl_empty!({ T }, BinaryHeap<T>);
impl_empty!({ T, S }, HashSet<T, S>);
impl_empty!({ K, V, S }, HashMap<K, V, S>);
impl_empty!({ T }, BTreeSet<T>);
impl_empty!({ K, V }, BTreeMap<K, V>);
impl_empty!({ Idx: PartialOrd }, Range<Idx>);
impl_empty!({ Idx: PartialOrd }, RangeInclusive<Idx>);

impl IsEmpty for OsString {
    fn is_empty(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl<T, const N: usize> IsEmpty for [T; N] {
    fn is_empty(&self) -> bool {
        N == 0
    }
}

// --------------------------------------------------------------------------
// Indirection

macro_rules! impl_empty_deref {
    ($($Ptr:ty),* $(,)?) => {
        $(
            impl<T: IsEmpty + ?Sized> IsEmpty for $Ptr {
                fn is_empty(&self) -> bool {
                    T::is_empty(self)
                }
            }
        )*
    };
}

impl_empty_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<B: IsEmpty + ToOwned + ?Sized> IsEmpty for Cow<'_, B> {
    fn is_empty(&self) -> bool {
        B::is_empty(self)
    }
}

// --------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn empty<C: IsEmpty + ?Sized>(value: &C) -> bool {
        value.is_empty()
    }

    #[test]
    fn strings() {
        assert!(empty(""));
        assert!(!empty("a"));
        assert!(empty(&String::new()));
        assert!(!empty(&String::from("abc")));
        assert!(empty(OsStr::new("")));
        assert!(!empty(&OsString::from("x")));
    }

    #[test]
    fn arrays_and_slices() {
        let none: [u8; 0] = [];
        assert!(empty(&none));
        assert!(!empty(&[1, 2, 3]));
        assert!(empty(&none[..]));
        assert!(!empty(&[1][..]));
    }

    #[test]
    fn ranges() {
        assert!(empty(&(3..3)));
        assert!(!empty(&(3..4)));
        #[allow(clippy::reversed_empty_ranges)]
        let backwards = 4..=3;
        assert!(empty(&backwards));
        assert!(!empty(&(3..=3)));
    }

    #[test]
    fn through_pointers() {
        assert!(empty(&Box::<str>::from("")));
        assert!(!empty(&Rc::new(vec![1])));
        assert!(empty(&Arc::new(BTreeSet::<i32>::new())));
        assert!(empty(&Cow::Borrowed("")));
        assert!(!empty(&Cow::<str>::Owned("owned".to_owned())));
        let mut v = vec![0];
        assert!(!empty(&&mut v));
    }
}
