//! Reference-counted pointers used for values with reference identity
//!
//! Cycles aren't collected. Values that refer to each other (e.g. a constructor and its
//! prototype) stay alive as long as either of them is reachable, and are leaked afterwards.

use std::{
    cell::RefCell,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    rc::Rc,
};

/// An immutable pointer to a value in allocated memory
#[derive(Default)]
pub struct Ptr<T: ?Sized>(Rc<T>);

/// A pointer to a value that can be mutated, with borrowing checked at runtime
pub type PtrMut<T> = Ptr<RefCell<T>>;

impl<T> Ptr<T> {
    /// Moves the value into a new allocation
    pub fn new(value: T) -> Self {
        Self(Rc::new(value))
    }
}

impl<T> Ptr<RefCell<T>> {
    /// Moves the value into a new mutable allocation
    pub fn new_mut(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }
}

impl<T: ?Sized> Ptr<T> {
    /// Returns true if the two `Ptr`s point to the same allocation
    ///
    /// See also: [`Rc::ptr_eq`]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }

}

impl<T: ?Sized> Clone for Ptr<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Ptr<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl From<&str> for Ptr<str> {
    fn from(value: &str) -> Self {
        Self(Rc::from(value))
    }
}

impl From<String> for Ptr<str> {
    fn from(value: String) -> Self {
        Self(Rc::from(value))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Ptr<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + Eq> Eq for Ptr<T> {}

impl<T: ?Sized + PartialOrd> PartialOrd for Ptr<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T: ?Sized + Ord> Ord for Ptr<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: ?Sized + Hash> Hash for Ptr<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Ptr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Ptr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ptr_eq_compares_allocations() {
        let a: Ptr<str> = "abc".into();
        let b: Ptr<str> = "abc".into();
        assert_eq!(a, b);
        assert!(!Ptr::ptr_eq(&a, &b));
        assert!(Ptr::ptr_eq(&a, &a.clone()));
    }

    #[test]
    fn clones_share_mutations() {
        let a = Ptr::new_mut(1);
        let b = a.clone();
        *b.borrow_mut() += 1;
        assert_eq!(*a.borrow(), 2);
    }
}
