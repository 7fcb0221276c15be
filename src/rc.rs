//! Shared-ownership pointer wrappers for the single-threaded core.
//!
//! Every piece of shared mutable state in this crate (a subject's listener
//! bag, an operator's shared downstream observer) lives behind a [`MutRc`].
//! [`WeakRc`] is the non-owning counterpart used where a back-reference must
//! not keep its target alive.

use crate::observer::Observer;
use std::{
  cell::{Ref, RefCell, RefMut},
  rc::{Rc, Weak},
};

pub trait RcDeref {
  type Target<'a>
  where
    Self: 'a;
  fn rc_deref(&self) -> Self::Target<'_>;
}

pub trait RcDerefMut {
  type Target<'a>
  where
    Self: 'a;
  fn rc_deref_mut(&self) -> Self::Target<'_>;
}

#[derive(Default, Debug)]
pub struct MutRc<T>(Rc<RefCell<T>>);

impl<T> MutRc<T> {
  pub fn own(t: T) -> Self { Self(Rc::new(RefCell::new(t))) }

  /// Borrow mutably if no other borrow is outstanding.
  #[inline]
  pub fn try_rc_deref_mut(&self) -> Option<RefMut<'_, T>> { self.0.try_borrow_mut().ok() }

  /// Create a non-owning handle to the same allocation.
  #[inline]
  pub fn downgrade(&self) -> WeakRc<T> { WeakRc(Rc::downgrade(&self.0)) }

  /// Whether two handles point at the same allocation.
  #[inline]
  pub fn ptr_eq(a: &Self, b: &Self) -> bool { Rc::ptr_eq(&a.0, &b.0) }
}

impl<T> RcDeref for MutRc<T> {
  type Target<'a>
    = Ref<'a, T>
  where
    Self: 'a;

  #[inline]
  fn rc_deref(&self) -> Self::Target<'_> { self.0.borrow() }
}

impl<T> RcDerefMut for MutRc<T> {
  type Target<'a>
    = RefMut<'a, T>
  where
    Self: 'a;

  #[inline]
  fn rc_deref_mut(&self) -> Self::Target<'_> { self.0.borrow_mut() }
}

impl<T> Clone for MutRc<T> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> From<T> for MutRc<T> {
  #[inline]
  fn from(t: T) -> Self { Self::own(t) }
}

/// A shared observer: multi-upstream operators hand out clones of one
/// `MutRc`-wrapped downstream so every upstream feeds the same observer.
impl<Item, O> Observer<Item> for MutRc<O>
where
  O: Observer<Item>,
{
  fn next(&mut self, value: Item) { self.rc_deref_mut().next(value) }
}

/// Non-owning counterpart of [`MutRc`].
///
/// Upgrading fails once every owning handle is gone, which is exactly the
/// existence check subscription handles rely on.
pub struct WeakRc<T>(Weak<RefCell<T>>);

impl<T> WeakRc<T> {
  pub fn upgrade(&self) -> Option<MutRc<T>> { self.0.upgrade().map(MutRc) }
}

impl<T> Clone for WeakRc<T> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}
