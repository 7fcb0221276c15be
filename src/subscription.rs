//! Subscription handles and release-action plumbing.
//!
//! Subscribing to an observable returns a handle that tears the delivery
//! path down. Handles here are scope-bound: letting the last handle go out
//! of scope releases the subscription just like an explicit call, so a
//! forgotten handle can never leak an upstream subscription.

use crate::rc::{MutRc, RcDeref, RcDerefMut};

/// A handle that can tear down an active subscription.
///
/// `unsubscribe` consumes the handle, so a given handle releases at most
/// once by construction.
pub trait Subscription {
  fn unsubscribe(self);

  fn is_closed(&self) -> bool;
}

/// The trivially-closed subscription.
impl Subscription for () {
  #[inline]
  fn unsubscribe(self) {}

  #[inline]
  fn is_closed(&self) -> bool { true }
}

/// Pending release action with a single-fire latch.
///
/// The action is taken out of the slot before it runs, so it fires at most
/// once no matter how cancellation is triggered.
struct Release(Option<Box<dyn FnOnce()>>);

impl Drop for Release {
  fn drop(&mut self) {
    if let Some(release) = self.0.take() {
      release();
    }
  }
}

/// A shared, clonable handle around one release action.
///
/// The release action runs exactly once: on the first [`cancel`], or — if
/// nobody cancelled explicitly — when the last clone of the handle is
/// dropped. Calling `cancel` again, on any clone, or re-entrantly from
/// inside the release action itself, is a no-op.
///
/// [`cancel`]: Cancelable::cancel
///
/// # Examples
///
/// ```rust
/// use rxlite::prelude::*;
/// use std::{cell::Cell, rc::Rc};
///
/// let fired = Rc::new(Cell::new(0));
/// let f = fired.clone();
/// {
///   let handle = Cancelable::new(move || f.set(f.get() + 1));
///   handle.cancel();
///   handle.cancel();
///   // dropping after a cancel does not fire again
/// }
/// assert_eq!(fired.get(), 1);
/// ```
pub struct Cancelable {
  release: MutRc<Release>,
}

impl Cancelable {
  pub fn new(release: impl FnOnce() + 'static) -> Self {
    Self { release: MutRc::own(Release(Some(Box::new(release)))) }
  }

  /// Adapt any [`Subscription`] into a `Cancelable`.
  pub fn wrap(subscription: impl Subscription + 'static) -> Self {
    Self::new(move || subscription.unsubscribe())
  }

  /// Aggregate several handles into one.
  ///
  /// Cancelling the composite cancels every child exactly once; the
  /// composite is itself scope-bound like any other `Cancelable`.
  pub fn compose(children: impl IntoIterator<Item = Cancelable>) -> Self {
    let children: Vec<Cancelable> = children.into_iter().collect();
    Self::new(move || {
      for child in children {
        child.cancel();
      }
    })
  }

  /// Run the release action if it has not run yet.
  ///
  /// The latch is taken before the action is invoked, so a nested `cancel`
  /// issued from inside the release action finds it already spent.
  pub fn cancel(&self) {
    let release = self.release.rc_deref_mut().0.take();
    if let Some(release) = release {
      release();
    }
  }
}

impl Clone for Cancelable {
  #[inline]
  fn clone(&self) -> Self { Self { release: self.release.clone() } }
}

impl Subscription for Cancelable {
  #[inline]
  fn unsubscribe(self) { self.cancel() }

  #[inline]
  fn is_closed(&self) -> bool { self.release.rc_deref().0.is_none() }
}

/// Combines the subscriptions of a two-upstream operator.
///
/// Unsubscribing releases both sides; each side's own at-most-once rule
/// still holds.
pub struct TupleSubscription<U1, U2> {
  unsub1: U1,
  unsub2: U2,
}

impl<U1, U2> TupleSubscription<U1, U2> {
  pub fn new(unsub1: U1, unsub2: U2) -> Self { TupleSubscription { unsub1, unsub2 } }
}

impl<U1, U2> Subscription for TupleSubscription<U1, U2>
where
  U1: Subscription,
  U2: Subscription,
{
  fn unsubscribe(self) {
    self.unsub1.unsubscribe();
    self.unsub2.unsubscribe();
  }

  fn is_closed(&self) -> bool { self.unsub1.is_closed() && self.unsub2.is_closed() }
}
