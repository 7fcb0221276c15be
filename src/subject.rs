//! The multicast hub: a hot producer that fans published values out to
//! every currently attached listener.

use crate::{
  bag::{Bag, Key},
  observable::{Observable, ObservableType},
  observer::{BoxedObserver, Observer},
  rc::{MutRc, RcDeref, RcDerefMut, WeakRc},
  subscription::Subscription,
};
use smallvec::SmallVec;

type Listener<'a, Item> = MutRc<BoxedObserver<'a, Item>>;

/// A hot observable that multicasts published values to its subscribers.
///
/// Cloning a `Subject` clones the handle, not the listener set: every clone
/// publishes to, and subscribes on, the same set. Listeners attach through
/// [`Observable::actual_subscribe`] (usually via `subscribe`) and detach
/// when the returned [`SubjectSubscription`] is released — explicitly or by
/// going out of scope.
///
/// # Re-entrancy
///
/// Subscribing and unsubscribing from inside a listener callback is
/// supported: a listener added during a publish is not visited by that
/// publish, and a listener removed during a publish is not invoked after its
/// removal. Publishing to the same subject from inside one of its own
/// listeners is **not** supported and panics.
///
/// # Examples
///
/// ```rust
/// use rxlite::prelude::*;
/// use std::{cell::RefCell, rc::Rc};
///
/// let subject = Subject::new();
/// let seen = Rc::new(RefCell::new(vec![]));
///
/// let c_seen = seen.clone();
/// let sub = subject
///   .clone()
///   .subscribe(move |v| c_seen.borrow_mut().push(v));
///
/// subject.publish(1);
/// subject.publish(2);
/// sub.unsubscribe();
/// subject.publish(3);
///
/// assert_eq!(*seen.borrow(), vec![1, 2]);
/// ```
pub struct Subject<'a, Item> {
  listeners: MutRc<Bag<Listener<'a, Item>>>,
}

impl<'a, Item> Subject<'a, Item> {
  pub fn new() -> Self { <_>::default() }

  /// Number of currently attached listeners.
  pub fn subscriber_count(&self) -> usize { self.listeners.rc_deref().len() }

  pub fn is_empty(&self) -> bool { self.listeners.rc_deref().is_empty() }

  /// Deliver `value` to every listener attached when the publish started.
  ///
  /// The listener set is snapshotted up front; each snapshotted listener is
  /// invoked only if it is still attached when its turn comes. All but the
  /// last receive a clone, the last receives the value itself.
  pub fn publish(&self, value: Item)
  where
    Item: Clone,
  {
    let snapshot: SmallVec<[(Key, Listener<'a, Item>); 2]> = self
      .listeners
      .rc_deref()
      .iter()
      .map(|(key, listener)| (key, listener.clone()))
      .collect();

    let mut iter = snapshot.into_iter().peekable();
    while let Some((key, listener)) = iter.next() {
      // Still attached, and still the same listener: a key freed during
      // this publish may already identify a newcomer.
      let attached = self
        .listeners
        .rc_deref()
        .get(key)
        .is_some_and(|current| MutRc::ptr_eq(current, &listener));
      if !attached {
        continue;
      }

      let Some(mut guard) = listener.try_rc_deref_mut() else {
        panic!("re-entrant publish on the same Subject is not supported");
      };
      if iter.peek().is_some() {
        guard.next(value.clone());
      } else {
        guard.next(value);
        break;
      }
    }
  }
}

impl<'a, Item> Clone for Subject<'a, Item> {
  fn clone(&self) -> Self { Self { listeners: self.listeners.clone() } }
}

impl<'a, Item> Default for Subject<'a, Item> {
  fn default() -> Self { Self { listeners: MutRc::own(Bag::new()) } }
}

/// A subject sits happily downstream of another observable.
impl<'a, Item: Clone> Observer<Item> for Subject<'a, Item> {
  fn next(&mut self, value: Item) { self.publish(value) }
}

impl<'a, Item> ObservableType for Subject<'a, Item> {
  type Item = Item;
}

impl<'a, Item, O> Observable<O> for Subject<'a, Item>
where
  O: Observer<Item> + 'a,
{
  type Unsub = SubjectSubscription<'a, Item>;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let listener: Listener<'a, Item> = MutRc::own(Box::new(observer));
    let key = self.listeners.rc_deref_mut().insert(listener);
    SubjectSubscription { listeners: self.listeners.downgrade(), key }
  }
}

/// Handle for one listener attached to a [`Subject`].
///
/// Holds only a non-owning reference to the subject's listener set: a
/// subscription never keeps its subject alive, and releasing after the
/// subject is gone is a safe no-op. Removal runs in `Drop`, so explicit
/// release and scope exit share one path and the listener slot is freed
/// exactly once.
pub struct SubjectSubscription<'a, Item> {
  listeners: WeakRc<Bag<Listener<'a, Item>>>,
  key: Key,
}

impl<'a, Item> Drop for SubjectSubscription<'a, Item> {
  fn drop(&mut self) {
    if let Some(listeners) = self.listeners.upgrade() {
      listeners.rc_deref_mut().remove(self.key);
    }
  }
}

impl<'a, Item> Subscription for SubjectSubscription<'a, Item> {
  // Removal happens in Drop; consuming the handle is the release.
  fn unsubscribe(self) {}

  fn is_closed(&self) -> bool {
    self
      .listeners
      .upgrade()
      .map_or(true, |listeners| !listeners.rc_deref().contains(self.key))
  }
}
