//! The producer contract and the user-facing combinator surface.

use crate::{
  observer::{FnMutObserver, Observer},
  ops::{
    combine_latest::CombineLatestOp, delay::DelayOp, filter::FilterOp, map::MapOp, merge::MergeOp,
  },
  scheduler::{Duration, Priority, Scheduler},
  subscription::Subscription,
};

/// Output typing for everything that can be subscribed to.
///
/// Splitting the item type out of [`Observable`] lets combinators name
/// `Self::Item` without committing to a concrete observer type.
pub trait ObservableType {
  type Item;
}

/// A producer of values: the single capability is attaching an observer.
///
/// Subscribing is the only operation that performs work. Constructing or
/// composing observables is free of side effects and captures no current
/// value, so the whole graph is cold: a value published before a
/// subscription exists is never seen by it. Every `actual_subscribe` call
/// establishes an independent delivery path with its own [`Subscription`];
/// releasing one path never disturbs another.
pub trait Observable<O>: ObservableType
where
  O: Observer<Self::Item>,
{
  type Unsub: Subscription;

  fn actual_subscribe(self, observer: O) -> Self::Unsub;
}

/// Combinators and subscription sugar, blanket-implemented for every
/// [`ObservableType`].
pub trait ObservableExt: ObservableType + Sized {
  /// Transform every value with `func`.
  ///
  /// `func` runs exactly once per delivered upstream value while the
  /// subscription is live — never before subscribing, never after release.
  fn map<B, F>(self, func: F) -> MapOp<Self, F>
  where
    F: FnMut(Self::Item) -> B,
  {
    MapOp { source: self, func }
  }

  /// Forward only the values for which `predicate` returns true.
  ///
  /// The predicate still sees every delivered value, including the ones it
  /// rejects.
  fn filter<F>(self, predicate: F) -> FilterOp<Self, F>
  where
    F: FnMut(&Self::Item) -> bool,
  {
    FilterOp { source: self, predicate }
  }

  /// Interleave this stream with another of the same item type.
  ///
  /// Values from either side are forwarded immediately and independently;
  /// nothing is buffered or synchronized.
  fn merge<S>(self, other: S) -> MergeOp<Self, S>
  where
    S: ObservableType<Item = Self::Item>,
  {
    MergeOp { a: self, b: other }
  }

  /// Pair the latest value of this stream with the latest of another.
  ///
  /// Emits `(a, b)` whenever either side delivers, once both sides have
  /// delivered at least once since subscribing. Latest-value state lives in
  /// the subscription, not the operator, so separate subscriptions never
  /// share it.
  fn combine_latest<S>(self, other: S) -> CombineLatestOp<Self, S>
  where
    S: ObservableType,
  {
    CombineLatestOp { a: self, b: other }
  }

  /// Re-deliver every value through `scheduler`, no earlier than `delay`
  /// after it arrives.
  fn delay<SD>(self, delay: Duration, scheduler: SD) -> DelayOp<Self, SD>
  where
    SD: Scheduler,
  {
    DelayOp { source: self, delay, priority: Priority::default(), scheduler }
  }

  /// Like [`delay`](ObservableExt::delay), with explicit priority metadata
  /// handed through to the scheduler.
  fn delay_with<SD>(self, delay: Duration, priority: Priority, scheduler: SD) -> DelayOp<Self, SD>
  where
    SD: Scheduler,
  {
    DelayOp { source: self, delay, priority, scheduler }
  }

  /// Subscribe with a closure as the observer.
  fn subscribe<F>(self, next: F) -> <Self as Observable<FnMutObserver<F>>>::Unsub
  where
    F: FnMut(Self::Item),
    Self: Observable<FnMutObserver<F>>,
  {
    self.actual_subscribe(FnMutObserver(next))
  }

  /// Subscribe with an explicit [`Observer`] implementation.
  fn subscribe_with<O>(self, observer: O) -> <Self as Observable<O>>::Unsub
  where
    O: Observer<Self::Item>,
    Self: Observable<O>,
  {
    self.actual_subscribe(observer)
  }
}

impl<T: ObservableType> ObservableExt for T {}
