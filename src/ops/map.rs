use crate::{
  observable::{Observable, ObservableType},
  observer::Observer,
};

/// Observable returned by [`map`](crate::observable::ObservableExt::map).
#[derive(Clone)]
pub struct MapOp<S, F> {
  pub(crate) source: S,
  pub(crate) func: F,
}

pub struct MapObserver<O, F> {
  observer: O,
  func: F,
}

impl<B, S, F> ObservableType for MapOp<S, F>
where
  S: ObservableType,
  F: FnMut(S::Item) -> B,
{
  type Item = B;
}

impl<B, S, F, O> Observable<O> for MapOp<S, F>
where
  S: Observable<MapObserver<O, F>>,
  F: FnMut(S::Item) -> B,
  O: Observer<B>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(MapObserver { observer, func: self.func })
  }
}

impl<A, B, O, F> Observer<A> for MapObserver<O, F>
where
  O: Observer<B>,
  F: FnMut(A) -> B,
{
  #[inline]
  fn next(&mut self, value: A) { self.observer.next((self.func)(value)) }
}
