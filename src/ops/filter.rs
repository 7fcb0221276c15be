use crate::{
  observable::{Observable, ObservableType},
  observer::Observer,
};

/// Observable returned by [`filter`](crate::observable::ObservableExt::filter).
#[derive(Clone)]
pub struct FilterOp<S, F> {
  pub(crate) source: S,
  pub(crate) predicate: F,
}

pub struct FilterObserver<O, F> {
  observer: O,
  predicate: F,
}

impl<S, F> ObservableType for FilterOp<S, F>
where
  S: ObservableType,
{
  type Item = S::Item;
}

impl<S, F, O> Observable<O> for FilterOp<S, F>
where
  S: Observable<FilterObserver<O, F>>,
  F: FnMut(&S::Item) -> bool,
  O: Observer<S::Item>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    self
      .source
      .actual_subscribe(FilterObserver { observer, predicate: self.predicate })
  }
}

impl<Item, O, F> Observer<Item> for FilterObserver<O, F>
where
  O: Observer<Item>,
  F: FnMut(&Item) -> bool,
{
  fn next(&mut self, value: Item) {
    if (self.predicate)(&value) {
      self.observer.next(value);
    }
  }
}
