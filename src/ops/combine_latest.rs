use crate::{
  observable::{Observable, ObservableType},
  observer::Observer,
  rc::MutRc,
  subscription::TupleSubscription,
};
use std::marker::PhantomData;

/// Observable returned by
/// [`combine_latest`](crate::observable::ObservableExt::combine_latest).
///
/// Emits the pair of latest values whenever either side delivers, once both
/// sides have delivered at least once since subscribing. The latest-value
/// slots belong to the subscription, so separate subscriptions never share
/// state.
#[derive(Clone)]
pub struct CombineLatestOp<A, B> {
  pub(crate) a: A,
  pub(crate) b: B,
}

/// Tagged channel the two feeder observers push through.
enum CombineItem<A, B> {
  ItemA(A),
  ItemB(B),
}

pub struct CombineLatestObserver<O, A, B> {
  observer: O,
  a: Option<A>,
  b: Option<B>,
}

impl<A, B> ObservableType for CombineLatestOp<A, B>
where
  A: ObservableType,
  B: ObservableType,
{
  type Item = (A::Item, B::Item);
}

impl<A, B, O, AI, BI> Observable<O> for CombineLatestOp<A, B>
where
  A: Observable<AObserver<MutRc<CombineLatestObserver<O, AI, BI>>, BI>> + ObservableType<Item = AI>,
  B: Observable<BObserver<MutRc<CombineLatestObserver<O, AI, BI>>, AI>> + ObservableType<Item = BI>,
  O: Observer<(AI, BI)>,
  AI: Clone,
  BI: Clone,
{
  type Unsub = TupleSubscription<A::Unsub, B::Unsub>;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let shared = MutRc::own(CombineLatestObserver { observer, a: None, b: None });
    let unsub_a = self.a.actual_subscribe(AObserver(shared.clone(), PhantomData));
    let unsub_b = self.b.actual_subscribe(BObserver(shared, PhantomData));
    TupleSubscription::new(unsub_a, unsub_b)
  }
}

impl<O, A, B> Observer<CombineItem<A, B>> for CombineLatestObserver<O, A, B>
where
  O: Observer<(A, B)>,
  A: Clone,
  B: Clone,
{
  fn next(&mut self, value: CombineItem<A, B>) {
    match value {
      CombineItem::ItemA(v) => self.a = Some(v),
      CombineItem::ItemB(v) => self.b = Some(v),
    }
    if let (Some(a), Some(b)) = (self.a.clone(), self.b.clone()) {
      self.observer.next((a, b));
    }
  }
}

pub struct AObserver<O, B>(O, PhantomData<B>);

impl<O, A, B> Observer<A> for AObserver<O, B>
where
  O: Observer<CombineItem<A, B>>,
{
  #[inline]
  fn next(&mut self, value: A) { self.0.next(CombineItem::ItemA(value)) }
}

pub struct BObserver<O, A>(O, PhantomData<A>);

impl<O, A, B> Observer<B> for BObserver<O, A>
where
  O: Observer<CombineItem<A, B>>,
{
  #[inline]
  fn next(&mut self, value: B) { self.0.next(CombineItem::ItemB(value)) }
}
