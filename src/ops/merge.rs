use crate::{
  observable::{Observable, ObservableType},
  observer::Observer,
  rc::MutRc,
  subscription::TupleSubscription,
};

/// Observable returned by [`merge`](crate::observable::ObservableExt::merge).
///
/// Subscribing subscribes to both upstreams with one shared downstream
/// observer; whichever side delivers, the value is forwarded immediately.
/// There is no buffering and no coordination between the two sides.
#[derive(Clone)]
pub struct MergeOp<A, B> {
  pub(crate) a: A,
  pub(crate) b: B,
}

impl<A, B> ObservableType for MergeOp<A, B>
where
  A: ObservableType,
  B: ObservableType<Item = A::Item>,
{
  type Item = A::Item;
}

impl<A, B, O> Observable<O> for MergeOp<A, B>
where
  A: Observable<MutRc<O>>,
  B: Observable<MutRc<O>> + ObservableType<Item = A::Item>,
  O: Observer<A::Item>,
{
  type Unsub = TupleSubscription<A::Unsub, B::Unsub>;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let shared = MutRc::own(observer);
    let unsub_a = self.a.actual_subscribe(shared.clone());
    let unsub_b = self.b.actual_subscribe(shared);
    TupleSubscription::new(unsub_a, unsub_b)
  }
}
