use crate::{
  observable::{Observable, ObservableType},
  observer::Observer,
  rc::MutRc,
  scheduler::{Duration, Priority, Scheduler},
};

/// Observable returned by [`delay`](crate::observable::ObservableExt::delay).
///
/// Each upstream value is handed to the injected scheduler as a work item to
/// run no earlier than `delay` after it arrived; the scheduler owns all
/// timing and ordering beyond that. Releasing the subscription releases the
/// upstream only — work already submitted to the scheduler is not retracted
/// and will still deliver when the scheduler runs it.
#[derive(Clone)]
pub struct DelayOp<S, SD> {
  pub(crate) source: S,
  pub(crate) delay: Duration,
  pub(crate) priority: Priority,
  pub(crate) scheduler: SD,
}

pub struct DelayObserver<O, SD> {
  observer: MutRc<O>,
  delay: Duration,
  priority: Priority,
  scheduler: SD,
}

impl<S, SD> ObservableType for DelayOp<S, SD>
where
  S: ObservableType,
{
  type Item = S::Item;
}

impl<S, SD, O> Observable<O> for DelayOp<S, SD>
where
  S: Observable<DelayObserver<O, SD>>,
  S::Item: 'static,
  O: Observer<S::Item> + 'static,
  SD: Scheduler,
{
  type Unsub = S::Unsub;

  fn actual_subscribe(self, observer: O) -> Self::Unsub {
    let Self { source, delay, priority, scheduler } = self;
    source.actual_subscribe(DelayObserver {
      observer: MutRc::own(observer),
      delay,
      priority,
      scheduler,
    })
  }
}

impl<Item, O, SD> Observer<Item> for DelayObserver<O, SD>
where
  Item: 'static,
  O: Observer<Item> + 'static,
  SD: Scheduler,
{
  fn next(&mut self, value: Item) {
    let mut observer = self.observer.clone();
    self
      .scheduler
      .schedule(Some(self.delay), self.priority, Box::new(move || observer.next(value)));
  }
}

#[cfg(test)]
mod test {
  use crate::{prelude::*, test_scheduler::ManualScheduler};
  use std::{cell::RefCell, rc::Rc};

  #[test]
  fn delivers_only_after_the_delay_elapses() {
    let scheduler = ManualScheduler::new();
    let subject = Subject::new();
    let seen = Rc::new(RefCell::new(vec![]));

    let c_seen = seen.clone();
    let _sub = subject
      .clone()
      .delay(Duration::from_millis(10), scheduler.clone())
      .subscribe(move |v| c_seen.borrow_mut().push(v));

    subject.publish(1);
    assert!(seen.borrow().is_empty());

    scheduler.advance_and_run(Duration::from_millis(5));
    assert!(seen.borrow().is_empty());

    scheduler.advance_and_run(Duration::from_millis(5));
    assert_eq!(*seen.borrow(), vec![1]);
  }

  #[test]
  fn each_value_gets_its_own_work_item() {
    let scheduler = ManualScheduler::new();
    let subject = Subject::new();
    let seen = Rc::new(RefCell::new(vec![]));

    let c_seen = seen.clone();
    let _sub = subject
      .clone()
      .delay(Duration::from_millis(1), scheduler.clone())
      .subscribe(move |v| c_seen.borrow_mut().push(v));

    subject.publish(1);
    subject.publish(2);
    assert_eq!(scheduler.pending(), 2);

    scheduler.advance_and_run(Duration::from_millis(1));
    assert_eq!(*seen.borrow(), vec![1, 2]);
    assert_eq!(scheduler.pending(), 0);
  }

  #[test]
  fn release_stops_new_submissions() {
    let scheduler = ManualScheduler::new();
    let subject = Subject::new();

    let sub = subject
      .clone()
      .delay(Duration::from_millis(1), scheduler.clone())
      .subscribe(|_: i32| {});

    sub.unsubscribe();
    subject.publish(1);
    assert_eq!(scheduler.pending(), 0);
  }

  #[test]
  fn delayed_work_outlives_cancel() {
    let scheduler = ManualScheduler::new();
    let subject = Subject::new();
    let seen = Rc::new(RefCell::new(vec![]));

    let c_seen = seen.clone();
    let sub = subject
      .clone()
      .delay(Duration::from_millis(1), scheduler.clone())
      .subscribe(move |v| c_seen.borrow_mut().push(v));

    subject.publish(1);
    sub.unsubscribe();

    // The upstream subscription is gone, but the submitted work item is the
    // scheduler's now and still runs.
    scheduler.advance_and_run(Duration::from_millis(1));
    assert_eq!(*seen.borrow(), vec![1]);
  }

  #[test]
  fn priority_metadata_reaches_the_scheduler() {
    let scheduler = ManualScheduler::new();
    let subject = Subject::new();

    let _sub = subject
      .clone()
      .delay_with(Duration::from_millis(1), Priority::High, scheduler.clone())
      .subscribe(|_: i32| {});

    subject.publish(1);
    assert_eq!(scheduler.pending_priorities(), vec![Priority::High]);
  }
}
