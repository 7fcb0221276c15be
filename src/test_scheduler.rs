#![cfg(test)]
//! Virtual-time scheduler for deterministic delay tests.

use crate::{
  rc::{MutRc, RcDeref, RcDerefMut},
  scheduler::{Duration, Priority, Scheduler},
};

/// A scheduler driven by hand: time only moves through [`advance`], work
/// only runs through [`run_tasks`].
///
/// [`advance`]: ManualScheduler::advance
/// [`run_tasks`]: ManualScheduler::run_tasks
#[derive(Clone)]
pub struct ManualScheduler {
  inner: MutRc<Queue>,
}

struct Queue {
  now: Duration,
  tasks: Vec<Scheduled>,
}

struct Scheduled {
  ready_at: Duration,
  priority: Priority,
  work: Box<dyn FnOnce()>,
}

impl ManualScheduler {
  pub fn new() -> Self { Self { inner: MutRc::own(Queue { now: Duration::ZERO, tasks: vec![] }) } }

  pub fn advance(&self, by: Duration) { self.inner.rc_deref_mut().now += by; }

  /// Run every task whose deadline has passed, in submission order.
  ///
  /// Repeats until no task is due, so work scheduled by other work with an
  /// already-elapsed deadline runs in the same call.
  pub fn run_tasks(&self) {
    loop {
      let due: Vec<Scheduled> = {
        let mut queue = self.inner.rc_deref_mut();
        let now = queue.now;
        let (due, rest) = queue
          .tasks
          .drain(..)
          .partition(|task| task.ready_at <= now);
        queue.tasks = rest;
        due
      };
      if due.is_empty() {
        break;
      }
      for task in due {
        (task.work)();
      }
    }
  }

  pub fn advance_and_run(&self, by: Duration) {
    self.advance(by);
    self.run_tasks();
  }

  /// Number of not-yet-run work items.
  pub fn pending(&self) -> usize { self.inner.rc_deref().tasks.len() }

  /// Priorities of not-yet-run work items, in submission order.
  pub fn pending_priorities(&self) -> Vec<Priority> {
    self
      .inner
      .rc_deref()
      .tasks
      .iter()
      .map(|task| task.priority)
      .collect()
  }
}

impl Scheduler for ManualScheduler {
  fn schedule(&self, delay: Option<Duration>, priority: Priority, work: Box<dyn FnOnce()>) {
    let mut queue = self.inner.rc_deref_mut();
    let ready_at = queue.now + delay.unwrap_or_default();
    queue.tasks.push(Scheduled { ready_at, priority, work });
  }
}

mod test {
  use super::*;
  use std::{cell::Cell, rc::Rc};

  #[test]
  fn runs_nothing_before_the_deadline() {
    let scheduler = ManualScheduler::new();
    let ran = Rc::new(Cell::new(false));

    let c_ran = ran.clone();
    scheduler.schedule(
      Some(Duration::from_millis(10)),
      Priority::Normal,
      Box::new(move || c_ran.set(true)),
    );

    scheduler.run_tasks();
    assert!(!ran.get());

    scheduler.advance_and_run(Duration::from_millis(9));
    assert!(!ran.get());

    scheduler.advance_and_run(Duration::from_millis(1));
    assert!(ran.get());
  }

  #[test]
  fn immediate_work_runs_on_the_next_drain() {
    let scheduler = ManualScheduler::new();
    let ran = Rc::new(Cell::new(0));

    let c_ran = ran.clone();
    scheduler.schedule(None, Priority::Normal, Box::new(move || c_ran.set(c_ran.get() + 1)));
    assert_eq!(scheduler.pending(), 1);

    scheduler.run_tasks();
    assert_eq!(ran.get(), 1);
    assert_eq!(scheduler.pending(), 0);
  }

  #[test]
  fn work_scheduled_by_work_runs_in_the_same_drain() {
    let scheduler = ManualScheduler::new();
    let ran = Rc::new(Cell::new(false));

    let inner_scheduler = scheduler.clone();
    let c_ran = ran.clone();
    scheduler.schedule(
      None,
      Priority::Normal,
      Box::new(move || {
        inner_scheduler.schedule(None, Priority::Normal, Box::new(move || c_ran.set(true)));
      }),
    );

    scheduler.run_tasks();
    assert!(ran.get());
  }
}
