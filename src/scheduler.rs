//! The injected scheduling capability consumed by the `delay` operator.
//!
//! The core never owns a clock or an executor. It hands a boxed work item to
//! a [`Scheduler`] together with a minimum delay and opaque priority
//! metadata; everything about timing, ordering under concurrency, and the
//! execution context belongs to the scheduler.

pub use std::time::{Duration, Instant};

/// Priority metadata carried alongside scheduled work.
///
/// The core passes it through untouched; a scheduler may use it to order
/// ready work or ignore it entirely.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub enum Priority {
  Low,
  #[default]
  Normal,
  High,
}

/// "Run this work no earlier than `delay` from now."
///
/// That is the whole contract: no ordering or promptness guarantee is
/// assumed beyond what the implementation itself promises. Submitted work
/// is owned by the scheduler — this core offers no way to retract it.
pub trait Scheduler {
  fn schedule(&self, delay: Option<Duration>, priority: Priority, work: Box<dyn FnOnce()>);
}

#[cfg(feature = "futures-scheduler")]
mod futures_scheduler {
  use super::{Duration, Priority, Scheduler};
  use futures::task::LocalSpawnExt;

  /// Schedules work as a spawned task on the pool the spawner belongs to.
  ///
  /// The work item is not `Send`, so it must run on the thread driving the
  /// pool; `LocalPool` is the natural executor for this single-threaded
  /// core.
  impl Scheduler for futures::executor::LocalSpawner {
    fn schedule(&self, delay: Option<Duration>, _priority: Priority, work: Box<dyn FnOnce()>) {
      let task = async move {
        if let Some(delay) = delay {
          futures_time::task::sleep(delay.into()).await;
        }
        work();
      };
      // Spawning only fails once the executor is shut down; the work item
      // is dropped with it.
      let _ = self.spawn_local(task);
    }
  }
}
