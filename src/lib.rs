//! # rxlite: a minimal push-based reactive core
//!
//! Subjects, a handful of composable operators, and the subscription
//! machinery that ties them together.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxlite::prelude::*;
//! use std::{cell::RefCell, rc::Rc};
//!
//! let numbers = Subject::new();
//! let seen = Rc::new(RefCell::new(vec![]));
//!
//! let c_seen = seen.clone();
//! let sub = numbers
//!   .clone()
//!   .filter(|v: &i32| v % 2 == 0)
//!   .map(|v| v * 10)
//!   .subscribe(move |v| c_seen.borrow_mut().push(v));
//!
//! for v in 0..5 {
//!   numbers.publish(v);
//! }
//! sub.unsubscribe();
//! numbers.publish(6);
//!
//! assert_eq!(*seen.borrow(), vec![0, 20, 40]);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Subject`] | Multicast hub: publish once, deliver to every subscriber |
//! | [`Observable`] | The core capability: attach an observer, get a handle back |
//! | [`Observer`] | Consumes pushed values |
//! | [`Subscription`] / [`Cancelable`] | Handles that release a delivery path |
//!
//! Composition is cold and lazy: building an operator chain does nothing
//! until `subscribe` walks it, and a subscription only ever sees values
//! published after it was established. Handles are scope-bound — dropping
//! the last handle releases the subscription, so keep it alive for as long
//! as delivery should continue.
//!
//! The core is single-threaded by design: no locks, no atomics, no
//! cross-thread guarantees. The one place execution can move in time is the
//! [`delay`](observable::ObservableExt::delay) operator, which hands work to
//! an injected [`Scheduler`](scheduler::Scheduler).
//!
//! [`Subject`]: subject::Subject
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Subscription`]: subscription::Subscription
//! [`Cancelable`]: subscription::Cancelable

pub mod bag;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod rc;
pub mod scheduler;
pub mod subject;
pub mod subscription;
#[cfg(test)]
pub mod test_scheduler;

// Re-export the prelude module
pub use prelude::*;

pub use crate::scheduler::{Duration, Instant};
