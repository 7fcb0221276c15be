//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

// Slot allocator
pub use crate::bag::{Bag, Key};
// Core traits
pub use crate::observable::{Observable, ObservableExt, ObservableType};
// Observer trait and adapters
pub use crate::observer::{BoxedObserver, FnMutObserver, Observer};
// Operators
pub use crate::ops::{
  combine_latest::CombineLatestOp, delay::DelayOp, filter::FilterOp, map::MapOp, merge::MergeOp,
};
// Pointer wrappers
pub use crate::rc::{MutRc, RcDeref, RcDerefMut, WeakRc};
// Scheduler capability
pub use crate::scheduler::{Duration, Instant, Priority, Scheduler};
// Subject
pub use crate::subject::{Subject, SubjectSubscription};
// Subscription handles
pub use crate::subscription::{Cancelable, Subscription, TupleSubscription};
