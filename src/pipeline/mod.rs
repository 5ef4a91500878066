//! Match pipeline: selectors, the runner and its observers

pub mod matches;
pub mod observers;
pub mod selectors;

pub use matches::{MatchResult, MatchRunner};
pub use observers::{ProgressObserver, TraceObserver};
pub use selectors::{RandomSelector, SearchSelector};

pub use crate::ports::{MoveSelector, Observer};
