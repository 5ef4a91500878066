//! Trait boundaries between the match runner and the things it drives.

pub mod observer;
pub mod selector;

pub use observer::Observer;
pub use selector::MoveSelector;
