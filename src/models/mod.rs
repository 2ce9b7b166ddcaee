//! Pure date/streak computation engine.
//!
//! Everything in this module is a stateless function of its inputs: a set of
//! completion dates and an explicit reference instant. No wall-clock reads,
//! no caching between calls.

pub mod calendar;
pub mod ranges;
pub mod streak;

pub use calendar::*;
pub use ranges::*;
pub use streak::*;
