//! Controller layer: roster intents, reducer-style state transitions, and
//! intent orchestration.

pub mod events;
pub mod orchestration;
