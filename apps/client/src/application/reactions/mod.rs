pub mod controller;
mod sequencer;

pub use controller::{ReactionController, SyncOutcome};
