//! Animation system for FingerPick

mod animation;

pub use animation::*;
