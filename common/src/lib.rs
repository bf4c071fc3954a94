//! Shared model and state machines for the SegmentFlow app.
//!
//! Everything here is free of browser dependencies so the frontend can stay a
//! thin Yew layer and the logic can be unit-tested natively.

pub mod collection;
pub mod composer;
pub mod config;
pub mod model;
pub mod pipeline;
pub mod selector;
