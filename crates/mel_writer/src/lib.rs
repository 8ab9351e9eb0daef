//! MEL script assembly for muscle force-vector glyphs.
//!
//! Turns parsed muscle records into the Maya MEL command stream that rebuilds
//! each muscle as a cylinder-plus-cone arrow, anchored at the muscle's origin,
//! pointed at its insertion, and sized by its measured force.

mod dimensions;
mod script;

pub use dimensions::*;
pub use script::*;
