//! Base primitives shared by the axistick crates.
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod geom;
