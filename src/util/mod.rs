//! Shared helpers: frame timing, unit scaling, and the bounding-sphere debug
//! wireframe.

pub mod frame_timing;
pub mod units;
pub mod wireframe;
