//! Core of a radial ("pie-wheel") touch control: circle geometry with
//! correct wrap-around at the 0°/360° seam, sector layout generation, and a
//! multi-touch gesture engine that turns raw contact events into per-sector
//! activation decisions.
//!
//! Rendering, windowing, and output devices belong to the embedding; this
//! crate only does the math and the bookkeeping and hands back point
//! sequences and events.

pub mod geometry;
pub mod layout;
pub mod touch;

pub use geometry::Point;
pub use layout::{DEFAULT_TOP_ANGLE, Layout, LayoutError, Sector};
pub use touch::{ContactId, SectorEvent, TouchTracker};
