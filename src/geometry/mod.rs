//! Map geometry: path parsing and region shapes
//!
//! Shapes are fixed, hand-authored canvas paths. There is no projection; the
//! only geometric operations are flattening, point-in-region tests and
//! interior sampling for filled drawing.

pub mod path;
pub mod region;

pub use path::{parse_path, SubPath};
pub use region::{RegionShape, FILL_STEP};
