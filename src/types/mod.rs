//! Configuration and data types shared by the layout engine and its callers.

mod data_cfg;
mod geometry;
mod options;
mod view_meta;

pub use data_cfg::*;
pub use geometry::*;
pub use options::*;
pub use view_meta::*;
