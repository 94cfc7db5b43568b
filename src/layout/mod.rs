//! Header layout engine.
//!
//! This module handles:
//! - Building row/column header hierarchies from field configuration
//! - Assigning node coordinates (column width policy, frozen trailing columns)
//! - Mapping scroll offsets to visible index ranges
//! - Partitioning cells into frozen panes

pub mod build_header;
pub mod coordinate;
pub mod extents;
pub mod frozen;
pub mod hierarchy;
pub mod node;
pub mod viewport;

pub use build_header::{build_header_hierarchy, HeaderBuildParams, HeaderBuildResult};
pub use coordinate::{layout_col_hierarchy, layout_row_hierarchy, CoordinateContext, CoordinateHook};
pub use extents::{AxisExtents, IndexRange, PrefixExtents, UniformExtents};
pub use frozen::{
    calculate_frozen_corner_cells, classify, split_in_view_indexes_with_frozen, FrozenPanelIndexes,
    FrozenRegion,
};
pub use hierarchy::Hierarchy;
pub use node::{Node, NodeId};
pub use viewport::{calculate_in_view_indexes, PanelIndexes};
