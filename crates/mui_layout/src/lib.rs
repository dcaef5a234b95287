//! mui Layout Managers
//!
//! Strategies that position the children of a container. Each strategy only
//! moves children; sizing them is the container's business.

pub mod container;
pub mod layout;

pub use container::Container;
pub use layout::{ColumnLayout, GridLayout, Layout, RowLayout, DEFAULT_SPACING};
pub use mui_core::{Point, Rect, Size};
