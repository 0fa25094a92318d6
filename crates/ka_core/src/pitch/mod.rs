pub mod geometry;
pub mod layout;

pub use geometry::{Point, Rect};
pub use layout::SlotLayout;
