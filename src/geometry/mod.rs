mod rect;

pub use rect::{Point, Rectangle};
