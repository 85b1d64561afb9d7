mod reader;

pub use reader::{parse_rectangles, read_rectangles};
