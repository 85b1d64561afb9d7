mod intersection;

pub use intersection::IntersectionGraph;
