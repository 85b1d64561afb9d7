pub mod cli;
pub mod clique;
pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod input;
pub mod output;

pub use cli::{CliArgs, Command, CommonArgs, PivotRule};
pub use clique::{Clique, GroupFinder, GroupStats, OverlapGroups};
pub use error::RectCliqueError;
pub use geometry::Rectangle;
pub use graph::IntersectionGraph;
