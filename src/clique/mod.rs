mod bron_kerbosch;
#[cfg(test)]
mod exhaustive;
mod filter;
mod finder;

use std::collections::BTreeSet;

pub use bron_kerbosch::bron_kerbosch;
pub use filter::maximal_antichain;
pub use finder::{GroupFinder, GroupStats, OverlapGroups};

/// A set of vertex indices, iterated in ascending order
pub type Clique = BTreeSet<usize>;
