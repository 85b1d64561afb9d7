use std::collections::BTreeSet;

use super::Clique;

/// Reduce candidate cliques to the inclusion-maximal ones.
///
/// Equal sets collapse to one entry and any set with a proper superset among
/// the candidates is dropped. Empty sets are never reported. The result lists
/// larger sets first, ties in lexicographic order, so it does not depend on
/// candidate order and applying the filter to its own output changes nothing.
pub fn maximal_antichain(candidates: impl IntoIterator<Item = Clique>) -> Vec<Clique> {
    let unique: BTreeSet<Clique> = candidates
        .into_iter()
        .filter(|clique| !clique.is_empty())
        .collect();

    let mut by_size: Vec<Clique> = unique.into_iter().collect();
    by_size.sort_by(|a, b| b.len().cmp(&a.len()));

    // Larger sets come first, so a superset of `clique` is always already
    // decided. If that superset was dropped, its own kept superset covers it.
    let mut kept: Vec<Clique> = Vec::with_capacity(by_size.len());
    for clique in by_size {
        let dominated = kept
            .iter()
            .any(|other| other.len() > clique.len() && clique.is_subset(other));
        if !dominated {
            kept.push(clique);
        }
    }

    kept
}
