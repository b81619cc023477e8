//! Renderings of found chains for people: a plain listing and Anki flash
//! cards.

use crate::prelude::*;

use rand::{seq::IteratorRandom, Rng};

fn display<'c>(catalog: &'c Catalog, name: &str) -> &'c str {
    catalog.get(name).map_or("", |s| s.display())
}

/// ```text
/// Ga -> T
/// Ga - R2 U R' U R' U' R U' R2 U' D R' U R D'
/// T  - R U R' U' R' F R2 U' R' U' R U R' F'
/// ```
pub fn text(chain: &[String], catalog: &Catalog) -> String {
    let steps = chain
        .iter()
        .map(|name| format!("{:<2} - {}\n", name, display(catalog, name)))
        .collect::<String>();
    format!("{}\n{}", chain.join(" -> "), steps)
}

/// One card per line, `front,back,tags`: the front hides the last sequence of
/// the chain, the back lists every step.
pub fn anki(chain: &[String], catalog: &Catalog) -> String {
    let front = chain[..chain.len().saturating_sub(1)].join(" -> ");
    let back = chain
        .iter()
        .map(|name| format!("<div>{}</div>", display(catalog, name)))
        .collect::<String>();
    format!("{} -> _,{},{}", front, back, chain.join(" "))
}

/// Whether `chain` uses any of `wanted`. Everything matches an empty list.
pub fn matches_search(chain: &[String], wanted: &[String]) -> bool {
    wanted.is_empty() || chain.iter().any(|name| wanted.contains(name))
}

/// Candidates that appear in none of `chains`, in candidate order.
pub fn unused<'n, 'r>(
    candidates: &[&'n str],
    chains: impl IntoIterator<Item = &'r Chain>,
) -> Vec<&'n str> {
    let used = chains
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect::<std::collections::HashSet<_>>();
    candidates
        .iter()
        .copied()
        .filter(|name| !used.contains(name))
        .collect()
}

pub fn pick_one<'r>(
    chains: impl IntoIterator<Item = &'r Chain>,
    rng: &mut impl Rng,
) -> Option<&'r Chain> {
    chains.into_iter().choose(rng)
}
