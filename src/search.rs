use crate::prelude::*;

use rand::{seq::SliceRandom, Rng};
use smallvec::SmallVec;
use std::{collections::BTreeSet, time::Instant};

/// Sequence names in the order they are applied.
pub type Chain = Vec<String>;

/// Distinct chains; the same names in another order are a different chain.
pub type ResultSet = BTreeSet<Chain>;

/// Depth-first search for chains of catalog sequences that solve a cube.
pub struct Search<'c> {
    catalog: &'c Catalog,
    max_depth: usize,
    early_exit: bool,
    deadline: Option<Instant>,
}

pub fn search<'n>(
    initial: &Facelets,
    catalog: &Catalog,
    candidates: impl IntoIterator<Item = &'n str>,
    max_depth: usize,
    early_exit: bool,
) -> ResultSet {
    Search::new(catalog)
        .max_depth(max_depth)
        .early_exit(early_exit)
        .run(initial, candidates)
}

impl<'c> Search<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Search {
            catalog,
            max_depth: 4,
            early_exit: false,
            deadline: None,
        }
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Stop the outermost loop once it has found anything. Deeper levels
    /// always run to completion, so this may still return several chains.
    pub fn early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Give up at `deadline`, returning what has been found so far.
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn run<'n>(
        &self,
        initial: &Facelets,
        candidates: impl IntoIterator<Item = &'n str>,
    ) -> ResultSet {
        let order = self.resolve(candidates);
        self.run_ordered(initial, &order)
    }

    /// Like `run`, but tries the first sequence of the chain in random order,
    /// so an early exit lands on a random chain.
    pub fn run_shuffled<'n>(
        &self,
        initial: &Facelets,
        candidates: impl IntoIterator<Item = &'n str>,
        rng: &mut impl Rng,
    ) -> ResultSet {
        let mut order = self.resolve(candidates);
        order.shuffle(rng);
        self.run_ordered(initial, &order)
    }

    fn resolve<'n>(&self, candidates: impl IntoIterator<Item = &'n str>) -> Vec<usize> {
        let mut order = Vec::new();
        for name in candidates {
            match self.catalog.index_of(name) {
                Some(i) if !order.contains(&i) => order.push(i),
                Some(_) => {}
                None => log::warn!("Ignoring unknown sequence {}", name),
            }
        }
        order
    }

    fn run_ordered(&self, initial: &Facelets, order: &[usize]) -> ResultSet {
        let mut found = ResultSet::new();
        if self.max_depth == 0 {
            return found;
        }

        let start = Instant::now();
        let mut cube = *initial;
        self.find_chains(
            &mut cube,
            &mut SmallVec::new(),
            order,
            self.early_exit,
            &mut found,
        );
        log::info!(
            "Found {} chains of up to {} sequences in {:?}",
            found.len(),
            self.max_depth,
            start.elapsed()
        );
        found
    }

    fn find_chains(
        &self,
        cube: &mut Facelets,
        chain: &mut SmallVec<[usize; 4]>,
        candidates: &[usize],
        early_exit: bool,
        found: &mut ResultSet,
    ) {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Pattern: {:<18} - {}", self.names(chain).join(", "), cube);
        }

        for (tried, &next) in candidates.iter().enumerate() {
            if self.deadline.map_or(false, |d| Instant::now() >= d) {
                log::debug!("Deadline passed, stopping with {} chains", found.len());
                return;
            }

            let sequence = self.catalog.at(next);
            if chain
                .iter()
                .any(|&c| self.catalog.at(c).family() == sequence.family())
            {
                continue;
            }

            *cube = sequence.apply(cube);
            chain.push(next);

            let stop = if is_solved(cube) {
                let names = self.names(chain);
                log::info!("Found pattern: {}", names.join(", "));
                found.insert(names);
                early_exit
            } else if chain.len() < self.max_depth {
                // Sequences skipped here may still fit deeper in the chain.
                let rest = candidates[tried + 1..]
                    .iter()
                    .chain(&candidates[..tried])
                    .copied()
                    .collect::<Vec<_>>();
                self.find_chains(cube, chain, &rest, false, found);
                early_exit && !found.is_empty()
            } else {
                false
            };

            chain.pop();
            *cube = sequence.undo(cube);

            if stop {
                return;
            }
        }
    }

    fn names(&self, chain: &[usize]) -> Chain {
        chain
            .iter()
            .map(|&i| self.catalog.at(i).name().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, SeedableRng};
    use std::time::Duration;

    fn chain(names: &[&str]) -> Chain {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn solves(catalog: &Catalog, chain: &Chain) -> bool {
        let cube = chain.iter().fold(Facelets::solved(), |cube, name| {
            catalog.apply(name, &cube).unwrap()
        });
        is_solved(&cube)
    }

    #[test]
    fn one_algorithm_cannot_solve() {
        let catalog = catalog_of(&[("Ra", "R U Ri Ui")]);
        let found = search(&Facelets::solved(), &catalog, catalog.names(), 1, false);
        assert!(found.is_empty());
    }

    #[test]
    fn tipping_the_cube_over_does_not_solve() {
        let catalog = catalog_of(&[("Xx", "X"), ("Zz", "Z")]);
        let found = search(&Facelets::solved(), &catalog, catalog.names(), 1, false);
        assert!(found.is_empty());
    }

    #[test]
    fn same_family_never_combines() {
        let catalog = catalog_of(&[("Aa", "R U"), ("Ab", "Ui Ri")]);
        let found = search(&Facelets::solved(), &catalog, catalog.names(), 2, false);
        assert!(found.is_empty());
    }

    #[test]
    fn inverses_from_different_families_solve_in_both_orders() {
        let catalog = catalog_of(&[("Xx", "R U"), ("Zz", "Ui Ri")]);
        let found = search(&Facelets::solved(), &catalog, catalog.names(), 2, false);

        assert!(found.contains(&chain(&["Xx", "Zz"])));
        // U' R' R U is also the identity.
        assert!(found.contains(&chain(&["Zz", "Xx"])));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn order_matters() {
        // R then R' U leaves U, which counts as solved; R' U then R doesn't.
        let catalog = catalog_of(&[("Aa", "R"), ("Bb", "Ri U")]);
        let found = search(&Facelets::solved(), &catalog, catalog.names(), 2, false);
        assert_eq!(found, ResultSet::from([chain(&["Aa", "Bb"])]));
    }

    #[test]
    fn skipped_sequences_are_retried_deeper() {
        // Bb comes before Aa at the top level, yet is still offered after Aa.
        let catalog = catalog_of(&[("Aa", "R U"), ("Bb", "Ui Ri")]);
        let found = search(&Facelets::solved(), &catalog, ["Bb", "Aa"], 2, false);
        assert!(found.contains(&chain(&["Aa", "Bb"])));
    }

    #[test]
    fn depth_bound() {
        let catalog = catalog_of(&[("Aa", "R"), ("Bb", "R"), ("Cc", "R"), ("Dd", "R")]);
        for depth in 0..=4 {
            let found = search(&Facelets::solved(), &catalog, catalog.names(), depth, false);
            assert_eq!(found.is_empty(), depth < 4, "depth {}", depth);
            assert!(found.iter().all(|c| !c.is_empty() && c.len() <= depth));
        }
    }

    #[test]
    fn early_exit_keeps_deeper_levels_exhaustive() {
        let catalog = catalog_of(&[("Aa", "R"), ("Bb", "Ri"), ("Cc", "R R R")]);
        let found = Search::new(&catalog)
            .max_depth(2)
            .early_exit(true)
            .run(&Facelets::solved(), catalog.names());

        assert_eq!(
            found,
            ResultSet::from([chain(&["Aa", "Bb"]), chain(&["Aa", "Cc"])])
        );
    }

    #[test]
    fn early_exit_returns_immediately_on_a_direct_solve() {
        let catalog = catalog_of(&[("Aa", "U"), ("Bb", "Y")]);
        let found = Search::new(&catalog)
            .max_depth(2)
            .early_exit(true)
            .run(&Facelets::solved(), catalog.names());
        assert_eq!(found, ResultSet::from([chain(&["Aa"])]));
    }

    #[test]
    fn unknown_and_repeated_candidates_are_ignored() {
        let catalog = catalog_of(&[("Xx", "R U"), ("Zz", "Ui Ri")]);
        let found = search(
            &Facelets::solved(),
            &catalog,
            ["Xx", "Nope", "Xx", "Zz"],
            2,
            false,
        );
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn starts_from_the_given_state() {
        let catalog = catalog_of(&[("Xx", "R U")]);
        let found = search(&cube_with_moves("Ui Ri"), &catalog, catalog.names(), 1, false);
        assert_eq!(found, ResultSet::from([chain(&["Xx"])]));
    }

    #[test]
    fn passed_deadline_returns_partial_results() {
        let catalog = catalog_of(&[("Xx", "R U"), ("Zz", "Ui Ri")]);
        let found = Search::new(&catalog)
            .max_depth(2)
            .deadline(Instant::now() - Duration::from_millis(1))
            .run(&Facelets::solved(), catalog.names());
        assert!(found.is_empty());
    }

    #[test]
    fn shuffled_search_is_seeded() {
        let catalog = shipped_catalog();
        let run = |seed| {
            Search::new(&catalog)
                .max_depth(2)
                .early_exit(true)
                .run_shuffled(
                    &Facelets::solved(),
                    catalog.names(),
                    &mut StdRng::seed_from_u64(seed),
                )
        };
        let found = run(7);
        assert!(!found.is_empty());
        assert_eq!(found, run(7));
    }

    #[test]
    fn shipped_catalog_chains() {
        let catalog = shipped_catalog();
        let found = search(&Facelets::solved(), &catalog, catalog.names(), 2, false);
        assert!(!found.is_empty());

        for c in &found {
            assert!((1..=2).contains(&c.len()));
            let mut families = c.iter().map(|n| catalog[n.as_str()].family()).collect::<Vec<_>>();
            families.sort();
            families.dedup();
            assert_eq!(families.len(), c.len(), "{:?}", c);
            assert!(solves(&catalog, c), "{:?}", c);
        }

        assert!(found.contains(&chain(&["U+T", "T"])));
        assert!(found.contains(&chain(&["U'+Aa", "Ab"])));
        assert!(found.contains(&chain(&["Rb", "U+Rb"])));
        assert_eq!(found.len(), 19);

        assert_eq!(
            found,
            search(&Facelets::solved(), &catalog, catalog.names(), 2, false)
        );
    }
}
