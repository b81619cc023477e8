use crate::prelude::*;

use serde::Deserialize;
use std::{collections::HashMap, path::Path};
use thiserror::Error;

/// One entry of the catalog file, before its moves are parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(rename = "fwd")]
    pub forward: String,
    #[serde(rename = "rev")]
    pub reverse: String,
    #[serde(rename = "fmt")]
    pub display: String,
    #[serde(default)]
    pub variants: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    algorithms: Vec<Record>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog")]
    Json(#[from] serde_json::Error),
    #[error("bad moves in {name}")]
    Moves {
        name: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("unrecognized variant {variant:?} of {name}")]
    Variant { name: String, variant: String },
    #[error("{name} is defined more than once")]
    Duplicate { name: String },
    #[error("algorithm with an empty name")]
    EmptyName,
}

/// A sequence whose forward and reverse moves don't cancel out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sequence {name} did not return the cube to a solved state")]
pub struct SelfTestFailure {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Sequence {
    name: String,
    forward: Vec<Move>,
    reverse: Vec<Move>,
    display: String,
    forward_diff: Diff,
    reverse_diff: Diff,
}

impl Sequence {
    pub fn compile(name: String, forward: Vec<Move>, reverse: Vec<Move>, display: String) -> Self {
        let forward_diff = Diff::compile(&forward);
        let reverse_diff = Diff::compile(&reverse);
        Sequence {
            name,
            forward,
            reverse,
            display,
            forward_diff,
            reverse_diff,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sequences sharing a first letter ('Ra', 'Rb') never appear together
    /// in a chain.
    pub fn family(&self) -> char {
        self.name.chars().next().unwrap_or_default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn forward(&self) -> &[Move] {
        &self.forward
    }

    pub fn reverse(&self) -> &[Move] {
        &self.reverse
    }

    pub fn apply(&self, cube: &Facelets) -> Facelets {
        self.forward_diff.apply(cube)
    }

    pub fn undo(&self, cube: &Facelets) -> Facelets {
        self.reverse_diff.apply(cube)
    }

    pub fn self_test(&self) -> bool {
        if self.forward.is_empty() || self.reverse.is_empty() {
            return false;
        }

        let solved = Facelets::solved();
        self.undo(&self.apply(&solved)) == solved
    }

    fn with_variant(&self, setup: Move) -> Sequence {
        let prefix = setup.notation();
        Sequence::compile(
            format!("{}+{}", prefix, self.name),
            std::iter::once(setup)
                .chain(self.forward.iter().copied())
                .collect(),
            self.reverse
                .iter()
                .copied()
                .chain(std::iter::once(setup.reverse()))
                .collect(),
            format!("{} {}", prefix, self.display),
        )
    }
}

/// Compiled, self-tested sequences, kept in load order.
#[derive(Debug, Default)]
pub struct Catalog {
    sequences: Vec<Sequence>,
    by_name: HashMap<String, usize>,
    rejected: Vec<SelfTestFailure>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Catalog, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_records(file.algorithms)
    }

    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::default();

        for record in records {
            if record.name.is_empty() {
                return Err(CatalogError::EmptyName);
            }

            let moves = |s: &str| {
                Move::parse_sequence(s).map_err(|source| CatalogError::Moves {
                    name: record.name.clone(),
                    source,
                })
            };
            let base = Sequence::compile(
                record.name.clone(),
                moves(&record.forward)?,
                moves(&record.reverse)?,
                record.display.clone(),
            );

            let variants = record
                .variants
                .iter()
                .map(|v| parse_variant(&record.name, v).map(|setup| base.with_variant(setup)))
                .collect::<Result<Vec<_>, _>>()?;

            log::debug!("Parsed sequence {:<2}: {}", base.name, base.display);
            catalog.insert(base)?;
            for v in variants {
                catalog.insert(v)?;
            }
        }

        Ok(catalog)
    }

    fn insert(&mut self, sequence: Sequence) -> Result<(), CatalogError> {
        if self.by_name.contains_key(&sequence.name)
            || self.rejected.iter().any(|r| r.name == sequence.name)
        {
            return Err(CatalogError::Duplicate {
                name: sequence.name,
            });
        }

        if !sequence.self_test() {
            let failure = SelfTestFailure {
                name: sequence.name,
            };
            log::error!("{}", failure);
            self.rejected.push(failure);
            return Ok(());
        }

        self.by_name
            .insert(sequence.name.clone(), self.sequences.len());
        self.sequences.push(sequence);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Sequence> {
        self.index_of(name).map(|i| &self.sequences[i])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sequences.iter().map(|s| s.name())
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Entries dropped because they failed their self-test.
    pub fn rejected(&self) -> &[SelfTestFailure] {
        &self.rejected
    }

    pub fn apply(&self, name: &str, cube: &Facelets) -> Option<Facelets> {
        self.get(name).map(|s| s.apply(cube))
    }

    pub fn undo(&self, name: &str, cube: &Facelets) -> Option<Facelets> {
        self.get(name).map(|s| s.undo(cube))
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub(crate) fn at(&self, index: usize) -> &Sequence {
        &self.sequences[index]
    }
}

impl core::ops::Index<&str> for Catalog {
    type Output = Sequence;

    fn index(&self, name: &str) -> &Sequence {
        match self.get(name) {
            Some(s) => s,
            None => panic!("no sequence named {}", name),
        }
    }
}

/// A variant is a single setup turn, `U` or `Ui`.
fn parse_variant(name: &str, variant: &str) -> Result<Move, CatalogError> {
    variant.parse().map_err(|_| CatalogError::Variant {
        name: name.to_string(),
        variant: variant.to_string(),
    })
}
