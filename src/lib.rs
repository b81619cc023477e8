//! Finds chains of named cube algorithms that, applied one after another,
//! return the cube to a solved state.

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

pub mod catalog;
pub mod cube;
pub mod diff;
pub mod r#move;
pub mod prelude;
pub mod report;
pub mod search;
