use crate::prelude::*;

use std::fmt;

mod facelet;
mod solved;

pub use facelet::{permutation, Location};
pub use solved::is_solved;

pub const FACELETS: usize = 54;

/// One symbol per facelet, used to trace where each position ends up.
pub const REFERENCE_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz01";

pub trait CubeLike: Sized + core::fmt::Debug + Eq {
    fn solved() -> Self;
    fn apply(self, move_: Move) -> Self;

    fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Self {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum Face {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

impl Face {
    /// Sticker color of this face in the playing alphabet.
    pub fn color(self) -> char {
        match self {
            Face::Up => 'O',
            Face::Left => 'Y',
            Face::Front => 'W',
            Face::Right => 'G',
            Face::Back => 'B',
            Face::Down => 'R',
        }
    }
}

/// Flattened cube surface: the up face, three rows running across the left,
/// front, right and back faces, then the down face.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facelets([char; FACELETS]);

impl Facelets {
    pub fn reference() -> Facelets {
        let mut symbols = REFERENCE_SYMBOLS.chars();
        Facelets(core::array::from_fn(|_| symbols.next().unwrap_or('?')))
    }

    pub fn tokens(&self) -> &[char; FACELETS] {
        &self.0
    }

    /// Position `i` of the result takes the token at `perm[i]`.
    pub fn permuted(&self, perm: &[u8; FACELETS]) -> Facelets {
        Facelets(core::array::from_fn(|i| self.0[perm[i] as usize]))
    }
}

impl CubeLike for Facelets {
    fn solved() -> Facelets {
        Facelets(core::array::from_fn(|i| Location::of(i).face().color()))
    }

    fn apply(self, move_: Move) -> Facelets {
        self.permuted(facelet::permutation(move_))
    }
}

impl core::ops::Index<usize> for Facelets {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.0[index]
    }
}

impl core::str::FromStr for Facelets {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Facelets> {
        let tokens = s.chars().collect::<Vec<_>>();
        let tokens: [char; FACELETS] = tokens.try_into().map_err(|t: Vec<char>| {
            anyhow::anyhow!("Expected {} facelets, got {}", FACELETS, t.len())
        })?;
        Ok(Facelets(tokens))
    }
}

impl fmt::Display for Facelets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl fmt::Debug for Facelets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Facelets({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "OOOOOOOOOYYYWWWGGGBBBYYYWWWGGGBBBYYYWWWGGGBBBRRRRRRRRR";

    #[test]
    fn solved_layout() {
        assert_eq!(Facelets::solved().to_string(), SOLVED);
    }

    #[test]
    fn solved_is_solved() {
        assert_eq!(Facelets::solved(), Facelets::solved());
        assert!(is_solved(&Facelets::solved()));
    }

    #[test]
    fn single_move_is_not_solved() {
        assert_ne!(cube_with_moves("F"), Facelets::solved());
        assert!(!is_solved(&cube_with_moves("F")));
    }

    #[test]
    fn reference_symbols_are_distinct() {
        let reference = Facelets::reference();
        let distinct = reference
            .tokens()
            .iter()
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(distinct.len(), FACELETS);
    }

    #[test]
    fn parse_state() {
        assert_eq!(SOLVED.parse::<Facelets>().unwrap(), Facelets::solved());
        assert!("OOO".parse::<Facelets>().is_err());
    }

    #[test]
    fn right_turn_lifts_front_column() {
        let cube = cube_with_moves("R");
        for i in [2, 5, 8] {
            assert_eq!(cube[i], Face::Front.color());
        }
        for i in [18, 30, 42] {
            assert_eq!(cube[i], Face::Up.color());
        }
    }

    #[test]
    fn up_turn_moves_front_row_left() {
        let cube = cube_with_moves("U");
        assert_eq!(&cube.tokens()[9..21], &"WWWGGGBBBYYY".chars().collect::<Vec<_>>()[..]);
    }

    #[quickcheck]
    fn inverse_restores(moves: Vec<Move>) -> bool {
        let scrambled = Facelets::solved().apply_all(moves.clone());
        scrambled.apply_all(Move::inverse_seq(&moves)) == Facelets::solved()
    }
}
