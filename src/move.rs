use std::fmt;

/// A quarter turn of one layer of the cube, or of the whole cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub layer: Layer,
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum Layer {
    Right,
    Left,
    Up,
    Down,
    Front,
    Back,
    // Slices, turning like L, D and F respectively.
    Middle,
    Equator,
    Standing,
    // Whole cube, turning like R, U and F respectively.
    X,
    Y,
    Z,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum Direction {
    Single,
    Reverse,
}

impl Move {
    pub fn all() -> impl Iterator<Item = Move> {
        enum_iterator::all::<Layer>().flat_map(|layer| {
            enum_iterator::all::<Direction>().map(move |direction| Move { layer, direction })
        })
    }

    /// Parses a normalized move string: whitespace separated tokens, each a
    /// layer letter optionally followed by `i`. Doubles are spelled `R R`.
    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }

    pub fn reverse(self) -> Move {
        Move {
            layer: self.layer,
            direction: match self.direction {
                Direction::Single => Direction::Reverse,
                Direction::Reverse => Direction::Single,
            },
        }
    }

    pub fn inverse_seq(moves: &[Move]) -> Vec<Move> {
        moves.iter().rev().map(|m| m.reverse()).collect()
    }

    /// Human notation, `U` or `U'`.
    pub fn notation(&self) -> String {
        match self.direction {
            Direction::Single => self.layer.letter().to_string(),
            Direction::Reverse => format!("{}'", self.layer.letter()),
        }
    }
}

impl Layer {
    pub fn letter(&self) -> char {
        match self {
            Layer::Right => 'R',
            Layer::Left => 'L',
            Layer::Up => 'U',
            Layer::Down => 'D',
            Layer::Front => 'F',
            Layer::Back => 'B',
            Layer::Middle => 'M',
            Layer::Equator => 'E',
            Layer::Standing => 'S',
            Layer::X => 'X',
            Layer::Y => 'Y',
            Layer::Z => 'Z',
        }
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let layer_char = match chars.next() {
            Some(c) => c,
            None => return Err(anyhow::anyhow!("No layer for move")),
        };

        let layer = match layer_char {
            'R' => Layer::Right,
            'L' => Layer::Left,
            'U' => Layer::Up,
            'D' => Layer::Down,
            'F' => Layer::Front,
            'B' => Layer::Back,
            'M' => Layer::Middle,
            'E' => Layer::Equator,
            'S' => Layer::Standing,
            'X' => Layer::X,
            'Y' => Layer::Y,
            'Z' => Layer::Z,
            _ => return Err(anyhow::anyhow!("Unrecognized layer {} in {:?}", layer_char, s)),
        };

        let direction = match chars.next() {
            None => Direction::Single,
            Some('i') => Direction::Reverse,
            Some(c @ ('\'' | '2')) => {
                return Err(anyhow::anyhow!(
                    "Move {:?} is not normalized: write {} as repeated or `i` moves",
                    s,
                    c
                ))
            }
            Some(c) => return Err(anyhow::anyhow!("Unrecognized direction {} in {:?}", c, s)),
        };

        if let Some(c) = chars.next() {
            return Err(anyhow::anyhow!("Trailing {} in move {:?}", c, s));
        }

        Ok(Move { layer, direction })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.direction {
            Direction::Single => write!(f, "{}", self.layer.letter()),
            Direction::Reverse => write!(f, "{}i", self.layer.letter()),
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Move {
        let all = Move::all().collect::<Vec<_>>();
        all[<usize as quickcheck::Arbitrary>::arbitrary(g) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_normalized_tokens() {
        let moves = Move::parse_sequence("R Ui  M Xi").unwrap();
        assert_eq!(
            moves,
            vec![
                Move {
                    layer: Layer::Right,
                    direction: Direction::Single
                },
                Move {
                    layer: Layer::Up,
                    direction: Direction::Reverse
                },
                Move {
                    layer: Layer::Middle,
                    direction: Direction::Single
                },
                Move {
                    layer: Layer::X,
                    direction: Direction::Reverse
                },
            ]
        );
    }

    #[test]
    fn rejects_prime_and_double() {
        assert!("R'".parse::<Move>().is_err());
        assert!("R2".parse::<Move>().is_err());
        assert!("[R".parse::<Move>().is_err());
        assert!("r".parse::<Move>().is_err());
        assert!("Rii".parse::<Move>().is_err());
    }

    #[test]
    fn empty_string_is_empty_sequence() {
        assert!(Move::parse_sequence("  ").unwrap().is_empty());
    }

    #[test]
    fn display_round_trips() {
        for m in Move::all() {
            assert_eq!(m.to_string().parse::<Move>().unwrap(), m);
        }
    }

    #[test]
    fn inverse_seq_reverses_and_inverts() {
        let moves = Move::parse_sequence("R U Fi").unwrap();
        assert_eq!(
            Move::inverse_seq(&moves),
            Move::parse_sequence("F Ui Ri").unwrap()
        );
    }

    #[test]
    fn notation() {
        assert_eq!("U".parse::<Move>().unwrap().notation(), "U");
        assert_eq!("Ui".parse::<Move>().unwrap().notation(), "U'");
    }

    #[test]
    fn all_moves() {
        assert_eq!(Move::all().count(), 24);
    }
}
