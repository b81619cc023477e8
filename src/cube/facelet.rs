use crate::prelude::*;

use std::collections::HashMap;

/// Where a facelet sits in space: the cubie it belongs to and the direction it
/// faces. Coordinates are in `-1..=1`, with x to the right, y up, and z
/// towards the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub cubie: [i8; 3],
    pub normal: [i8; 3],
}

#[derive(Clone, Copy)]
enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Location {
    pub fn of(index: usize) -> Location {
        assert!(index < FACELETS);
        let at = |v: usize| v as i8 - 1;

        match index {
            0..=8 => Location {
                cubie: [at(index % 3), 1, at(index / 3)],
                normal: [0, 1, 0],
            },
            45..=53 => {
                let i = index - 45;
                Location {
                    cubie: [at(i % 3), -1, -at(i / 3)],
                    normal: [0, -1, 0],
                }
            }
            _ => {
                let i = index - 9;
                let (row, face, col) = (i / 12, (i % 12) / 3, i % 3);
                let y = -at(row);
                match face {
                    0 => Location {
                        cubie: [-1, y, at(col)],
                        normal: [-1, 0, 0],
                    },
                    1 => Location {
                        cubie: [at(col), y, 1],
                        normal: [0, 0, 1],
                    },
                    2 => Location {
                        cubie: [1, y, -at(col)],
                        normal: [1, 0, 0],
                    },
                    _ => Location {
                        cubie: [-at(col), y, -1],
                        normal: [0, 0, -1],
                    },
                }
            }
        }
    }

    pub fn index(&self) -> usize {
        let [x, y, z] = self.cubie;
        let at = |v: i8| (v + 1) as usize;
        let row = at(-y);

        match self.normal {
            [0, 1, 0] => at(z) * 3 + at(x),
            [0, -1, 0] => 45 + at(-z) * 3 + at(x),
            [-1, 0, 0] => 9 + row * 12 + at(z),
            [0, 0, 1] => 9 + row * 12 + 3 + at(x),
            [1, 0, 0] => 9 + row * 12 + 6 + at(-z),
            [0, 0, -1] => 9 + row * 12 + 9 + at(-x),
            n => unreachable!("not a face normal: {:?}", n),
        }
    }

    pub fn face(&self) -> Face {
        match self.normal {
            [0, 1, 0] => Face::Up,
            [0, -1, 0] => Face::Down,
            [-1, 0, 0] => Face::Left,
            [0, 0, 1] => Face::Front,
            [1, 0, 0] => Face::Right,
            _ => Face::Back,
        }
    }

    // Clockwise as seen from the positive end of the axis.
    fn quarter(self, axis: Axis) -> Location {
        let turn = |[x, y, z]: [i8; 3]| match axis {
            Axis::X => [x, z, -y],
            Axis::Y => [-z, y, x],
            Axis::Z => [y, -x, z],
        };
        Location {
            cubie: turn(self.cubie),
            normal: turn(self.normal),
        }
    }
}

/// Axis, clockwise quarter turns about its positive end, and the slice that
/// moves (`None` for the whole cube).
fn geometry(layer: Layer) -> (Axis, usize, Option<i8>) {
    match layer {
        Layer::Right => (Axis::X, 1, Some(1)),
        Layer::Left => (Axis::X, 3, Some(-1)),
        Layer::Up => (Axis::Y, 1, Some(1)),
        Layer::Down => (Axis::Y, 3, Some(-1)),
        Layer::Front => (Axis::Z, 1, Some(1)),
        Layer::Back => (Axis::Z, 3, Some(-1)),
        Layer::Middle => (Axis::X, 3, Some(0)),
        Layer::Equator => (Axis::Y, 3, Some(0)),
        Layer::Standing => (Axis::Z, 1, Some(0)),
        Layer::X => (Axis::X, 1, None),
        Layer::Y => (Axis::Y, 1, None),
        Layer::Z => (Axis::Z, 1, None),
    }
}

fn build_permutation(move_: Move) -> [u8; FACELETS] {
    let (axis, quarters, slice) = geometry(move_.layer);
    let quarters = match move_.direction {
        Direction::Single => quarters,
        Direction::Reverse => 4 - quarters,
    };

    let mut perm = [0; FACELETS];
    for from in 0..FACELETS {
        let loc = Location::of(from);
        let to = match slice {
            Some(s) if loc.cubie[axis as usize] != s => from,
            _ => (0..quarters).fold(loc, |l, _| l.quarter(axis)).index(),
        };
        perm[to] = from as u8;
    }
    perm
}

lazy_static::lazy_static! {
    static ref MOVE_TABLE: HashMap<Move, [u8; FACELETS]> = {
        log::debug!("Building facelet move table");
        Move::all().map(|m| (m, build_permutation(m))).collect()
    };
}

/// Position `i` after `move_` takes the facelet at `permutation(move_)[i]`.
pub fn permutation(move_: Move) -> &'static [u8; FACELETS] {
    &MOVE_TABLE[&move_]
}
