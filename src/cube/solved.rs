use crate::prelude::*;

/// A cube counts as solved when the up and down faces show their own colors
/// and every three-facelet row of the side band is a single side color. Which
/// side color sits in which row does not matter, so solved cubes turned about
/// the up/down axis (or with the top layer misaligned) still count.
pub fn is_solved(cube: &Facelets) -> bool {
    let tokens = cube.tokens();
    let (up, rest) = tokens.split_at(9);
    let (band, down) = rest.split_at(36);

    painted(up, Face::Up.color())
        && painted(down, Face::Down.color())
        && band.chunks(3).all(|row| {
            [Face::Left, Face::Front, Face::Right, Face::Back]
                .iter()
                .any(|side| painted(row, side.color()))
        })
}

fn painted(tokens: &[char], color: char) -> bool {
    tokens.iter().all(|&t| t == color)
}
