use once_cell::sync::Lazy;

use super::Square;

pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

fn targets_for(deltas: &[(isize, isize)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|from| {
            deltas
                .iter()
                .filter_map(|&(dl, dc)| from.offset(dl, dc))
                .collect()
        })
        .collect()
}

/// On-board knight destinations, indexed by `Square::as_index`.
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| targets_for(&KNIGHT_DELTAS));

/// On-board king destinations, indexed by `Square::as_index`.
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| targets_for(&ALL_DIRECTIONS));
