use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Where the mines are on a board, independent of any play state.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Empty layout of the given `(rows, cols)` size.
    pub fn empty(size: Coord2) -> Self {
        Self {
            mine_mask: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    /// Builds a layout from explicit mine positions; duplicates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Option<Self> {
        let mut layout = Self::empty(size);
        for &coords in mine_coords {
            layout.validate_coords(coords)?;
            layout.insert(coords);
        }
        Some(layout)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Option<Coord2> {
        let (rows, cols) = self.size();
        (coords.0 < rows && coords.1 < cols).then_some(coords)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    /// Positions of every mine in row-major order.
    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub(crate) fn insert(&mut self, coords: Coord2) {
        let slot = &mut self.mine_mask[coords.to_nd_index()];
        if !*slot {
            *slot = true;
            self.mine_count += 1;
        }
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}
