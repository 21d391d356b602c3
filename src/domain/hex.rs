//! Odd-r offset hexagonal topology.
//!
//! Rows are stored rectangularly, but odd rows are drawn shifted half a cell
//! to the right. That shift means the six neighbors of a cell sit at
//! different column offsets depending on the parity of its row.

/// Neighbor offsets `(d_row, d_col)` for cells on even rows
pub const EVEN_ROW_OFFSETS: [(isize, isize); 6] =
    [(-1, -1), (-1, 0), (0, -1), (0, 1), (1, -1), (1, 0)];

/// Neighbor offsets `(d_row, d_col)` for cells on odd rows
pub const ODD_ROW_OFFSETS: [(isize, isize); 6] =
    [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0), (1, 1)];

/// Offsets of the six neighbors for a row of the given parity
pub const fn neighbor_offsets(is_odd_row: bool) -> &'static [(isize, isize); 6] {
    if is_odd_row {
        &ODD_ROW_OFFSETS
    } else {
        &EVEN_ROW_OFFSETS
    }
}

/// In-bounds neighbors of `(row, col)` on a `height` x `width` grid.
/// Yields up to six positions; fewer along edges and corners. No wrapping.
pub fn neighbor_positions(
    row: usize,
    col: usize,
    height: usize,
    width: usize,
) -> impl Iterator<Item = (usize, usize)> {
    neighbor_offsets(row % 2 == 1)
        .iter()
        .filter_map(move |&(d_row, d_col)| {
            let r = row.checked_add_signed(d_row)?;
            let c = col.checked_add_signed(d_col)?;
            (r < height && c < width).then_some((r, c))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(offsets: &[(isize, isize)]) -> HashSet<(isize, isize)> {
        offsets.iter().copied().collect()
    }

    #[test]
    fn test_even_row_offsets() {
        let expected = as_set(&[(-1, -1), (-1, 0), (0, -1), (0, 1), (1, -1), (1, 0)]);
        assert_eq!(as_set(neighbor_offsets(false)), expected);
    }

    #[test]
    fn test_odd_row_offsets() {
        let expected = as_set(&[(-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(as_set(neighbor_offsets(true)), expected);
    }

    #[test]
    fn test_interior_has_six_neighbors() {
        assert_eq!(neighbor_positions(2, 2, 5, 5).count(), 6);
        assert_eq!(neighbor_positions(3, 2, 5, 5).count(), 6);
    }

    #[test]
    fn test_even_row_interior_positions() {
        let found: HashSet<_> = neighbor_positions(2, 2, 5, 5).collect();
        let expected: HashSet<_> =
            [(1, 1), (1, 2), (2, 1), (2, 3), (3, 1), (3, 2)].into_iter().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_odd_row_interior_positions() {
        let found: HashSet<_> = neighbor_positions(1, 2, 5, 5).collect();
        let expected: HashSet<_> =
            [(0, 2), (0, 3), (1, 1), (1, 3), (2, 2), (2, 3)].into_iter().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_top_left_corner() {
        // Row 0 is even: only (0,1) and (1,0) are in bounds
        let found: HashSet<_> = neighbor_positions(0, 0, 5, 5).collect();
        let expected: HashSet<_> = [(0, 1), (1, 0)].into_iter().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_odd_row_right_edge() {
        // Row 1 is odd, last column: the shifted neighbors fall off the edge
        let found: HashSet<_> = neighbor_positions(1, 4, 5, 5).collect();
        let expected: HashSet<_> = [(0, 4), (1, 3), (2, 4)].into_iter().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        assert_eq!(neighbor_positions(0, 0, 1, 1).count(), 0);
    }
}
