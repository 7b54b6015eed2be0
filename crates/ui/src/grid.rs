//! Grid Layout
//!
//! Fixed rows × columns with uniform gutters. Children fill cells in
//! row-major order; the last row and column take the rounding remainder.

use smallvec::SmallVec;

use crate::geometry::Rect;

/// Row/column grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    rows: i32,
    cols: i32,
    row_spacing: i32,
    col_spacing: i32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            row_spacing: 0,
            col_spacing: 0,
        }
    }
}

/// Distance between the starts of two consecutive cells
fn stride(extent: i32, spacing: i32, count: i32) -> i32 {
    (extent - spacing * (count - 1)).div_euclid(count) + spacing
}

impl GridLayout {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::default().with_rows(rows).with_cols(cols)
    }

    pub fn with_rows(mut self, rows: i32) -> Self {
        self.set_row_count(rows);
        self
    }

    pub fn with_cols(mut self, cols: i32) -> Self {
        self.set_col_count(cols);
        self
    }

    pub fn with_spacing(mut self, row_spacing: i32, col_spacing: i32) -> Self {
        self.set_row_spacing(row_spacing);
        self.set_col_spacing(col_spacing);
        self
    }

    pub fn set_row_count(&mut self, rows: i32) {
        self.rows = rows.max(1);
    }

    pub fn set_col_count(&mut self, cols: i32) {
        self.cols = cols.max(1);
    }

    pub fn set_row_spacing(&mut self, spacing: i32) {
        self.row_spacing = spacing.max(0);
    }

    pub fn set_col_spacing(&mut self, spacing: i32) {
        self.col_spacing = spacing.max(0);
    }

    pub fn row_count(&self) -> i32 {
        self.rows
    }

    pub fn col_count(&self) -> i32 {
        self.cols
    }

    pub fn row_spacing(&self) -> i32 {
        self.row_spacing
    }

    pub fn col_spacing(&self) -> i32 {
        self.col_spacing
    }

    /// Rectangle of the cell holding child `index`
    pub fn cell_rect(&self, rect: Rect, index: usize) -> Rect {
        let stride_x = stride(rect.w, self.col_spacing, self.cols);
        let stride_y = stride(rect.h, self.row_spacing, self.rows);
        let last_w = rect.w - (self.cols - 1) * stride_x;
        let last_h = rect.h - (self.rows - 1) * stride_y;

        let col = index as i32 % self.cols;
        let row = index as i32 / self.cols;

        Rect::new(
            rect.x + col * stride_x,
            rect.y + row * stride_y,
            if col == self.cols - 1 { last_w } else { stride_x - self.col_spacing },
            if row == self.rows - 1 { last_h } else { stride_y - self.row_spacing },
        )
    }

    /// Cells for `count` children
    pub fn arrange(&self, rect: Rect, count: usize) -> SmallVec<[Rect; 16]> {
        (0..count).map(|i| self.cell_rect(rect, i)).collect()
    }

    /// Index of the child under `(x, y)`
    ///
    /// Gutters, empty trailing cells and points outside `rect` give `None`.
    pub fn child_at(&self, rect: Rect, child_count: usize, x: i32, y: i32) -> Option<usize> {
        if !rect.contains(x, y) {
            return None;
        }

        let col = cell_index(x - rect.x, stride(rect.w, self.col_spacing, self.cols), self.col_spacing, self.cols)?;
        let row = cell_index(y - rect.y, stride(rect.h, self.row_spacing, self.rows), self.row_spacing, self.rows)?;

        let index = (row * self.cols + col) as usize;
        (index < child_count).then_some(index)
    }
}

/// Row or column under a relative coordinate, `None` inside a gutter
///
/// The last cell extends to the far edge and has no gutter after it.
fn cell_index(relative: i32, stride: i32, spacing: i32, count: i32) -> Option<i32> {
    if stride <= 0 {
        return None;
    }
    let index = relative.div_euclid(stride).min(count - 1);
    let in_gutter = index < count - 1 && (index + 1) * stride - relative <= spacing;
    (!in_gutter).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_clamp_to_one() {
        let grid = GridLayout::new(0, -3).with_spacing(-2, -1);
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.col_count(), 1);
        assert_eq!(grid.row_spacing(), 0);
        assert_eq!(grid.col_spacing(), 0);
    }

    #[test]
    fn test_cells_with_spacing() {
        let grid = GridLayout::new(2, 3).with_spacing(4, 5);
        let rect = Rect::new(10, 20, 103, 50);

        // stride_x = (103 - 10) / 3 + 5 = 36, last column = 103 - 72 = 31
        // stride_y = (50 - 4) / 2 + 4 = 27, last row = 50 - 27 = 23
        assert_eq!(grid.cell_rect(rect, 0), Rect::new(10, 20, 31, 23));
        assert_eq!(grid.cell_rect(rect, 1), Rect::new(46, 20, 31, 23));
        assert_eq!(grid.cell_rect(rect, 2), Rect::new(82, 20, 31, 23));
        assert_eq!(grid.cell_rect(rect, 3), Rect::new(10, 47, 31, 23));
        assert_eq!(grid.cell_rect(rect, 5), Rect::new(82, 47, 31, 23));
    }

    #[test]
    fn test_conservation_per_axis() {
        for count in 1..=6 {
            for spacing in 0..=4 {
                let grid = GridLayout::new(count, count).with_spacing(spacing, spacing);
                for extent in 0..=120 {
                    let rect = Rect::new(3, 7, extent, extent);
                    let cells = grid.arrange(rect, (count * count) as usize);

                    let widths: i32 = (0..count).map(|c| cells[c as usize].w).sum();
                    let heights: i32 = (0..count).map(|r| cells[(r * count) as usize].h).sum();
                    assert_eq!(widths + spacing * (count - 1), extent);
                    assert_eq!(heights + spacing * (count - 1), extent);

                    // Last cell ends exactly on the container edge
                    let last = cells[cells.len() - 1];
                    assert_eq!(last.right(), rect.right());
                    assert_eq!(last.bottom(), rect.bottom());
                }
            }
        }
    }

    #[test]
    fn test_hit_cells_and_gutters() {
        let grid = GridLayout::new(3, 3).with_spacing(5, 5);
        let rect = Rect::new(0, 0, 100, 100);

        // stride 35, visible 30, last cell 30
        assert_eq!(grid.child_at(rect, 9, 0, 0), Some(0));
        assert_eq!(grid.child_at(rect, 9, 29, 29), Some(0));
        assert_eq!(grid.child_at(rect, 9, 30, 10), None);
        assert_eq!(grid.child_at(rect, 9, 34, 10), None);
        assert_eq!(grid.child_at(rect, 9, 35, 10), Some(1));
        assert_eq!(grid.child_at(rect, 9, 72, 40), Some(5));
        assert_eq!(grid.child_at(rect, 9, 99, 99), Some(8));
        assert_eq!(grid.child_at(rect, 9, 50, 67), None);
    }

    #[test]
    fn test_hit_sparse_grid() {
        let grid = GridLayout::new(2, 4);
        let rect = Rect::new(0, 0, 40, 20);

        assert_eq!(grid.child_at(rect, 5, 5, 15), Some(4));
        assert_eq!(grid.child_at(rect, 5, 15, 15), None);
        assert_eq!(grid.child_at(rect, 0, 5, 5), None);
    }

    #[test]
    fn test_last_column_remainder_is_hittable() {
        let grid = GridLayout::new(1, 3);
        let rect = Rect::new(0, 0, 10, 10);

        // stride 3, last column spans 6..10
        assert_eq!(grid.child_at(rect, 3, 8, 0), Some(2));
        assert_eq!(grid.child_at(rect, 3, 9, 0), Some(2));
    }

    #[test]
    fn test_hit_agrees_with_layout() {
        let configs = [
            (GridLayout::new(3, 3).with_spacing(5, 5), Rect::new(0, 0, 100, 100), 9),
            (GridLayout::new(2, 7).with_spacing(2, 3), Rect::new(11, 4, 97, 33), 14),
            (GridLayout::new(4, 2).with_spacing(0, 6), Rect::new(-5, 0, 41, 50), 6),
            (GridLayout::new(1, 5), Rect::new(0, 0, 17, 3), 5),
        ];

        for (grid, rect, count) in configs {
            let cells = grid.arrange(rect, count);
            for y in rect.y..rect.bottom() {
                for x in rect.x..rect.right() {
                    let expected = cells.iter().position(|c| c.contains(x, y));
                    assert_eq!(grid.child_at(rect, count, x, y), expected, "{:?} at ({}, {})", grid, x, y);
                }
            }
        }
    }

    #[test]
    fn test_container_smaller_than_spacing() {
        let grid = GridLayout::new(1, 4).with_spacing(0, 10);
        let rect = Rect::new(0, 0, 8, 8);
        // stride = floor(-22 / 4) + 10 = 4
        assert_eq!(grid.child_at(rect, 4, 0, 0), None);

        let grid = GridLayout::new(1, 4).with_spacing(0, 20);
        // stride = floor(-52 / 4) + 20 = 7; every non-last cell is gutter
        assert_eq!(grid.child_at(rect, 4, 1, 1), None);
    }
}
