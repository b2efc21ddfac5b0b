use std::fmt::Write;

use crate::generator::DEAD;
use crate::grid::Grid;

/// Formats the compact numbered grid row-major, each value right-justified to
/// a fixed width.
pub fn render_numbered(grid: &Grid) -> String {
    let mut out = String::new();
    for x in 0..grid.rows() {
        for y in 0..grid.cols() {
            let _ = write!(out, "{:>8}", grid[(x, y)]);
        }
        out.push('\n');
    }
    out
}

/// Formats the visitation sequence as a flat list of 1-based `col,row` pairs.
pub fn render_order(order: &[(u16, u16)]) -> String {
    let mut out = String::new();
    for &(row, col) in order {
        let _ = write!(out, "{},{} ", col + 1, row + 1);
    }
    out
}

/// Formats the full double-resolution guide grid for debugging.
///
/// Dead slots render blank, as do wall remnants surrounded by nothing but
/// dead space; everything else prints bracketed. Rows are double-spaced so
/// the maze shape survives terminal line height.
pub fn render_guide(guide: &Grid) -> String {
    let rows = guide.rows();
    let cols = guide.cols();
    let mut out = String::new();
    for x in 0..rows {
        for y in 0..cols {
            let value = guide[(x, y)];
            let boundary = x == 0 || x == rows - 1 || y == 0 || y == cols - 1;
            let visible = value >= 0
                || (value != DEAD
                    && (boundary
                        || guide[(x, y - 1)] != DEAD
                        || guide[(x, y + 1)] != DEAD
                        || guide[(x + 1, y)] != DEAD
                        || guide[(x - 1, y)] != DEAD));
            if visible {
                let _ = write!(out, "[{}]\t", value);
            } else {
                out.push('\t');
            }
        }
        out.push_str("\n\n");
    }
    out
}
