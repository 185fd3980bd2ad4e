use super::*;

fn rows(grid: &Grid) -> Vec<String> {
    (0..grid.height()).map(|y| grid.row(y).iter().collect()).collect()
}

#[test]
fn pad_right_pads_ragged_rows() {
    let grid = Grid::pad("ab\na\nabcd");
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 3);
    assert_eq!(rows(&grid), vec!["ab  ", "a   ", "abcd"]);
}

#[test]
fn pad_is_idempotent_on_rectangular_input() {
    let first = Grid::pad("ab\ncd e\nf");
    let rejoined = rows(&first).join("\n");
    let second = Grid::pad(&rejoined);
    assert_eq!(first, second);
}

#[test]
fn pad_preserves_trailing_empty_row() {
    let grid = Grid::pad("ab\n");
    assert_eq!(grid.height(), 2);
    assert_eq!(rows(&grid), vec!["ab", "  "]);
}

#[test]
fn pad_empty_input_is_one_empty_row() {
    let grid = Grid::pad("");
    assert_eq!(grid.height(), 1);
    assert_eq!(grid.width(), 0);
}

#[test]
fn transpose_swaps_axes() {
    let grid = Grid::pad("ab\ncd\nef");
    let columns = grid.transpose();
    assert_eq!(columns.width(), 3);
    assert_eq!(columns.height(), 2);
    assert_eq!(rows(&columns), vec!["ace", "bdf"]);
}

#[test]
fn transpose_row_is_original_column() {
    let grid = Grid::pad("+-\n| ");
    let columns = grid.transpose();
    assert_eq!(columns.at(1, 0), grid.at(0, 1));
    assert_eq!(columns.row(0), ['+', '|']);
}
