// Whole-board scenarios driven through the text format.

use conway::{Grid, GridError};

fn board(text: &str) -> Grid {
    text.parse().expect("valid board")
}

#[test]
fn corner_pair_board_neighbors_and_next_generation() {
    let grid = board("0 1 1\n1 0 0\n0 0 0\n");

    assert_eq!(grid.number_of_neighbors(0, 0), 2);
    assert_eq!(grid.number_of_neighbors(1, 1), 3);

    let next = grid.next_generation();
    assert_eq!(next.to_string(), "0 1 0\n0 1 0\n0 0 0\n");
    // Source board is untouched.
    assert_eq!(grid.to_string(), "0 1 1\n1 0 0\n0 0 0\n");
}

#[test]
fn blinker_oscillates() {
    let horizontal = board("0 0 0\n1 1 1\n0 0 0\n");
    let vertical = horizontal.next_generation();
    assert_eq!(vertical.to_string(), "0 1 0\n0 1 0\n0 1 0\n");
    assert_eq!(vertical.next_generation(), horizontal);
}

#[test]
fn block_is_still_life() {
    let block = board("0 0 0 0\n0 1 1 0\n0 1 1 0\n0 0 0 0\n");
    assert_eq!(block.next_generation(), block);
}

#[test]
fn ragged_board_uses_per_row_bounds() {
    let grid = board("0 1 1\n1 0 0 1 1\n0 0 0\n1 1\n");
    assert_eq!(grid.shape(), vec![3, 5, 3, 2]);

    assert!(grid.within_bounds(1, 4));
    for row in [0, 2, 3] {
        assert!(!grid.within_bounds(row, 4));
        assert_eq!(grid.is_alive(row, 4), Err(GridError::OutOfBounds { row, col: 4 }));
    }

    // (0,3) does not exist but its neighbors in rows 0 and 1 do.
    assert_eq!(grid.number_of_neighbors(0, 3), 3);
    // (2,3) sees (1,3) and (1,4) above; row 3 is too short to contribute.
    assert_eq!(grid.number_of_neighbors(2, 3), 2);

    let next = grid.next_generation();
    assert_eq!(next.shape(), vec![3, 5, 3, 2]);
    assert_eq!(next.to_string(), "0 1 1\n0 1 1 1 0\n1 1 0\n0 0\n");
}

#[test]
fn out_of_bounds_contract() {
    let grid = board("0 1 0\n1 0 0\n0 0 1\n");
    let rows = grid.row_count() as isize;
    let first_len = grid.row_len(0).unwrap() as isize;

    for (row, col) in [(-1, 0), (rows, 0), (0, first_len)] {
        assert_eq!(grid.is_alive(row, col), Err(GridError::OutOfBounds { row, col }));
        assert!(!grid.within_bounds(row, col));
    }
}

#[test]
fn out_of_bounds_error_message_names_coordinate() {
    let grid = board("1\n");
    let err = grid.is_alive(3, -2).unwrap_err();
    assert_eq!(err.to_string(), "out of bounds index: (3,-2)");
}
