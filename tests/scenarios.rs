//! Fixed-board scenarios for the move contract.

use rand::{rngs::StdRng, SeedableRng};
use tilemerge::engine::{is_terminal, Direction, GameState, Grid, Position};

fn state(rows: Vec<Vec<u32>>) -> GameState {
    GameState::from_grid(Grid::from_rows(rows).expect("valid fixture"))
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x2048)
}

#[test]
fn pair_merges_towards_the_left_edge() {
    let mut s = state(vec![
        vec![2, 2, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    assert!(s.apply_move(Direction::Left, &mut rng()).unwrap());
    assert_eq!(s.grid().get(Position::new(0, 0)), 4);
    assert_eq!(s.grid().get(Position::new(0, 1)), 0);
    assert_eq!(s.score_last_move(), 4);
    assert_eq!(s.total_score(), 4);
    // Merge left one tile, the spawn added one back.
    assert_eq!(s.tiles_in_play(), 2);
}

#[test]
fn column_merges_at_the_farthest_position() {
    let mut s = state(vec![
        vec![2, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![2, 0, 0, 0],
    ]);

    assert!(s.apply_move(Direction::Down, &mut rng()).unwrap());
    assert_eq!(s.grid().get(Position::new(3, 0)), 4);
    assert_eq!(s.score_last_move(), 4);
    assert_eq!(s.total_score(), 4);
}

#[test]
fn packed_row_without_pairs_does_not_move() {
    let mut s = state(vec![
        vec![2, 4, 2, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    let before = s.clone();

    assert!(!s.apply_move(Direction::Left, &mut rng()).unwrap());
    assert_eq!(s, before);
    assert_eq!(s.grid().rows().next().unwrap(), &[2, 4, 2, 0]);
}

#[test]
fn locked_board_is_terminal_and_ends_the_game() {
    let rows = vec![
        vec![2, 4, 8, 16],
        vec![4, 8, 16, 32],
        vec![8, 16, 32, 64],
        vec![16, 32, 64, 128],
    ];
    let mut s = state(rows.clone());
    assert!(is_terminal(&s));

    assert!(!s.apply_move(Direction::Right, &mut rng()).unwrap());
    assert!(s.is_game_over());
    assert_eq!(s.grid(), &Grid::from_rows(rows).unwrap());
    assert_eq!(s.total_score(), 0);
    assert_eq!(s.tiles_in_play(), 16);
}

#[test]
fn full_board_with_a_pair_is_not_terminal() {
    let mut s = state(vec![
        vec![2, 4, 8, 16],
        vec![4, 8, 16, 32],
        vec![8, 16, 32, 64],
        vec![16, 32, 64, 64],
    ]);
    assert!(!is_terminal(&s));

    // The 64s merge and free a cell, so the game carries on.
    assert!(s.apply_move(Direction::Right, &mut rng()).unwrap());
    assert_eq!(s.grid().get(Position::new(3, 3)), 128);
    assert_eq!(s.score_last_move(), 128);
    assert!(!s.is_game_over());
}

#[test]
fn every_direction_moves_tiles_to_its_edge() {
    let cases = [
        (Direction::Up, Position::new(0, 1)),
        (Direction::Down, Position::new(2, 1)),
        (Direction::Left, Position::new(1, 0)),
        (Direction::Right, Position::new(1, 2)),
    ];
    for (dir, expected) in cases {
        let mut s = state(vec![vec![0, 0, 0], vec![0, 8, 0], vec![0, 0, 0]]);
        assert!(s.apply_move(dir, &mut rng()).unwrap(), "{dir:?}");
        assert_eq!(s.grid().get(expected), 8, "{dir:?}");
        let centre = s.grid().get(Position::new(1, 1));
        assert!(centre == 0 || centre == 2, "{dir:?}");
    }
}

#[test]
fn seeded_games_replay_identically() {
    let config = tilemerge::GameConfig::new(4).unwrap();
    let moves = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    let play = || {
        let mut rng = StdRng::seed_from_u64(77);
        let mut s = GameState::new(&config, &mut rng).unwrap();
        for dir in moves.iter().cycle().take(40) {
            s.apply_move(*dir, &mut rng).unwrap();
        }
        s
    };

    assert_eq!(play(), play());
}
