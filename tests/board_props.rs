use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{Board, GameError, MAPS};

fn random_board(seed: u64) -> (Board, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(&MAPS[0]);
    board.place_randomly(&mut rng).unwrap();
    (board, rng)
}

fn fire_some(board: &mut Board, rng: &mut SmallRng, shots: usize) {
    for _ in 0..shots {
        if board.is_destroyed() {
            break;
        }
        let r = rng.random_range(0..board.layout().rows);
        let c = rng.random_range(0..board.layout().cols);
        let _ = board.fire(r, c);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sunk_flag_tracks_hit_count(seed in any::<u64>(), shots in 0..300usize) {
        let (mut board, mut rng) = random_board(seed);
        fire_some(&mut board, &mut rng, shots);
        for ship in board.fleet().ships() {
            prop_assert!(!ship.cells().is_empty());
            prop_assert_eq!(ship.sunk(), ship.hits().len() == ship.cells().len());
            prop_assert!(ship.hits().len() <= ship.cells().len());
        }
    }

    #[test]
    fn destroyed_means_every_ship_sunk(seed in any::<u64>(), shots in 0..400usize) {
        let (mut board, mut rng) = random_board(seed);
        fire_some(&mut board, &mut rng, shots);
        let all_sunk = board.fleet().ships().iter().all(|s| s.sunk());
        prop_assert_eq!(board.is_destroyed(), all_sunk);
    }

    #[test]
    fn duplicate_fire_leaves_the_board_unchanged(seed in any::<u64>(), shots in 1..100usize) {
        let (mut board, mut rng) = random_board(seed);
        fire_some(&mut board, &mut rng, shots);

        let layout = board.layout();
        let mut fired = None;
        'scan: for r in 0..layout.rows {
            for c in 0..layout.cols {
                if board.was_fired(r, c) {
                    fired = Some((r, c));
                    break 'scan;
                }
            }
        }
        // At least one of the attempted shots may have been a duplicate
        // already, but the first one always lands.
        let (r, c) = fired.unwrap();

        let taken = board.shots_taken();
        let autos = board.shots().auto_misses();
        let hits: usize = board.fleet().ships().iter().map(|s| s.hits().len()).sum();
        prop_assert_eq!(board.fire(r, c), Err(GameError::AlreadyFired));
        prop_assert_eq!(board.shots_taken(), taken);
        prop_assert_eq!(board.shots().auto_misses(), autos);
        let hits_after: usize = board.fleet().ships().iter().map(|s| s.hits().len()).sum();
        prop_assert_eq!(hits_after, hits);
    }

    #[test]
    fn shot_tally_never_counts_auto_misses(seed in any::<u64>(), shots in 0..400usize) {
        let (mut board, mut rng) = random_board(seed);
        let mut aimed = 0usize;
        for _ in 0..shots {
            if board.is_destroyed() {
                break;
            }
            let r = rng.random_range(0..board.layout().rows);
            let c = rng.random_range(0..board.layout().cols);
            if board.fire(r, c).is_ok() {
                aimed += 1;
            }
        }
        prop_assert_eq!(board.shots_taken(), aimed);
    }
}
