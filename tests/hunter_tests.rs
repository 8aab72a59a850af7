use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    hunt_step, Board, CancelToken, Catalog, Fleet, GameSession, HunterHandle, Placement,
    ShapeDef, MAPS,
};
use tokio::time::Duration;

fn shape(letter: char) -> &'static ShapeDef {
    Catalog::validated().unwrap().shape(letter).unwrap()
}

fn destroyer_board() -> Board {
    let layout = &MAPS[3];
    let mut board = Board::with_fleet(layout, Fleet::from_shapes(&[shape('D')]));
    board.place_attempt(1, 0, 2, 2).unwrap();
    board
}

fn fired_set(board: &Board) -> BTreeSet<(i32, i32)> {
    let layout = board.layout();
    let mut set = BTreeSet::new();
    for r in 0..layout.rows {
        for c in 0..layout.cols {
            if board.was_fired(r, c) {
                set.insert((r, c));
            }
        }
    }
    set
}

#[test]
fn chase_mode_probes_only_around_the_active_hit() {
    for seed in 0..100u64 {
        let mut board = destroyer_board();
        board.fire(2, 3).unwrap();
        let before = fired_set(&board);

        let mut rng = SmallRng::seed_from_u64(seed);
        let fired = hunt_step(&mut board, &mut rng, &CancelToken::new());
        assert!(fired, "seed {}", seed);

        let after = fired_set(&board);
        let new: Vec<_> = after.difference(&before).copied().collect();
        assert_eq!(new.len(), 1, "seed {}", seed);
        let (r, c) = new[0];
        let dist = (r - 2).abs().max((c - 3).abs());
        assert_eq!(dist, 1, "probe ({}, {}) strayed from the hit (seed {})", r, c, seed);
    }
}

#[test]
fn chase_finishes_the_wounded_ship() {
    let mut board = destroyer_board();
    board.fire(2, 3).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let cancel = CancelToken::new();
    for _ in 0..10_000 {
        if board.is_destroyed() {
            break;
        }
        hunt_step(&mut board, &mut rng, &cancel);
    }
    assert!(board.is_destroyed());
    assert!(board.fleet().ships()[0].sunk());
}

#[test]
fn search_mode_fires_exactly_one_fresh_shot() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut board = Board::new(&MAPS[0]);
    board.place_randomly(&mut rng).unwrap();
    assert!(hunt_step(&mut board, &mut rng, &CancelToken::new()));
    assert_eq!(fired_set(&board).len(), 1);
}

#[test]
fn cancelled_token_stops_the_step_before_any_probe() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new(&MAPS[0]);
    board.place_randomly(&mut rng).unwrap();
    let cancel = CancelToken::new();
    cancel.cancel();
    assert!(!hunt_step(&mut board, &mut rng, &cancel));
    assert!(fired_set(&board).is_empty());
}

#[test]
fn hunter_never_repeats_a_coordinate() {
    let mut rng = SmallRng::seed_from_u64(13);
    let mut board = Board::new(&MAPS[0]);
    board.place_randomly(&mut rng).unwrap();
    let cancel = CancelToken::new();
    let mut total = 0usize;
    for _ in 0..5_000 {
        if board.is_destroyed() {
            break;
        }
        if hunt_step(&mut board, &mut rng, &cancel) {
            total += 1;
        }
    }
    // Every completed step fired a coordinate nobody fired before, so the
    // log grows by exactly one per step plus the surround auto-misses.
    let fired = fired_set(&board).len();
    assert_eq!(fired, total + board.shots().auto_misses());
}

#[tokio::test(start_paused = true)]
async fn hunt_loop_destroys_the_fleet_and_stops() {
    let mut rng = SmallRng::seed_from_u64(21);
    let session = GameSession::new(0, Placement::Random, &mut rng).unwrap();
    let session = Arc::new(Mutex::new(session));

    let hunter = HunterHandle::spawn(
        Arc::clone(&session),
        Duration::from_millis(10),
        SmallRng::seed_from_u64(22),
    );

    let mut destroyed = false;
    for _ in 0..20_000 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        if session.lock().unwrap().board().is_destroyed() {
            destroyed = true;
            break;
        }
    }
    assert!(destroyed, "hunter never finished the fleet");
    hunter.stop().await;
}

#[tokio::test(start_paused = true)]
async fn hunt_loop_stops_cooperatively_when_cancelled() {
    let mut rng = SmallRng::seed_from_u64(31);
    let session = GameSession::new(0, Placement::Random, &mut rng).unwrap();
    let session = Arc::new(Mutex::new(session));

    let hunter = HunterHandle::spawn(
        Arc::clone(&session),
        Duration::from_millis(10),
        SmallRng::seed_from_u64(32),
    );
    hunter.cancel();
    hunter.stop().await;

    // The board is still usable by the manual path afterwards.
    let destroyed = session.lock().unwrap().board().is_destroyed();
    assert!(!destroyed);
}
