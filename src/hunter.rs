//! The autonomous hunter: random search, plus an adjacency chase once a
//! hit lands on a ship that is not yet sunk.

use core::sync::atomic::{AtomicBool, Ordering};

use rand::Rng;

use crate::board::Board;
use crate::common::Coord;

/// Default tick period for the timed hunt loop, in milliseconds.
pub const DEFAULT_HUNT_PERIOD_MS: u64 = 270;

const CHASE_ITERATIONS: usize = 30;
const WALK_ATTEMPTS: usize = 15;
const SEARCH_ATTEMPTS: usize = 200;

/// Cooperative cancellation flag shared between a hunt loop and its owner.
#[derive(Debug, Default)]
pub struct CancelToken(AtomicBool);

impl CancelToken {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Perform one probing step: chase when any not-yet-sunk ship has a
/// recorded hit, otherwise search at random. Returns `true` if a shot was
/// fired. The cancellation token and the board's Destroyed state are
/// checked before every probe.
pub fn hunt_step<R: Rng>(board: &mut Board, rng: &mut R, cancel: &CancelToken) -> bool {
    if cancel.is_cancelled() || board.is_destroyed() {
        return false;
    }
    let hits = board.fleet().active_hits();
    if !hits.is_empty() {
        chase(board, &hits, rng, cancel)
    } else {
        random_search(board, rng, cancel)
    }
}

fn chase<R: Rng>(board: &mut Board, hits: &[Coord], rng: &mut R, cancel: &CancelToken) -> bool {
    for _ in 0..CHASE_ITERATIONS {
        let anchor = hits[rng.random_range(0..hits.len())];
        for _ in 0..WALK_ATTEMPTS {
            if cancel.is_cancelled() || board.is_destroyed() {
                return false;
            }
            if walk_probe(board, anchor, rng) {
                return true;
            }
        }
    }
    false
}

/// One biased random-walk probe from the anchor. On land a fifth branch
/// opens a uniform diagonal sub-choice; note the north-east step appears
/// both as a direct case and in the sub-choice, so it is twice as likely,
/// and the walk never steps due north.
fn walk_probe<R: Rng>(board: &mut Board, (row, col): Coord, rng: &mut R) -> bool {
    let directions = if board.layout().is_land(row, col) { 5 } else { 4 };
    let target = match rng.random_range(0..directions) {
        0 => (row, col + 1),
        1 => (row, col - 1),
        2 => (row + 1, col),
        3 => (row - 1, col + 1),
        _ => match rng.random_range(0..4) {
            0 => (row + 1, col + 1),
            1 => (row - 1, col - 1),
            2 => (row + 1, col - 1),
            _ => (row - 1, col + 1),
        },
    };
    probe(board, target)
}

fn random_search<R: Rng>(board: &mut Board, rng: &mut R, cancel: &CancelToken) -> bool {
    for _ in 0..SEARCH_ATTEMPTS {
        if cancel.is_cancelled() || board.is_destroyed() {
            return false;
        }
        let row = rng.random_range(0..board.layout().rows);
        let col = rng.random_range(0..board.layout().cols);
        if probe(board, (row, col)) {
            return true;
        }
    }
    false
}

/// Fire at the target. Out-of-bounds and already-fired coordinates do not
/// count as a completed probe.
fn probe(board: &mut Board, (row, col): Coord) -> bool {
    board.fire(row, col).is_ok()
}

#[cfg(feature = "std")]
mod runner {
    use std::sync::{Arc, Mutex};

    use rand::rngs::SmallRng;
    use tokio::task::JoinHandle;
    use tokio::time::{interval, Duration};

    use super::{hunt_step, CancelToken};
    use crate::session::GameSession;

    /// Owned handle to a running hunt task. Dropping the handle does not
    /// stop the hunt; call `cancel` or `stop`.
    pub struct HunterHandle {
        cancel: Arc<CancelToken>,
        task: JoinHandle<()>,
    }

    impl HunterHandle {
        /// Spawn the timed hunt loop against the session's board. Each
        /// tick performs at most one probing step; the loop exits when
        /// cancelled or when the board is destroyed.
        pub fn spawn(
            session: Arc<Mutex<GameSession>>,
            period: Duration,
            mut rng: SmallRng,
        ) -> Self {
            let cancel = Arc::new(CancelToken::new());
            let flag = Arc::clone(&cancel);
            let task = tokio::spawn(async move {
                let mut ticker = interval(period);
                loop {
                    ticker.tick().await;
                    if flag.is_cancelled() {
                        break;
                    }
                    let Ok(mut session) = session.lock() else {
                        break;
                    };
                    if session.board().is_destroyed() {
                        break;
                    }
                    hunt_step(session.board_mut(), &mut rng, &flag);
                }
                log::debug!("hunt loop finished");
            });
            Self { cancel, task }
        }

        /// Request a cooperative stop without waiting for the task.
        pub fn cancel(&self) {
            self.cancel.cancel();
        }

        pub fn is_finished(&self) -> bool {
            self.task.is_finished()
        }

        /// Cancel and wait for the loop to wind down.
        pub async fn stop(self) {
            self.cancel.cancel();
            let _ = self.task.await;
        }
    }
}

#[cfg(feature = "std")]
pub use runner::HunterHandle;
