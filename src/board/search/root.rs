//! Root driver: evaluate every root move, in parallel chunks.

use std::thread;
use std::time::Instant;

use rand::seq::SliceRandom;

use super::super::{apply_move, undo_move, Board, Color, GameState, Move};
use super::{alpha_beta, KillerTable, SearchStats, MAT_LOSS, MAT_WIN, MAX_PLY, MAX_THREADS};

/// Knobs of a single search. The defaults match the engine's tuned
/// fixed depth and thread count.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Ply depth of the regular search.
    pub ply_depth: u32,
    /// Upper bound on worker threads; 1 searches on the caller's thread.
    pub threads: usize,
    /// Shuffle the root moves for play variety. Costs some cutoffs.
    pub shuffle: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            ply_depth: MAX_PLY as u32,
            threads: MAX_THREADS,
            shuffle: false,
        }
    }
}

impl SearchConfig {
    /// Config with a specific ply depth.
    #[must_use]
    pub fn depth(ply_depth: u32) -> Self {
        SearchConfig {
            ply_depth,
            ..Default::default()
        }
    }

    /// Set the worker thread bound.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// Enable root-move shuffling.
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}

/// The chosen move plus the merged search counters.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub best_move: Move,
    pub stats: SearchStats,
}

/// Pick a move for `color`. Returns None when there is no legal move
/// (the position is already mate or stalemate).
///
/// The input board is never visibly mutated; workers get clones. Root
/// moves are split into up to `threads` chunks of roughly equal size,
/// each evaluated with its own alpha-beta window and killer table, so
/// the chosen move may depend on the partition but never on the thread
/// schedule: results are aggregated only after every worker has joined.
#[must_use]
pub fn find_best_move(board: &Board, color: Color, config: &SearchConfig) -> Option<SearchOutcome> {
    let started = Instant::now();
    let mut stats = SearchStats {
        start_time: Some(started),
        ..SearchStats::new()
    };

    let mut root_board = board.clone();
    let mut moves = root_board.legal_moves(color);
    if moves.is_empty() {
        return None;
    }
    if moves.len() == 1 {
        log::debug!("single legal move {}, skipping search", moves[0]);
        return Some(SearchOutcome {
            best_move: moves[0],
            stats,
        });
    }

    if config.shuffle {
        moves.as_mut_slice().shuffle(&mut rand::thread_rng());
    }

    let total = moves.len();
    let chunk_count = config.threads.max(1).min((total / 2).max(1));
    let ply_depth = config.ply_depth;

    let evaluated: Vec<Move> = if chunk_count <= 1 {
        let (scored, worker_stats) =
            evaluate_chunk(root_board, moves.into_iter().collect(), color, ply_depth);
        stats.merge(&worker_stats);
        scored
    } else {
        let chunks = moves.into_chunks(chunk_count);
        let mut handles = Vec::with_capacity(chunks.len());
        for (worker_id, chunk) in chunks.into_iter().enumerate() {
            let worker_board = board.clone();
            let handle = thread::Builder::new()
                .name(format!("search-{worker_id}"))
                .spawn(move || evaluate_chunk(worker_board, chunk, color, ply_depth))
                .expect("failed to spawn search worker");
            handles.push(handle);
        }

        let mut scored = Vec::with_capacity(total);
        for handle in handles {
            if let Ok((chunk, worker_stats)) = handle.join() {
                stats.merge(&worker_stats);
                scored.extend(chunk);
            }
        }
        scored
    };

    // Highest score wins for White, lowest for Black; first one on ties.
    let mut best = 0;
    for (idx, mv) in evaluated.iter().enumerate().skip(1) {
        let better = match color {
            Color::White => mv.score > evaluated[best].score,
            Color::Black => mv.score < evaluated[best].score,
        };
        if better {
            best = idx;
        }
    }

    log::info!(
        "evaluated {} positions and {} moves in {:.2?}",
        stats.boards_evaluated,
        stats.moves_count,
        started.elapsed()
    );

    Some(SearchOutcome {
        best_move: evaluated[best],
        stats,
    })
}

/// Evaluate one chunk of root moves on its own board clone.
///
/// Alpha/beta are local to the chunk; a cutoff stops the remaining
/// moves, which then keep their worst-for-mover construction scores and
/// cannot win the final scan.
fn evaluate_chunk(
    mut board: Board,
    mut moves: Vec<Move>,
    color: Color,
    ply_depth: u32,
) -> (Vec<Move>, SearchStats) {
    let mut stats = SearchStats::new();
    let mut killers = KillerTable::new();
    let mut alpha = MAT_LOSS;
    let mut beta = MAT_WIN;

    for mv in moves.iter_mut() {
        let record = apply_move(&mut board, mv);
        let (score, state) = alpha_beta(
            &mut board,
            &mut stats,
            &mut killers,
            1,
            ply_depth as i32 - 1,
            0,
            0,
            alpha,
            beta,
            color.opponent(),
        );
        undo_move(&mut board, &record);

        mv.score = score;
        match state {
            GameState::WhiteWins | GameState::BlackWins => mv.gives_check_mate = true,
            GameState::Stalemate => mv.gives_draw = true,
            _ => {}
        }
        log::debug!("considered {} -> {}", mv, score);

        match color {
            Color::White => {
                if score > alpha {
                    alpha = score;
                }
            }
            Color::Black => {
                if score < beta {
                    beta = score;
                }
            }
        }
        if alpha >= beta {
            break;
        }
    }

    (moves, stats)
}
