//! Command-line driver: play one move per invocation.
//!
//! The game lives in a savegame file between invocations. `move` applies
//! the player's move, lets the engine reply, and persists the result.
//! All engine internals log through `log`; set RUST_LOG=debug to watch
//! the search consider moves.

use std::env;
use std::process::ExitCode;

use woodpusher::board::{
    apply_move_recording, find_best_move, format_san, game_status, parse_plain, parse_san, Board,
    GameStatus, Move, PositionHistory, SearchConfig,
};

const DEFAULT_FILE: &str = "game";

fn usage() {
    eprintln!("Usage:");
    eprintln!("  woodpusher new [FILE]           start a new game");
    eprintln!("  woodpusher show [FILE]          print the current position");
    eprintln!("  woodpusher move [-x] MOVE [FILE]");
    eprintln!("                                  play MOVE (e2-e4 or SAN); the");
    eprintln!("                                  engine replies unless -x is given");
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    let result = match args.split_first() {
        Some((cmd, rest)) => match cmd.as_str() {
            "new" => cmd_new(rest),
            "show" => cmd_show(rest),
            "move" => cmd_move(rest),
            _ => {
                usage();
                return ExitCode::FAILURE;
            }
        },
        None => {
            usage();
            return ExitCode::FAILURE;
        }
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_new(rest: &[String]) -> Result<(), String> {
    let file = rest.first().map_or(DEFAULT_FILE, String::as_str);
    let board = Board::new();
    board.save_to(file).map_err(|e| e.to_string())?;
    println!("{board}");
    println!("New game saved to '{file}'. White to move.");
    Ok(())
}

fn cmd_show(rest: &[String]) -> Result<(), String> {
    let file = rest.first().map_or(DEFAULT_FILE, String::as_str);
    let board = Board::load_from(file).map_err(|e| e.to_string())?;
    println!("{board}");
    println!("{} to move.", board.side_to_move());
    Ok(())
}

fn parse_move(board: &mut Board, input: &str) -> Result<Move, String> {
    // Accept simple from-to notation first, then fall back to SAN.
    if let Ok(mv) = parse_plain(board, input) {
        return Ok(mv);
    }
    parse_san(board, input).map_err(|e| e.to_string())
}

fn cmd_move(rest: &[String]) -> Result<(), String> {
    let (no_reply, rest) = match rest.split_first() {
        Some((flag, tail)) if flag == "-x" => (true, tail),
        _ => (false, rest),
    };
    let (input, rest) = rest
        .split_first()
        .ok_or_else(|| "Missing move argument".to_string())?;
    let file = rest.first().map_or(DEFAULT_FILE, String::as_str);

    let mut board = Board::load_from(file).map_err(|e| e.to_string())?;
    if board.state() != woodpusher::board::GameState::Unfinished {
        return Err("The game is already over.".to_string());
    }

    let mut history = PositionHistory::new();
    history.record(&board);

    let mv = parse_move(&mut board, input)?;
    let played = format_san(&board, &mv);
    apply_move_recording(&mut board, &mv);
    history.record(&board);
    log::info!("player move {played}");

    let status = game_status(&mut board, &history);
    if status != GameStatus::InPlay {
        return finish(board, status, file);
    }

    if !no_reply {
        let engine_color = board.side_to_move();
        let outcome = find_best_move(&board, engine_color, &SearchConfig::default())
            .ok_or_else(|| "Engine found no legal move".to_string())?;
        let reply = outcome.best_move;
        let reply_san = format_san(&board, &reply);
        apply_move_recording(&mut board, &reply);
        history.record(&board);
        println!("{engine_color} plays {reply_san}");

        let status = game_status(&mut board, &history);
        if status != GameStatus::InPlay {
            return finish(board, status, file);
        }
    }

    board.save_to(file).map_err(|e| e.to_string())?;
    println!("{board}");
    println!("{} to move.", board.side_to_move());
    Ok(())
}

fn finish(mut board: Board, status: GameStatus, file: &str) -> Result<(), String> {
    board.set_state(status.to_state());
    board.save_to(file).map_err(|e| e.to_string())?;
    println!("{board}");
    Ok(())
}
