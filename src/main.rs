//! Command-line position inspector.
//!
//! Loads a position from `--fen` (start position by default, trailing fields
//! may be omitted) and lists moves, reports game status, runs perft, searches
//! for a move or plays a sequence of long algebraic moves.

use std::error::Error;
use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use plum_rules::game_state::board::Board;
use plum_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_rules::game_state::chess_types::GameStatus;
use plum_rules::game_state::game::Game;
use plum_rules::move_generation::perft::{divide, perft};
use plum_rules::search::board_scoring::MaterialScorer;
use plum_rules::search::minimax::{MinimaxSearch, SearchConfig};
use plum_rules::utils::fen_parser::parse_fen_lenient;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(STARTING_POSITION_FEN))]
    fen: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every legal move for the side to move.
    Moves,
    /// Print the board, side to move, check and game status.
    Status,
    /// Count leaf nodes of the legal move tree.
    Perft {
        #[arg(short, long, default_value_t = 3)]
        depth: u8,

        /// Print per-root-move node counts.
        #[arg(long)]
        divide: bool,
    },
    /// Search for a move with material minimax.
    Best {
        #[arg(short, long, default_value_t = SearchConfig::default().depth)]
        depth: u8,

        /// Seed for the tie-break between equally scored moves.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play long algebraic moves (e.g. `e2e4 e7e5`) and print the result.
    Play { moves: Vec<String> },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let board = parse_fen_lenient(&args.fen)?;

    match args.command {
        Command::Moves => {
            let moves = board.all_legal_moves();
            for mv in &moves {
                println!("{mv}");
            }
            println!("{} legal moves", moves.len());
        }
        Command::Status => print_status(&board),
        Command::Perft { depth, divide: true } => {
            let split = divide(&board, depth);
            let mut total = 0usize;
            for (mv, nodes) in &split {
                println!("{mv}: {nodes}");
                total += nodes;
            }
            println!("\nMoves: {}\nNodes: {total}", split.len());
        }
        Command::Perft { depth, divide: false } => {
            let start = Instant::now();
            let counts = perft(&board, depth);
            let elapsed = start.elapsed();
            println!(
                "perft({depth}) = {} nodes ({} ms)",
                counts.nodes,
                elapsed.as_millis()
            );
            println!(
                "captures {} | en passant {} | castles {} | promotions {} | checks {} | checkmates {}",
                counts.captures,
                counts.en_passant,
                counts.castles,
                counts.promotions,
                counts.checks,
                counts.checkmates
            );
        }
        Command::Best { depth, seed } => {
            let search = MinimaxSearch::new(SearchConfig { depth }, MaterialScorer);
            let result = match seed {
                Some(seed) => search.choose_move(&board, &mut StdRng::seed_from_u64(seed)),
                None => search.choose_move(&board, &mut rand::rng()),
            };
            match result.best_move {
                Some(mv) => println!("bestmove {mv} score {} nodes {}", result.score, result.nodes),
                None => println!("bestmove (none) score {}", result.score),
            }
        }
        Command::Play { moves } => {
            let mut game = Game::from_board(board);
            for text in &moves {
                game.execute_long_algebraic(text)
                    .map_err(|err| format!("{text}: {err}"))?;
            }
            print_status(game.board());
        }
    }

    Ok(())
}

fn print_status(board: &Board) {
    println!("{board}");
    println!("fen: {}", board.to_fen());
    println!("side to move: {:?}", board.side_to_move());
    if let Some(king) = board.king_in_check() {
        println!("check on {king}");
    }
    let status = match board.game_status() {
        GameStatus::Running => "running",
        GameStatus::Checkmate => "checkmate",
        GameStatus::Stalemate => "stalemate",
    };
    println!("status: {status}");
}
