//! Random self-play demonstration.
//!
//! Plays a bounded random legal game from the starting position, printing
//! each move in coordinate notation and the final board. This exercises the
//! whole external surface the way a graphical front end would: query the
//! legal list, apply one move, resolve promotions, read the terminal flags.

use rand::prelude::IndexedRandom;

use maple_chess::game_state::chess_types::PieceKind;
use maple_chess::game_state::game_state::GameState;
use maple_chess::utils::render_game_state::render_game_state;

const MAX_PLIES: usize = 300;

fn main() {
    let mut game = GameState::new_game();
    let mut rng = rand::rng();

    while game.move_log.len() < MAX_PLIES {
        let moves = game.get_valid_moves();
        if moves.is_empty() {
            break;
        }
        let mv = *moves.choose(&mut rng).expect("non-empty move list");
        game.make_move(mv);
        if mv.is_promotion {
            game.resolve_promotion(PieceKind::Queen);
        }
        println!("{:3}. {}", game.move_log.len(), mv.to_coordinate_notation());
    }

    // Refresh the terminal flags for the final position.
    game.get_valid_moves();

    println!("\n{}\n", render_game_state(&game));
    if game.checkmate {
        println!("Checkmate; {:?} wins.", game.turn.opposite());
    } else if game.stalemate {
        println!("Stalemate.");
    } else {
        println!(
            "Stopped after {} plies: {}",
            game.move_log.len(),
            game.get_fen()
        );
    }
}
