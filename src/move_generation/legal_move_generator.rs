//! Full legal move generation pipeline.
//!
//! Runs the pin/check detector, dispatches piece-wise pseudo-legal
//! generation over the mover's cells, and applies the check-response filter:
//! with no check everything passes (king and castle moves self-validate),
//! a single check keeps king moves plus moves landing on the
//! blocking-square set, and a double check keeps king moves only.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{offset_square, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::king_moves::{generate_castle_moves, generate_king_moves};
use crate::move_generation::knight_moves::generate_knight_moves;
use crate::move_generation::pawn_moves::generate_pawn_moves;
use crate::move_generation::pins_and_checks::{
    inspect_pins_and_checks, CheckInspection, CheckRecord, PinRecord,
};
use crate::move_generation::sliding_moves::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::moves::move_description::MoveDescription;

/// Pipeline outcome. `in_check` is surfaced so the controller can derive
/// checkmate against stalemate from an empty list.
#[derive(Debug, Clone)]
pub struct ValidMoves {
    pub moves: Vec<MoveDescription>,
    pub in_check: bool,
}

pub fn generate_valid_moves(game_state: &GameState) -> ValidMoves {
    let king_square = game_state.king_location(game_state.turn);
    let inspection = inspect_pins_and_checks(&game_state.board, game_state.turn, king_square);

    let mut moves = if inspection.in_check {
        if inspection.checks.len() == 1 {
            moves_under_single_check(game_state, &inspection, king_square)
        } else {
            // Double check: nothing but the king may move.
            let mut out = Vec::new();
            generate_king_moves(&game_state.board, game_state.turn, king_square, &mut out);
            out
        }
    } else {
        generate_pseudo_legal_moves(game_state, &inspection.pins)
    };

    if !inspection.in_check {
        generate_castle_moves(
            &game_state.board,
            game_state.castle_rights,
            game_state.turn,
            king_square,
            &mut moves,
        );
    }

    ValidMoves {
        moves,
        in_check: inspection.in_check,
    }
}

/// Every geometrically valid move for the side to move, pin-restricted but
/// not yet filtered for check responses.
fn generate_pseudo_legal_moves(game_state: &GameState, pins: &[PinRecord]) -> Vec<MoveDescription> {
    let board = &game_state.board;
    let turn = game_state.turn;
    let mut out = Vec::with_capacity(64);

    for row in 0i8..8 {
        for col in 0i8..8 {
            let square = (row, col);
            let Some(piece) = board.view(square) else {
                continue;
            };
            if piece.color != turn {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(
                    board,
                    turn,
                    square,
                    game_state.en_passant_target,
                    pins,
                    &mut out,
                ),
                PieceKind::Knight => generate_knight_moves(board, turn, square, pins, &mut out),
                PieceKind::Bishop => generate_bishop_moves(board, turn, square, pins, &mut out),
                PieceKind::Rook => generate_rook_moves(board, turn, square, pins, &mut out),
                PieceKind::Queen => generate_queen_moves(board, turn, square, pins, &mut out),
                PieceKind::King => generate_king_moves(board, turn, square, &mut out),
            }
        }
    }

    out
}

fn moves_under_single_check(
    game_state: &GameState,
    inspection: &CheckInspection,
    king_square: Square,
) -> Vec<MoveDescription> {
    let moves = generate_pseudo_legal_moves(game_state, &inspection.pins);
    let blocking = blocking_squares(&game_state.board, king_square, &inspection.checks[0]);

    moves
        .into_iter()
        .filter(|mv| mv.piece_moved.kind == PieceKind::King || blocking.contains(&mv.end))
        .collect()
}

/// Squares a non-king move may land on to answer a single check: the
/// attacker's square (capture), plus every square between king and a sliding
/// attacker (block). A knight check cannot be blocked, only captured.
fn blocking_squares(board: &Board, king_square: Square, check: &CheckRecord) -> Vec<Square> {
    let attacker_kind = board.view(check.attacker_square).map(|piece| piece.kind);
    if attacker_kind == Some(PieceKind::Knight) {
        return vec![check.attacker_square];
    }

    let mut squares = Vec::new();
    for step in 1i8..8 {
        let Some(square) = offset_square(
            king_square,
            check.direction.0 * step,
            check.direction.1 * step,
        ) else {
            break;
        };
        squares.push(square);
        if square == check.attacker_square {
            break;
        }
    }
    squares
}
