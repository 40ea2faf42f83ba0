use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_advance_direction, pawn_start_row};
use crate::game_state::chess_types::{offset_square, Color, Square};
use crate::move_generation::pins_and_checks::{find_pin, pin_allows_direction, PinRecord};
use crate::moves::move_description::MoveDescription;

pub fn generate_pawn_moves(
    board: &Board,
    turn: Color,
    from: Square,
    en_passant_target: Option<Square>,
    pins: &[PinRecord],
    out: &mut Vec<MoveDescription>,
) {
    let pin = find_pin(pins, from);
    let advance = pawn_advance_direction(turn);

    // Single advance, and the double advance nested inside it so a blocked
    // first square blocks both.
    if let Some(one_step) = offset_square(from, advance, 0) {
        if board.is_empty(one_step) && pin_allows_direction(pin, (advance, 0)) {
            out.push(MoveDescription::new(from, one_step, board));
            if from.0 == pawn_start_row(turn) {
                if let Some(two_step) = offset_square(from, 2 * advance, 0) {
                    if board.is_empty(two_step) {
                        out.push(MoveDescription::new(from, two_step, board));
                    }
                }
            }
        }
    }

    // Diagonal captures, onto enemy pieces or the en passant target.
    for d_col in [-1, 1] {
        let Some(target) = offset_square(from, advance, d_col) else {
            continue;
        };
        if !pin_allows_direction(pin, (advance, d_col)) {
            continue;
        }
        match board.view(target) {
            Some(piece) if piece.color != turn => {
                out.push(MoveDescription::new(from, target, board));
            }
            None if en_passant_target == Some(target) => {
                out.push(MoveDescription::en_passant(from, target, board));
            }
            _ => {}
        }
    }
}
