use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_rules::{back_rank, KING_OFFSETS};
use crate::game_state::chess_types::{offset_square, Color, Square};
use crate::move_generation::pins_and_checks::{inspect_pins_and_checks, square_under_attack};
use crate::moves::move_description::MoveDescription;

/// King steps are the one move kind the pin system cannot protect, so each
/// candidate square is validated by rerunning the detector with the king
/// hypothetically placed there. The board is never touched; the real king
/// square is transparent to the scan, which keeps "step back along the
/// checking ray" illegal.
pub fn generate_king_moves(board: &Board, turn: Color, from: Square, out: &mut Vec<MoveDescription>) {
    for offset in KING_OFFSETS {
        let Some(end) = offset_square(from, offset.0, offset.1) else {
            continue;
        };
        if let Some(piece) = board.view(end) {
            if piece.color == turn {
                continue;
            }
        }
        if !inspect_pins_and_checks(board, turn, end).in_check {
            out.push(MoveDescription::new(from, end, board));
        }
    }
}

/// Castle generation. The caller guarantees the king is not currently in
/// check; the remaining preconditions are the rights flag, empty squares
/// between king and rook, and unattacked king transit squares (destination
/// included). The rook relocation happens at move application.
pub fn generate_castle_moves(
    board: &Board,
    rights: CastleRights,
    turn: Color,
    from: Square,
    out: &mut Vec<MoveDescription>,
) {
    let rank = back_rank(turn);
    if from != (rank, 4) {
        return;
    }

    if rights.kingside(turn) {
        let transit = [(rank, 5), (rank, 6)];
        if transit.iter().all(|&square| board.is_empty(square))
            && transit
                .iter()
                .all(|&square| !square_under_attack(board, turn, square))
        {
            out.push(MoveDescription::castle(from, (rank, 6), board));
        }
    }

    if rights.queenside(turn) {
        let between = [(rank, 3), (rank, 2), (rank, 1)];
        let transit = [(rank, 3), (rank, 2)];
        if between.iter().all(|&square| board.is_empty(square))
            && transit
                .iter()
                .all(|&square| !square_under_attack(board, turn, square))
        {
            out.push(MoveDescription::castle(from, (rank, 2), board));
        }
    }
}
