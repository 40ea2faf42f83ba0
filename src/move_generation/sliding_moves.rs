use crate::game_state::board::Board;
use crate::game_state::chess_rules::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::game_state::chess_types::{offset_square, Color, Square};
use crate::move_generation::pins_and_checks::{find_pin, pin_allows_direction, PinRecord};
use crate::moves::move_description::MoveDescription;

pub fn generate_rook_moves(
    board: &Board,
    turn: Color,
    from: Square,
    pins: &[PinRecord],
    out: &mut Vec<MoveDescription>,
) {
    generate_sliding_moves(board, turn, from, pins, &ORTHOGONAL_DIRECTIONS, out);
}

pub fn generate_bishop_moves(
    board: &Board,
    turn: Color,
    from: Square,
    pins: &[PinRecord],
    out: &mut Vec<MoveDescription>,
) {
    generate_sliding_moves(board, turn, from, pins, &DIAGONAL_DIRECTIONS, out);
}

pub fn generate_queen_moves(
    board: &Board,
    turn: Color,
    from: Square,
    pins: &[PinRecord],
    out: &mut Vec<MoveDescription>,
) {
    generate_sliding_moves(board, turn, from, pins, &ORTHOGONAL_DIRECTIONS, out);
    generate_sliding_moves(board, turn, from, pins, &DIAGONAL_DIRECTIONS, out);
}

/// Shared ray walker for the sliding pieces: continue over empty squares,
/// stop and include on an enemy piece, stop and exclude on a friendly one.
/// A pinned slider only walks the pin axis.
fn generate_sliding_moves(
    board: &Board,
    turn: Color,
    from: Square,
    pins: &[PinRecord],
    directions: &[(i8, i8)],
    out: &mut Vec<MoveDescription>,
) {
    let pin = find_pin(pins, from);

    for direction in directions {
        if !pin_allows_direction(pin, *direction) {
            continue;
        }
        for step in 1i8..8 {
            let Some(end) = offset_square(from, direction.0 * step, direction.1 * step) else {
                break;
            };
            match board.view(end) {
                None => out.push(MoveDescription::new(from, end, board)),
                Some(piece) if piece.color != turn => {
                    out.push(MoveDescription::new(from, end, board));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, PieceRecord};

    fn place(board: &mut Board, square: Square, color: Color, kind: PieceKind) {
        *board.at(square) = Some(PieceRecord { color, kind });
    }

    #[test]
    fn centered_rook_covers_both_open_lines() {
        let mut board = Board::default();
        place(&mut board, (4, 4), Color::Light, PieceKind::Rook);

        let mut out = Vec::new();
        generate_rook_moves(&board, Color::Light, (4, 4), &[], &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rays_stop_on_enemy_inclusive_and_friendly_exclusive() {
        let mut board = Board::default();
        place(&mut board, (4, 4), Color::Light, PieceKind::Rook);
        place(&mut board, (4, 6), Color::Dark, PieceKind::Pawn);
        place(&mut board, (6, 4), Color::Light, PieceKind::Pawn);

        let mut out = Vec::new();
        generate_rook_moves(&board, Color::Light, (4, 4), &[], &mut out);

        assert!(out.contains(&MoveDescription::new((4, 4), (4, 6), &board)));
        assert!(!out.iter().any(|mv| mv.end == (4, 7)));
        assert!(out.iter().any(|mv| mv.end == (5, 4)));
        assert!(!out.iter().any(|mv| mv.end == (6, 4)));
    }

    #[test]
    fn pinned_queen_still_slides_along_the_pin_axis() {
        let mut board = Board::default();
        place(&mut board, (4, 4), Color::Light, PieceKind::Queen);
        let pin = PinRecord {
            square: (4, 4),
            direction: (-1, -1),
        };

        let mut out = Vec::new();
        generate_queen_moves(&board, Color::Light, (4, 4), &[pin], &mut out);

        assert_eq!(out.len(), 7);
        assert!(out
            .iter()
            .all(|mv| (mv.end.0 - 4).abs() == (mv.end.1 - 4).abs()
                && (mv.end.0 - 4).signum() == (mv.end.1 - 4).signum()));
    }

    #[test]
    fn pinned_rook_on_the_wrong_axis_cannot_move() {
        let mut board = Board::default();
        place(&mut board, (4, 4), Color::Light, PieceKind::Rook);
        let pin = PinRecord {
            square: (4, 4),
            direction: (1, 1),
        };

        let mut out = Vec::new();
        generate_rook_moves(&board, Color::Light, (4, 4), &[pin], &mut out);
        assert!(out.is_empty());
    }
}
