use crate::game_state::board::Board;
use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::{offset_square, Color, Square};
use crate::move_generation::pins_and_checks::{find_pin, PinRecord};
use crate::moves::move_description::MoveDescription;

pub fn generate_knight_moves(
    board: &Board,
    turn: Color,
    from: Square,
    pins: &[PinRecord],
    out: &mut Vec<MoveDescription>,
) {
    // A knight can never stay on its pin line, so any pin immobilizes it.
    if find_pin(pins, from).is_some() {
        return;
    }

    for offset in KNIGHT_OFFSETS {
        let Some(end) = offset_square(from, offset.0, offset.1) else {
            continue;
        };
        match board.view(end) {
            Some(piece) if piece.color == turn => {}
            _ => out.push(MoveDescription::new(from, end, board)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, PieceRecord};

    #[test]
    fn centered_knight_reaches_all_eight_squares() {
        let mut board = Board::default();
        *board.at((4, 4)) = Some(PieceRecord {
            color: Color::Light,
            kind: PieceKind::Knight,
        });

        let mut out = Vec::new();
        generate_knight_moves(&board, Color::Light, (4, 4), &[], &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn friendly_pieces_exclude_destinations_enemies_do_not() {
        let mut board = Board::default();
        *board.at((4, 4)) = Some(PieceRecord {
            color: Color::Light,
            kind: PieceKind::Knight,
        });
        *board.at((2, 3)) = Some(PieceRecord {
            color: Color::Light,
            kind: PieceKind::Pawn,
        });
        *board.at((2, 5)) = Some(PieceRecord {
            color: Color::Dark,
            kind: PieceKind::Pawn,
        });

        let mut out = Vec::new();
        generate_knight_moves(&board, Color::Light, (4, 4), &[], &mut out);

        assert_eq!(out.len(), 7);
        assert!(!out.iter().any(|mv| mv.end == (2, 3)));
        let capture = out.iter().find(|mv| mv.end == (2, 5)).expect("capture");
        assert!(capture.piece_captured.is_some());
    }

    #[test]
    fn any_pin_immobilizes_a_knight() {
        let mut board = Board::default();
        *board.at((4, 4)) = Some(PieceRecord {
            color: Color::Light,
            kind: PieceKind::Knight,
        });
        let pin = PinRecord {
            square: (4, 4),
            direction: (0, 1),
        };

        let mut out = Vec::new();
        generate_knight_moves(&board, Color::Light, (4, 4), &[pin], &mut out);
        assert!(out.is_empty());
    }
}
