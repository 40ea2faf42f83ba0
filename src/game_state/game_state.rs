//! Central game state and the make/undo mutation surface.
//!
//! `GameState` owns the board, the side to move, both king locations, the
//! castling rights and their history, the en passant window, the clocks,
//! and the move log. All mutation flows through `make_move`, `undo_move`,
//! and `resolve_promotion`; `get_valid_moves` refreshes the derived
//! check/checkmate/stalemate flags. `make_move` followed by `undo_move`
//! restores every field except the log bit-identically.

use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Color, PieceKind, PieceRecord, Square};
use crate::move_generation::legal_move_generator::generate_valid_moves;
use crate::move_generation::pins_and_checks;
use crate::moves::move_description::MoveDescription;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub light_king_location: Square,
    pub dark_king_location: Square,

    pub castle_rights: CastleRights,
    /// One snapshot per made ply on top of the initial entry; rights are
    /// restored from here on undo, never recomputed from the board.
    pub castle_rights_log: Vec<CastleRights>,

    pub en_passant_target: Option<Square>,
    pub move_log: Vec<MoveDescription>,

    // Derived by get_valid_moves, cleared by undo_move.
    pub in_check: bool,
    pub checkmate: bool,
    pub stalemate: bool,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    /// Construction-time baselines. Undo recomputes the en passant window
    /// and halfmove clock from the move log, and bottoms out in these when
    /// the log empties under a FEN-seeded position.
    pub base_en_passant_target: Option<Square>,
    pub base_halfmove_clock: u16,
}

impl GameState {
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Square {
        match color {
            Color::Light => self.light_king_location,
            Color::Dark => self.dark_king_location,
        }
    }

    #[inline]
    fn set_king_location(&mut self, color: Color, square: Square) {
        match color {
            Color::Light => self.light_king_location = square,
            Color::Dark => self.dark_king_location = square,
        }
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveDescription> {
        self.move_log.last()
    }

    /// Whether the enemies of the side to move attack `square`.
    #[inline]
    pub fn square_under_attack(&self, square: Square) -> bool {
        pins_and_checks::square_under_attack(&self.board, self.turn, square)
    }

    /// Legal moves for the side to move. Also refreshes the derived flags:
    /// an empty list means checkmate when in check, stalemate otherwise.
    pub fn get_valid_moves(&mut self) -> Vec<MoveDescription> {
        let result = generate_valid_moves(self);
        self.in_check = result.in_check;
        self.checkmate = result.moves.is_empty() && result.in_check;
        self.stalemate = result.moves.is_empty() && !result.in_check;
        result.moves
    }

    /// Apply a move previously returned by `get_valid_moves`. Moves from any
    /// other source are outside the contract and are not validated here.
    pub fn make_move(&mut self, mv: MoveDescription) {
        *self.board.at(mv.start) = None;
        *self.board.at(mv.end) = Some(mv.piece_moved);

        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_location(mv.piece_moved.color, mv.end);
        }

        if mv.is_en_passant {
            // The captured pawn stands beside the start square, not on the
            // landing square.
            *self.board.at((mv.start.0, mv.end.1)) = None;
        }

        if mv.is_castle {
            let rank = mv.end.0;
            if mv.end.1 - mv.start.1 == 2 {
                let rook = self.board.remove_piece((rank, mv.end.1 + 1));
                *self.board.at((rank, mv.end.1 - 1)) = rook;
            } else {
                let rook = self.board.remove_piece((rank, mv.end.1 - 2));
                *self.board.at((rank, mv.end.1 + 1)) = rook;
            }
        }

        self.en_passant_target = en_passant_target_after(&mv);

        self.castle_rights = self.castle_rights.after_move(&mv);
        self.castle_rights_log.push(self.castle_rights);

        if mv.piece_moved.kind == PieceKind::Pawn || mv.piece_captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if mv.piece_moved.color == Color::Dark {
            self.fullmove_number += 1;
        }

        self.move_log.push(mv);
        self.turn = self.turn.opposite();
    }

    /// Reverse the last made move; a no-op when the log is empty.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };

        *self.board.at(mv.start) = Some(mv.piece_moved);
        *self.board.at(mv.end) = if mv.is_en_passant {
            None
        } else {
            mv.piece_captured
        };

        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_location(mv.piece_moved.color, mv.start);
        }

        if mv.is_en_passant {
            // The victim returns to the square it was actually taken from.
            *self.board.at((mv.start.0, mv.end.1)) = mv.piece_captured;
        }

        if mv.is_castle {
            let rank = mv.end.0;
            if mv.end.1 - mv.start.1 == 2 {
                let rook = self.board.remove_piece((rank, mv.end.1 - 1));
                *self.board.at((rank, mv.end.1 + 1)) = rook;
            } else {
                let rook = self.board.remove_piece((rank, mv.end.1 + 1));
                *self.board.at((rank, mv.end.1 - 2)) = rook;
            }
        }

        self.castle_rights_log.pop();
        self.castle_rights = *self
            .castle_rights_log
            .last()
            .expect("rights log always retains its initial entry");

        // The en passant window is a function of the move that is now last.
        self.en_passant_target = match self.move_log.last() {
            Some(previous) => en_passant_target_after(previous),
            None => self.base_en_passant_target,
        };

        self.halfmove_clock = self.recompute_halfmove_clock();
        if mv.piece_moved.color == Color::Dark {
            self.fullmove_number -= 1;
        }

        self.turn = self.turn.opposite();
        self.in_check = false;
        self.checkmate = false;
        self.stalemate = false;
    }

    /// Replace the promoted pawn on the last move's destination with the
    /// caller's choice. Anything but the four promotion kinds is ignored, as
    /// is a call when the last move was not a promotion.
    pub fn resolve_promotion(&mut self, kind: PieceKind) {
        if !matches!(
            kind,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        ) {
            return;
        }
        let Some(last) = self.move_log.last() else {
            return;
        };
        if !last.is_promotion {
            return;
        }
        *self.board.at(last.end) = Some(PieceRecord {
            color: last.piece_moved.color,
            kind,
        });
    }

    fn recompute_halfmove_clock(&self) -> u16 {
        let mut clock = 0u16;
        for mv in self.move_log.iter().rev() {
            if mv.piece_moved.kind == PieceKind::Pawn || mv.piece_captured.is_some() {
                return clock;
            }
            clock += 1;
        }
        self.base_halfmove_clock + clock
    }
}

/// The en passant window opened (or closed) by a just-made move: the square
/// skipped by a two-square pawn advance, valid for exactly one reply.
fn en_passant_target_after(mv: &MoveDescription) -> Option<Square> {
    if mv.is_two_square_pawn_advance() {
        Some(((mv.start.0 + mv.end.0) / 2, mv.end.1))
    } else {
        None
    }
}
