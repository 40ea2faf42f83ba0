use crate::game_state::board::Board;
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::{PieceKind, PieceRecord, Square};
use crate::utils::algebraic::square_to_algebraic;

/// A single ply, immutable once constructed. Moved and captured pieces are
/// snapshots of the board at construction time, which is what lets undo
/// restore cells without consulting any other state.
///
/// Equality compares only the four coordinates; the input layer matches a
/// clicked square pair against the legal list this way, picking up whatever
/// flags the generated move carries.
#[derive(Debug, Clone, Copy)]
pub struct MoveDescription {
    pub start: Square,
    pub end: Square,
    pub piece_moved: PieceRecord,
    pub piece_captured: Option<PieceRecord>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
}

impl PartialEq for MoveDescription {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for MoveDescription {}

impl MoveDescription {
    /// A plain move or capture. The origin must hold a piece; moves are only
    /// ever constructed for occupied squares.
    pub fn new(start: Square, end: Square, board: &Board) -> Self {
        let piece_moved = board.view(start).expect("move origin must hold a piece");
        let is_promotion =
            piece_moved.kind == PieceKind::Pawn && end.0 == promotion_row(piece_moved.color);
        MoveDescription {
            start,
            end,
            piece_moved,
            piece_captured: board.view(end),
            is_en_passant: false,
            is_castle: false,
            is_promotion,
        }
    }

    /// An en passant capture. The victim stands beside the start square, not
    /// on the landing square, so it is synthesized rather than read.
    pub fn en_passant(start: Square, end: Square, board: &Board) -> Self {
        let mut mv = MoveDescription::new(start, end, board);
        mv.is_en_passant = true;
        mv.piece_captured = Some(PieceRecord {
            color: mv.piece_moved.color.opposite(),
            kind: PieceKind::Pawn,
        });
        mv
    }

    /// A castle, recorded as the two-square king move. The rook relocation is
    /// a side effect of move application, not a move of its own.
    pub fn castle(start: Square, end: Square, board: &Board) -> Self {
        let mut mv = MoveDescription::new(start, end, board);
        mv.is_castle = true;
        mv
    }

    /// True for the two-square pawn advance that opens an en passant window.
    #[inline]
    pub fn is_two_square_pawn_advance(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && (self.start.0 - self.end.0).abs() == 2
    }

    /// Coordinate text such as "e2e4".
    pub fn to_coordinate_notation(&self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.start),
            square_to_algebraic(self.end)
        )
    }
}
