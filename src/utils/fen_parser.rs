//! FEN-to-GameState parser.
//!
//! Builds a fully populated state from a Forsyth-Edwards Notation string:
//! board cells, side to move, castling rights (with their initial history
//! entry), the en passant window, clocks, and both king locations.

use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::{Color, PieceKind, PieceRecord, Square};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let board = parse_board(board_part)?;
    let turn = parse_side_to_move(side_part)?;
    let castle_rights = parse_castle_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;

    let light_king_location = locate_king(&board, Color::Light)?;
    let dark_king_location = locate_king(&board, Color::Dark)?;

    Ok(GameState {
        board,
        turn,
        light_king_location,
        dark_king_location,
        castle_rights,
        castle_rights_log: vec![castle_rights],
        en_passant_target,
        move_log: Vec::new(),
        in_check: false,
        checkmate: false,
        stalemate: false,
        halfmove_clock,
        fullmove_number,
        base_en_passant_target: en_passant_target,
        base_halfmove_clock: halfmove_clock,
    })
}

fn parse_board(board_part: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut board = Board::default();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;
        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;
            if col >= 8 {
                return Err("Board rank has too many files".to_owned());
            }
            *board.at((row as i8, col as i8)) = Some(piece);
            col += 1;
        }
        if col != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_castle_rights(castling_part: &str) -> Result<CastleRights, String> {
    if castling_part == "-" {
        return Ok(CastleRights::none());
    }

    let mut rights = CastleRights::none();
    for ch in castling_part.chars() {
        match ch {
            'K' => rights.light_kingside = true,
            'Q' => rights.light_queenside = true,
            'k' => rights.dark_kingside = true,
            'q' => rights.dark_queenside = true,
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        }
    }
    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    Ok(Some(algebraic_to_square(en_passant_part)?))
}

fn locate_king(board: &Board, color: Color) -> Result<Square, String> {
    for row in 0i8..8 {
        for col in 0i8..8 {
            let cell = board.view((row, col));
            if cell
                == Some(PieceRecord {
                    color,
                    kind: PieceKind::King,
                })
            {
                return Ok((row, col));
            }
        }
    }
    Err(format!("Board has no {color:?} king"))
}

fn piece_from_fen_char(ch: char) -> Option<PieceRecord> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(PieceRecord { color, kind })
}
