//! Pin and check detection.
//!
//! The detector scans outward from a king square along the eight ray
//! directions, tracking at most one tentative pin per ray, then probes the
//! eight knight offsets directly. The friendly king itself never blocks a
//! ray, which is what lets the same scan answer "would this square be safe
//! for the king" for hypothetical king placements and castle transit squares
//! without touching the board.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KING_SCAN_DIRECTIONS, KNIGHT_OFFSETS};
use crate::game_state::chess_types::{offset_square, Color, PieceKind, Square};

/// A friendly piece that may only move along `direction` (or its exact
/// negation) without exposing its own king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinRecord {
    pub square: Square,
    pub direction: (i8, i8),
}

/// An enemy piece attacking the inspected king square. `direction` runs from
/// the king toward the attacker; for a knight it carries the knight offset
/// and no blocking square exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRecord {
    pub attacker_square: Square,
    pub direction: (i8, i8),
}

#[derive(Debug, Clone)]
pub struct CheckInspection {
    pub in_check: bool,
    pub pins: Vec<PinRecord>,
    pub checks: Vec<CheckRecord>,
}

/// Scan the board for checks against `side`'s king at `king_square` and for
/// friendly pieces pinned to it. `king_square` may be a hypothetical
/// placement; the real king square is transparent to the scan.
pub fn inspect_pins_and_checks(board: &Board, side: Color, king_square: Square) -> CheckInspection {
    let mut inspection = CheckInspection {
        in_check: false,
        pins: Vec::new(),
        checks: Vec::new(),
    };
    let enemy = side.opposite();

    for (direction_index, direction) in KING_SCAN_DIRECTIONS.iter().enumerate() {
        let mut possible_pin: Option<PinRecord> = None;
        for step in 1i8..8 {
            let Some(end) = offset_square(king_square, direction.0 * step, direction.1 * step)
            else {
                break;
            };
            let Some(piece) = board.view(end) else {
                continue;
            };

            if piece.color == side {
                if piece.kind == PieceKind::King {
                    // The scanned king is transparent, so a hypothetical
                    // placement still sees attackers through its real square.
                    continue;
                }
                if possible_pin.is_none() {
                    possible_pin = Some(PinRecord {
                        square: end,
                        direction: *direction,
                    });
                } else {
                    // A second friendly piece shields this ray.
                    break;
                }
            } else {
                if attacks_along_ray(piece.kind, enemy, direction_index, step) {
                    match possible_pin {
                        None => {
                            inspection.in_check = true;
                            inspection.checks.push(CheckRecord {
                                attacker_square: end,
                                direction: *direction,
                            });
                        }
                        Some(pin) => inspection.pins.push(pin),
                    }
                }
                break;
            }
        }
    }

    for offset in KNIGHT_OFFSETS {
        let Some(end) = offset_square(king_square, offset.0, offset.1) else {
            continue;
        };
        if let Some(piece) = board.view(end) {
            if piece.color == enemy && piece.kind == PieceKind::Knight {
                inspection.in_check = true;
                inspection.checks.push(CheckRecord {
                    attacker_square: end,
                    direction: offset,
                });
            }
        }
    }

    inspection
}

/// Whether the enemies of `side` attack `square`. Runs the detector scan from
/// the square itself, so pawn and king coverage of empty squares is seen.
#[inline]
pub fn square_under_attack(board: &Board, side: Color, square: Square) -> bool {
    inspect_pins_and_checks(board, side, square).in_check
}

/// Non-destructive pin lookup; generators restrict against the pin rather
/// than consuming it, so a queen sharing a pin entry across both direction
/// sets sees the same restriction in each.
#[inline]
pub fn find_pin(pins: &[PinRecord], square: Square) -> Option<PinRecord> {
    pins.iter().copied().find(|pin| pin.square == square)
}

/// Whether a pinned piece may head in `direction`: along the pin or its
/// exact negation.
#[inline]
pub fn pin_allows_direction(pin: Option<PinRecord>, direction: (i8, i8)) -> bool {
    match pin {
        None => true,
        Some(pin) => {
            pin.direction == direction || pin.direction == (-direction.0, -direction.1)
        }
    }
}

/// Classify whether `kind` attacks along a scan ray. Ray indices 0..4 are
/// orthogonal, 4..8 diagonal (`KING_SCAN_DIRECTIONS` order); `step` is the
/// distance from the scanned square.
fn attacks_along_ray(kind: PieceKind, attacker_color: Color, direction_index: usize, step: i8) -> bool {
    match kind {
        PieceKind::Queen => true,
        PieceKind::Rook => direction_index < 4,
        PieceKind::Bishop => direction_index >= 4,
        PieceKind::King => step == 1,
        PieceKind::Pawn => {
            // Light pawns strike toward row 0, so they threaten the scanned
            // square from the rows below it; Dark pawns the mirror.
            step == 1
                && match attacker_color {
                    Color::Light => direction_index == 6 || direction_index == 7,
                    Color::Dark => direction_index == 4 || direction_index == 5,
                }
        }
        PieceKind::Knight => false,
    }
}
