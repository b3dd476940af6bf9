use shakmaty::{Bitboard, Chess, Color, Position, Role, Square};
use crate::*;

/*----------------------------------------------------------------*/

pub const PAWN_VALUE: i32 = 92;
pub const QUEEN_VALUE: i32 = 1244;

/// First two ranks, where a defending king can shelter a pawn about to promote.
const PAWN_SHELTER: Bitboard = Bitboard(0xFFFF);

/// Queen vs pawn on the seventh rank, with the pawn heading for rank 1.
///
/// Rook and bishop pawns supported by their king hold the draw unless the attacking
/// king is close enough, which the masks give per pawn square.
pub fn kqkp_eval(strong_king: Square, weak_king: Square, pawn: Square) -> i32 {
    let supported = PAWN_SHELTER.contains(weak_king)
        && (pawn.file() as i32 - weak_king.file() as i32).abs() <= 2;

    let can_win = !supported || match pawn {
        Square::A2 => Bitboard(0x0F1F1F1F1F).contains(strong_king),
        Square::C2 => Bitboard(0x071F1F1F).contains(strong_king),
        Square::F2 => Bitboard(0xE0F8F8F8).contains(strong_king),
        Square::H2 => Bitboard(0xF0F8F8F8F8).contains(strong_king),
        _ => true,
    };

    let score = QUEEN_VALUE - PAWN_VALUE - 20 * strong_king.distance(pawn) as i32;

    if can_win { score } else { score / 50 }
}

#[inline]
fn rotate(sq: Square) -> Square {
    Square::new(63 - sq as u32)
}

/// Static score, from white's point of view, of a king and queen against a king and pawn.
/// `None` for any other material.
pub fn kqkp_score(pos: &Chess) -> Option<i32> {
    let board = pos.board();
    let comp = pos.composition();

    let queen_vs_pawn = |strong: Color| {
        comp == Composition::EMPTY.with_added(strong, Role::Queen).with_added(!strong, Role::Pawn)
    };

    let pawn_of = |color: Color| (board.by_color(color) & board.by_role(Role::Pawn)).first();

    if queen_vs_pawn(Color::White) {
        let pawn = pawn_of(Color::Black)?;
        return Some(kqkp_eval(board.king_of(Color::White)?, board.king_of(Color::Black)?, pawn));
    }

    if queen_vs_pawn(Color::Black) {
        let pawn = pawn_of(Color::White)?;
        return Some(-kqkp_eval(
            rotate(board.king_of(Color::Black)?),
            rotate(board.king_of(Color::White)?),
            rotate(pawn),
        ));
    }

    None
}

/*----------------------------------------------------------------*/
