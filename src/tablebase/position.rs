use shakmaty::{
    zobrist::{Zobrist64, ZobristHash},
    Chess,
    Color,
    EnPassantMode,
    Move,
    Position,
    Role,
    Square,
};
use crate::*;

/*----------------------------------------------------------------*/

/// Position queries needed by the tablebase probes.
pub trait TbPosition {
    fn piece_count(&self) -> u32;

    fn composition(&self) -> Composition;

    #[inline]
    fn material_id(&self) -> MaterialId {
        self.composition().id()
    }

    fn has_castling_rights(&self) -> bool;

    fn half_move_clock(&self) -> i32;

    fn ep_target(&self) -> Option<Square>;

    /// Upper bound on the number of non-capturing pawn advances left in the game.
    fn max_pawn_moves(&self) -> u32;

    fn zobrist(&self) -> u64;

    fn after(&self, mv: &Move) -> Self;
}

impl TbPosition for Chess {
    #[inline]
    fn piece_count(&self) -> u32 {
        self.board().occupied().count() as u32
    }

    #[inline]
    fn composition(&self) -> Composition {
        Composition::from_board(self.board())
    }

    #[inline]
    fn has_castling_rights(&self) -> bool {
        !self.castles().is_empty()
    }

    #[inline]
    fn half_move_clock(&self) -> i32 {
        self.halfmoves() as i32
    }

    #[inline]
    fn ep_target(&self) -> Option<Square> {
        self.ep_square(EnPassantMode::Legal)
    }

    fn max_pawn_moves(&self) -> u32 {
        let board = self.board();
        let mut moves = 0;

        for sq in board.by_color(Color::White) & board.by_role(Role::Pawn) {
            moves += 6 - sq.rank() as u32;
        }

        for sq in board.by_color(Color::Black) & board.by_role(Role::Pawn) {
            moves += sq.rank() as u32 - 1;
        }

        moves
    }

    #[inline]
    fn zobrist(&self) -> u64 {
        self.zobrist_hash::<Zobrist64>(EnPassantMode::Legal).0
    }

    #[inline]
    fn after(&self, mv: &Move) -> Chess {
        let mut child = self.clone();
        child.play_unchecked(mv);
        child
    }
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use shakmaty::{fen::Fen, CastlingMode};
    use super::*;

    fn chess(fen: &str) -> Chess {
        fen.parse::<Fen>().unwrap().into_position(CastlingMode::Standard).unwrap()
    }

    #[test]
    fn test_max_pawn_moves() {
        assert_eq!(chess("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").max_pawn_moves(), 5);
        assert_eq!(chess("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1").max_pawn_moves(), 4);
        assert_eq!(chess("4k3/4p3/8/8/8/8/4P3/4K3 w - - 0 1").max_pawn_moves(), 10);
        assert_eq!(chess("4k3/8/8/8/8/8/p7/4K3 w - - 0 1").max_pawn_moves(), 0);
        assert_eq!(chess("3qk3/8/8/8/8/8/8/3QK3 w - - 0 1").max_pawn_moves(), 0);
    }

    #[test]
    fn test_position_queries() {
        let pos = chess("r3k3/8/8/3pP3/8/8/8/4K3 w q d6 0 2");

        assert_eq!(pos.piece_count(), 5);
        assert!(pos.has_castling_rights());
        assert_eq!(pos.ep_target(), Some(Square::D6));
        assert_eq!(pos.half_move_clock(), 0);
        assert_eq!(pos.material_id(), MaterialId(weights::P + weights::p + weights::r));

        let mv = pos.legal_moves().into_iter().find(|m| m.is_en_passant()).unwrap();
        let child = pos.after(&mv);

        assert_eq!(child.piece_count(), 4);
        assert_eq!(pos.piece_count(), 5);
        assert_ne!(child.zobrist(), pos.zobrist());
    }
}
