use std::path::Path;
use pyrrhic_rs::{DtzProbeValue, EngineAdapter, TableBases, WdlProbeResult};
use shakmaty::{attacks, Bitboard, Chess, Color, Position, Role, Square};
use crate::*;

/*----------------------------------------------------------------*/

#[derive(Clone)]
pub struct SyzygyAdapter;

impl EngineAdapter for SyzygyAdapter {
    fn pawn_attacks(color: pyrrhic_rs::Color, sq: u64) -> u64 {
        attacks::pawn_attacks(match color {
            pyrrhic_rs::Color::White => Color::White,
            pyrrhic_rs::Color::Black => Color::Black,
        }, Square::new(sq as u32)).0
    }

    fn knight_attacks(sq: u64) -> u64 {
        attacks::knight_attacks(Square::new(sq as u32)).0
    }

    fn king_attacks(sq: u64) -> u64 {
        attacks::king_attacks(Square::new(sq as u32)).0
    }

    fn bishop_attacks(sq: u64, blockers: u64) -> u64 {
        attacks::bishop_attacks(Square::new(sq as u32), Bitboard(blockers)).0
    }

    fn rook_attacks(sq: u64, blockers: u64) -> u64 {
        attacks::rook_attacks(Square::new(sq as u32), Bitboard(blockers)).0
    }

    fn queen_attacks(sq: u64, blockers: u64) -> u64 {
        attacks::queen_attacks(Square::new(sq as u32), Bitboard(blockers)).0
    }
}

/*----------------------------------------------------------------*/

/// Query in the shape the Syzygy probing code expects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RtbProbeData {
    pub white: u64,
    pub black: u64,
    pub kings: u64,
    pub queens: u64,
    pub rooks: u64,
    pub bishops: u64,
    pub knights: u64,
    pub pawns: u64,
    pub rule50: u32,
    /// En passant square index, 0 if none.
    pub ep: u32,
    pub white_to_move: bool,
}

impl RtbProbeData {
    pub fn new(pos: &Chess) -> RtbProbeData {
        let board = pos.board();

        RtbProbeData {
            white: board.by_color(Color::White).0,
            black: board.by_color(Color::Black).0,
            kings: board.by_role(Role::King).0,
            queens: board.by_role(Role::Queen).0,
            rooks: board.by_role(Role::Rook).0,
            bishops: board.by_role(Role::Bishop).0,
            knights: board.by_role(Role::Knight).0,
            pawns: board.by_role(Role::Pawn).0,
            rule50: pos.halfmoves(),
            ep: pos.ep_target().map_or(0, |sq| sq as u32),
            white_to_move: pos.turn() == Color::White,
        }
    }
}

/*----------------------------------------------------------------*/

/// Raw access to a set of Syzygy WDL/DTZ tables.
pub trait SyzygyTables: Send + Sync {
    /// Largest piece count, kings included, with all tables present.
    fn max_pieces(&self) -> u32;

    /// -2 loss, -1 blessed loss, 0 draw, 1 cursed win, 2 win.
    fn probe_wdl(&self, data: &RtbProbeData) -> Option<i32>;

    /// Signed distance to zeroing in plies, positive when the side to move wins.
    fn probe_dtz(&self, data: &RtbProbeData) -> Option<i32>;
}

#[inline]
fn wdl_value(wdl: WdlProbeResult) -> i32 {
    match wdl {
        WdlProbeResult::Loss => -2,
        WdlProbeResult::BlessedLoss => -1,
        WdlProbeResult::Draw => 0,
        WdlProbeResult::CursedWin => 1,
        WdlProbeResult::Win => 2,
    }
}

impl SyzygyTables for TableBases<SyzygyAdapter> {
    #[inline]
    fn max_pieces(&self) -> u32 {
        TableBases::max_pieces(self)
    }

    fn probe_wdl(&self, data: &RtbProbeData) -> Option<i32> {
        if (data.white | data.black).count_ones() > TableBases::max_pieces(self) {
            return None;
        }

        TableBases::probe_wdl(
            self,
            data.white,
            data.black,
            data.kings,
            data.queens,
            data.rooks,
            data.bishops,
            data.knights,
            data.pawns,
            data.ep,
            data.white_to_move,
        ).ok().map(wdl_value)
    }

    fn probe_dtz(&self, data: &RtbProbeData) -> Option<i32> {
        if (data.white | data.black).count_ones() > TableBases::max_pieces(self) {
            return None;
        }

        let result = self.probe_root(
            data.white,
            data.black,
            data.kings,
            data.queens,
            data.rooks,
            data.bishops,
            data.knights,
            data.pawns,
            data.rule50,
            data.ep,
            data.white_to_move,
        ).ok()?;

        match result.root {
            DtzProbeValue::Checkmate => Some(-1),
            DtzProbeValue::Stalemate => Some(0),
            DtzProbeValue::Failed => None,
            DtzProbeValue::DtzResult(res) => Some(wdl_value(res.wdl).signum() * res.dtz as i32),
        }
    }
}

/// Opens the Syzygy tables in `path`, which may list several directories
/// separated the same way as `PATH`.
pub fn load_syzygy(path: &Path) -> Result<TableBases<SyzygyAdapter>> {
    if let Some(missing) = std::env::split_paths(path).find(|dir| !dir.is_dir()) {
        return Err(TbError::InvalidPath(missing));
    }

    let path_str = path.to_string_lossy();

    TableBases::<SyzygyAdapter>::new(path_str.as_ref()).map_err(|e| TbError::Syzygy {
        path: path.to_path_buf(),
        reason: format!("{:?}", e),
    })
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
    fn test_probe_data() {
        let data = RtbProbeData::new(&chess("8/8/3pk3/8/8/3NK3/3N4/8 w - - 70 1"));

        assert_eq!((data.white | data.black).count_ones(), 5);
        assert_eq!(data.knights.count_ones(), 2);
        assert_eq!(data.pawns & data.black, data.pawns);
        assert_eq!(data.rule50, 70);
        assert_eq!(data.ep, 0);
        assert!(data.white_to_move);

        let data = RtbProbeData::new(&chess("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1"));
        assert_eq!(data.ep, Square::D6 as u32);
    }

    #[test]
    fn test_adapter_attacks() {
        assert_eq!(SyzygyAdapter::knight_attacks(0), (Bitboard::from(Square::B3) | Bitboard::from(Square::C2)).0);
        assert_eq!(SyzygyAdapter::king_attacks(63).count_ones(), 3);
        assert_eq!(SyzygyAdapter::rook_attacks(0, 0).count_ones(), 14);
        assert_eq!(SyzygyAdapter::pawn_attacks(pyrrhic_rs::Color::White, 12), (Bitboard::from(Square::D3) | Bitboard::from(Square::F3)).0);
    }

    #[test]
    fn test_missing_directory() {
        let err = load_syzygy(Path::new("/no/such/dir")).err();
        assert!(matches!(err, Some(TbError::InvalidPath(_))));
    }
}
