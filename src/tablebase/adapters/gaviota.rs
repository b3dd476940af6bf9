use arrayvec::ArrayVec;
use shakmaty::{CastlingSide, Chess, Color, Position, Role, Square};
use crate::*;

/*----------------------------------------------------------------*/

pub const GTB_WOO: u8 = 8;
pub const GTB_WOOO: u8 = 4;
pub const GTB_BOO: u8 = 2;
pub const GTB_BOOO: u8 = 1;

/// Verdict of a Gaviota probe, from white's point of view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GtbInfo {
    Draw,
    WhiteMates,
    BlackMates,
}

/// Query in the shape the Gaviota probing code expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GtbProbeData {
    pub stm: Color,
    pub ep_square: Option<Square>,
    pub castles: u8,
    pub white: ArrayVec<(Square, Role), 16>,
    pub black: ArrayVec<(Square, Role), 16>,
    pub material: MaterialId,
}

impl GtbProbeData {
    pub fn new(pos: &Chess) -> GtbProbeData {
        let board = pos.board();
        let castles = pos.castles();
        let mut mask = 0;

        if castles.has(Color::White, CastlingSide::KingSide) { mask |= GTB_WOO; }
        if castles.has(Color::White, CastlingSide::QueenSide) { mask |= GTB_WOOO; }
        if castles.has(Color::Black, CastlingSide::KingSide) { mask |= GTB_BOO; }
        if castles.has(Color::Black, CastlingSide::QueenSide) { mask |= GTB_BOOO; }

        let pieces = |color: Color| {
            board.by_color(color)
                .into_iter()
                .filter_map(|sq| board.role_at(sq).map(|role| (sq, role)))
                .collect::<ArrayVec<_, 16>>()
        };

        GtbProbeData {
            stm: pos.turn(),
            ep_square: pos.ep_target(),
            castles: mask,
            white: pieces(Color::White),
            black: pieces(Color::Black),
            material: pos.material_id(),
        }
    }
}

/*----------------------------------------------------------------*/

/// Raw access to a set of Gaviota DTM tables.
pub trait GaviotaTables: Send + Sync {
    /// Largest piece count, kings included, with all tables present.
    fn max_pieces(&self) -> u32;

    /// Verdict and distance to mate in plies.
    fn probe_dtm(&self, data: &GtbProbeData) -> Option<(GtbInfo, u32)>;

    fn probe_wdl(&self, data: &GtbProbeData) -> Option<GtbInfo>;
}

#[inline]
fn from_stm(data: &GtbProbeData, score: Score) -> Score {
    match data.stm {
        Color::White => score,
        Color::Black => -score,
    }
}

/// Converts a raw DTM result into a root-relative score for the side to move.
pub fn gtb_dtm_score(data: &GtbProbeData, ply: i32, info: GtbInfo, plies: u32) -> Score {
    let score = match info {
        GtbInfo::Draw => Score::ZERO,
        GtbInfo::WhiteMates => Score::mate(ply + plies as i32 + 1),
        GtbInfo::BlackMates => -Score::mate(ply + plies as i32 + 1),
    };

    from_stm(data, score)
}

/// Converts a raw WDL result using the longest known mate of the composition.
/// Compositions without a measured bound give no result.
pub fn gtb_wdl_score(data: &GtbProbeData, ply: i32, info: GtbInfo) -> Option<Score> {
    let score = match info {
        GtbInfo::Draw => Score::ZERO,
        GtbInfo::WhiteMates => Score(max_dtm(data.material)? - ply),
        GtbInfo::BlackMates => -Score(max_dtm(data.material)? - ply),
    };

    Some(from_stm(data, score))
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
        let data = GtbProbeData::new(&chess("r3k2r/8/8/8/8/8/8/4K2R b Kq - 0 1"));

        assert_eq!(data.stm, Color::Black);
        assert_eq!(data.castles, GTB_WOO | GTB_BOOO);
        assert_eq!(data.ep_square, None);
        assert_eq!(data.white.len(), 2);
        assert_eq!(data.black.len(), 3);
        assert!(data.white.contains(&(Square::E1, Role::King)));
        assert!(data.black.contains(&(Square::H8, Role::Rook)));
    }

    #[test]
    fn test_dtm_score() {
        let white = GtbProbeData::new(&chess("8/8/4B3/8/kBK5/8/8/8 w - - 0 1"));
        let black = GtbProbeData::new(&chess("R5Q1/8/6k1/8/4q3/8/8/K7 b - - 0 1"));

        assert_eq!(gtb_dtm_score(&white, 0, GtbInfo::WhiteMates, 1), Score(MATE0 - 2));
        assert_eq!(gtb_dtm_score(&white, 5, GtbInfo::Draw, 0), Score::ZERO);
        assert_eq!(gtb_dtm_score(&black, 29, GtbInfo::WhiteMates, 22), Score(-(MATE0 - 29 - 23)));
        assert_eq!(gtb_dtm_score(&black, 29, GtbInfo::BlackMates, 22), Score(MATE0 - 29 - 23));
    }

    #[test]
    fn test_wdl_score() {
        let data = GtbProbeData::new(&chess("1R5Q/8/6k1/8/4q3/8/8/K7 b - - 0 1"));

        assert_eq!(gtb_wdl_score(&data, 29, GtbInfo::WhiteMates), Some(Score(-(31865 - 29))));
        assert_eq!(gtb_wdl_score(&data, 0, GtbInfo::Draw), Some(Score::ZERO));

        let data = GtbProbeData::new(&chess("4k3/8/8/8/8/8/8/QQQQK3 b - - 0 1"));
        assert_eq!(gtb_wdl_score(&data, 0, GtbInfo::WhiteMates), None);
    }
}
