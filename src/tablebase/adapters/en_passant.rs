use shakmaty::{Chess, Position};
use crate::*;

/*----------------------------------------------------------------*/

/// Re-checks a drawn verdict for a position with an en passant square.
///
/// Gaviota ignores en passant, so a draw may hide a forced en passant capture. If the
/// side to move has any other legal move the verdict stands. Otherwise every en passant
/// capture is probed with `probe` at `ply + 1` and the best reply wins. A failed child
/// probe fails the whole probe.
pub fn resolve_en_passant<F>(pos: &Chess, ply: i32, score: Score, mut probe: F) -> Option<Score>
where
    F: FnMut(&Chess, i32) -> Option<Score>,
{
    if score != 0 || pos.ep_target().is_none() {
        return Some(score);
    }

    let moves = pos.legal_moves();

    if moves.iter().any(|mv| !mv.is_en_passant()) {
        return Some(score);
    }

    let mut best = None;

    for mv in &moves {
        let child_score = -probe(&pos.after(mv), ply + 1)?;
        log::trace!("en passant reply {:?} scores {}", mv, child_score);
        best = best.max(Some(child_score));
    }

    Some(best.unwrap_or(score))
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use shakmaty::{fen::Fen, CastlingMode};
    use super::*;

    fn chess(fen: &str) -> Chess {
        fen.parse::<Fen>().unwrap().into_position(CastlingMode::Standard).unwrap()
    }

    // White king boxed in on h1 and e5 blocked, only exd6 is legal.
    const FORCED_EP: &str = "8/8/4b3/3pP3/8/6k1/7p/7K w - d6 0 1";

    #[test]
    fn test_forced_capture() {
        let pos = chess(FORCED_EP);
        let moves = pos.legal_moves();

        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_en_passant());

        let score = resolve_en_passant(&pos, 3, Score::ZERO, |child, ply| {
            assert_eq!(ply, 4);
            assert_eq!(child.piece_count(), 5);
            Some(-Score::mate(ply + 10))
        });

        assert_eq!(score, Some(Score::mate(14)));
    }

    #[test]
    fn test_failed_child() {
        let pos = chess(FORCED_EP);

        assert_eq!(resolve_en_passant(&pos, 0, Score::ZERO, |_, _| None), None);
    }

    #[test]
    fn test_other_moves() {
        let pos = chess("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let mut probes = 0;

        let score = resolve_en_passant(&pos, 0, Score::ZERO, |_, _| {
            probes += 1;
            None
        });

        assert_eq!(score, Some(Score::ZERO));
        assert_eq!(probes, 0);
    }

    #[test]
    fn test_decisive_score() {
        let pos = chess(FORCED_EP);

        assert_eq!(resolve_en_passant(&pos, 0, Score(25), |_, _| None), Some(Score(25)));
    }
}
