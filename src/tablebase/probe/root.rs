use shakmaty::{Chess, Color, Move, Position};
use crate::*;

/*----------------------------------------------------------------*/

impl TbProber {
    /// Filters the root moves of a tablebase win.
    ///
    /// Returns the moves that do not lose ground when the root is a win but no move can be
    /// shown to make progress, in which case the caller should only search those moves.
    /// Returns `None` when the normal root move list should be used.
    pub fn get_search_moves(&self, pos: &Chess, legal_moves: &[Move], tt: &TTable) -> Option<Vec<Move>> {
        let ply = 0;
        let mut root_ent = TTData::default();

        if !self.tb_probe(pos, ply, -Score::MATE, Score::MATE, tt, &mut root_ent)
            || root_ent.bound() == TTBound::UpperBound
        {
            return None;
        }

        let root_score = root_ent.score(ply);
        if !root_score.is_win() {
            return None;
        }

        let mut has_progress = false;
        let mut moves_to_search = Vec::new();

        for mv in legal_moves {
            let child = pos.after(mv);
            let mut ent = TTData::default();
            let mut progress = false;
            let mut bad = false;

            if self.tb_probe(&child, ply + 1, -Score::MATE, Score::MATE, tt, &mut ent) {
                let score = -ent.score(ply + 1);

                progress = score >= root_score && matches!(ent.bound(), TTBound::Exact | TTBound::UpperBound);
                // RTB scores can be off by one
                bad = score < root_score - 1;
            }

            has_progress |= progress;
            if !bad {
                moves_to_search.push(mv.clone());
            }
        }

        log::debug!(
            "Root tablebase win {}: {} of {} moves kept, progress {}",
            root_score,
            moves_to_search.len(),
            legal_moves.len(),
            has_progress,
        );

        (!has_progress && !moves_to_search.is_empty()).then_some(moves_to_search)
    }

    /// Replaces the tail of `pv` by a DTM-optimal line once it reaches a tablebase win
    /// that beats the 50-move rule.
    pub fn extend_pv(&self, root: &Chess, pv: &mut Vec<Move>, tt: &TTable) {
        let mut pos = root.clone();
        let mut ply = 0;

        let mut keep = None;
        for (i, mv) in pv.iter().enumerate() {
            pos.play_unchecked(mv);

            if self.dtm_probe(&pos, ply, tt).is_some_and(|score| proven_mate(&pos, ply, score)) {
                keep = Some(i + 1);
                break;
            }
        }

        if let Some(len) = keep {
            pv.truncate(len);
        }

        let Some(score) = self.dtm_probe(&pos, ply, tt) else {
            return;
        };

        if !proven_mate(&pos, ply, score) {
            return;
        }

        let score = white_pov(&pos, score);

        loop {
            let next = pos.legal_moves().into_iter().find(|mv| {
                let child = pos.after(mv);

                self.dtm_probe(&child, ply + 1, tt).map(|s| white_pov(&child, s)) == Some(score)
            });

            let Some(mv) = next else {
                break;
            };

            pos.play_unchecked(&mv);
            pv.push(mv);
            ply += 1;
        }
    }
}

/*----------------------------------------------------------------*/

/// Win or loss whose mate arrives before the 50-move rule can claim a draw.
#[inline]
fn proven_mate(pos: &Chess, ply: i32, score: Score) -> bool {
    score.abs().is_win() && MATE0 - 1 - score.abs().0 - ply <= 100 - pos.half_move_clock()
}

#[inline]
fn white_pov(pos: &Chess, score: Score) -> Score {
    match pos.turn() {
        Color::White => score,
        Color::Black => -score,
    }
}
