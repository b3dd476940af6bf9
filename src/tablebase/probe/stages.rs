use shakmaty::Chess;
use crate::*;

/*----------------------------------------------------------------*/

/// One step of [`TbProber::tb_probe`]. Stages run in the order of [`PROBE_STAGES`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProbeStage {
    /// Proven DTM score cached in the TT.
    CachedDtm,
    /// Syzygy WDL, or Gaviota WDL when Syzygy cannot answer.
    Wdl,
    /// Gaviota DTM when the search looks for the fastest mate.
    DtmFirst,
    /// Syzygy DTZ.
    Dtz,
    /// Gaviota DTM when the search does not look for the fastest mate.
    DtmLate,
}

pub const PROBE_STAGES: [ProbeStage; 5] = [
    ProbeStage::CachedDtm,
    ProbeStage::Wdl,
    ProbeStage::DtmFirst,
    ProbeStage::Dtz,
    ProbeStage::DtmLate,
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StageResult {
    /// The stage could not run for this position.
    NotApplicable,
    /// The stage ran without producing a score that settles the window.
    Inconclusive,
    /// The entry holds a final answer.
    Resolved,
}

/// State carried from one stage to the next.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ProbeAccumulator {
    /// A DTM score was found, possibly downgraded to a draw bound.
    pub has_dtm: bool,
    /// A WDL or DTZ score was found.
    pub has_result: bool,
    /// The position is a draw by the 50-move rule hiding a win or loss.
    pub frustrated: bool,
    /// Gaviota DTM is probed before Syzygy DTZ.
    pub dtm_first: bool,
}

#[derive(Debug, Copy, Clone)]
pub struct ProbeRequest<'a> {
    pub pos: &'a Chess,
    pub ply: i32,
    pub alpha: Score,
    pub beta: Score,
    pub hmc: i32,
    pub n_pieces: u32,
}

/*----------------------------------------------------------------*/

impl TbProber {
    /// Probes all available tables for `pos` searched at `ply` with window `(alpha, beta)`.
    ///
    /// Returns false when no table could say anything and the position must be searched.
    /// Otherwise `ent` holds a score and bound, which may not settle the window.
    pub fn tb_probe(
        &self,
        pos: &Chess,
        ply: i32,
        alpha: Score,
        beta: Score,
        tt: &TTable,
        ent: &mut TTData,
    ) -> bool {
        self.tb_probe_with_count(pos, ply, alpha, beta, tt, ent, pos.piece_count())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn tb_probe_with_count(
        &self,
        pos: &Chess,
        ply: i32,
        alpha: Score,
        beta: Score,
        tt: &TTable,
        ent: &mut TTData,
        n_pieces: u32,
    ) -> bool {
        let req = ProbeRequest {
            pos,
            ply,
            alpha,
            beta,
            hmc: pos.half_move_clock(),
            n_pieces,
        };
        let mut acc = ProbeAccumulator::default();

        for stage in PROBE_STAGES {
            if self.run_stage(stage, &req, tt, ent, &mut acc) == StageResult::Resolved {
                log::trace!("{:?} resolved ply {} with {} {:?}", stage, ply, ent.score(ply), ent.bound());
                return true;
            }
        }

        acc.has_result || acc.has_dtm
    }

    pub fn run_stage(
        &self,
        stage: ProbeStage,
        req: &ProbeRequest,
        tt: &TTable,
        ent: &mut TTData,
        acc: &mut ProbeAccumulator,
    ) -> StageResult {
        match stage {
            ProbeStage::CachedDtm => self.cached_dtm_stage(req, tt, ent, acc),
            ProbeStage::Wdl => self.wdl_stage(req, ent, acc),
            ProbeStage::DtmFirst => {
                acc.dtm_first = acc.frustrated || req.alpha.is_loss() || req.beta.is_win();

                if acc.dtm_first {
                    self.dtm_stage(req, ent, acc)
                } else {
                    StageResult::NotApplicable
                }
            }
            ProbeStage::Dtz => self.dtz_stage(req, ent, acc),
            ProbeStage::DtmLate => {
                if acc.dtm_first {
                    StageResult::NotApplicable
                } else {
                    self.dtm_stage(req, ent, acc)
                }
            }
        }
    }

    /*----------------------------------------------------------------*/

    fn cached_dtm_stage(&self, req: &ProbeRequest, tt: &TTable, ent: &mut TTData, acc: &mut ProbeAccumulator) -> StageResult {
        if req.n_pieces > TT_DTM_MAX_PIECES {
            return StageResult::NotApplicable;
        }

        match tt.probe_dtm(req.pos, req.ply) {
            Some(score) => accept_dtm(req, score, ent, acc),
            None => StageResult::Inconclusive,
        }
    }

    fn dtm_stage(&self, req: &ProbeRequest, ent: &mut TTData, acc: &mut ProbeAccumulator) -> StageResult {
        if acc.has_dtm || req.n_pieces > self.gtb_max_pieces() {
            return StageResult::NotApplicable;
        }

        match self.gtb_probe_dtm(req.pos, req.ply) {
            Some(score) => accept_dtm(req, score, ent, acc),
            None => StageResult::Inconclusive,
        }
    }

    fn wdl_stage(&self, req: &ProbeRequest, ent: &mut TTData, acc: &mut ProbeAccumulator) -> StageResult {
        // A win or loss that ignores the half-move clock may still be a 50-move draw.
        let mut probe = None;

        if req.n_pieces <= self.rtb_max_pieces() {
            probe = self.rtb_probe_wdl(req.pos, req.ply, ent)
                .map(|score| (score, score == 0 || req.hmc == 0));
        }

        if probe.is_none() && req.n_pieces <= self.gtb_max_pieces() {
            probe = self.gtb_probe_wdl(req.pos, req.ply)
                .map(|score| (score, score == 0 || (req.hmc == 0 && req.n_pieces <= GTB_WDL_EXACT_PIECES)));
        }

        let Some((score, trusted)) = probe else {
            return StageResult::NotApplicable;
        };

        if !trusted {
            if score > 0 && req.beta <= self.params().wdl_win_beta_threshold {
                ent.set_score(Score::ZERO, req.ply);
                ent.set_bound(TTBound::LowerBound);
                return StageResult::Resolved;
            }

            if score < 0 && req.alpha >= self.params().wdl_loss_alpha_threshold {
                ent.set_score(Score::ZERO, req.ply);
                ent.set_bound(TTBound::UpperBound);
                return StageResult::Resolved;
            }

            return StageResult::Inconclusive;
        }

        acc.has_result = true;
        ent.set_score(score, req.ply);

        if score > 0 {
            ent.set_bound(TTBound::LowerBound);
            return resolved_if(score >= req.beta);
        }

        if score < 0 {
            ent.set_bound(TTBound::UpperBound);
            return resolved_if(score <= req.alpha);
        }

        ent.set_bound(TTBound::Exact);

        let eval = ent.eval_score();
        let min_frustrated = self.params().min_frustrated;

        if eval == 0
            || (eval > 0 && req.beta <= min_frustrated)
            || (eval < 0 && req.alpha >= -min_frustrated)
        {
            return StageResult::Resolved;
        }

        acc.frustrated = true;
        StageResult::Inconclusive
    }

    fn dtz_stage(&self, req: &ProbeRequest, ent: &mut TTData, acc: &mut ProbeAccumulator) -> StageResult {
        if req.n_pieces > self.rtb_max_pieces() {
            return StageResult::NotApplicable;
        }

        let Some(score) = self.rtb_probe_dtz(req.pos, req.ply, ent) else {
            return StageResult::Inconclusive;
        };

        acc.has_result = true;
        ent.set_score(score, req.ply);

        if score > 0 {
            ent.set_bound(TTBound::LowerBound);
            resolved_if(score >= req.beta)
        } else if score < 0 {
            ent.set_bound(TTBound::UpperBound);
            resolved_if(score <= req.alpha)
        } else {
            ent.set_bound(TTBound::Exact);
            StageResult::Resolved
        }
    }
}

/*----------------------------------------------------------------*/

#[inline]
fn resolved_if(cond: bool) -> StageResult {
    if cond { StageResult::Resolved } else { StageResult::Inconclusive }
}

/// Takes a DTM score as exact if the mate beats the 50-move rule,
/// otherwise keeps only a draw bound on the winning side.
fn accept_dtm(req: &ProbeRequest, score: Score, ent: &mut TTData, acc: &mut ProbeAccumulator) -> StageResult {
    if score == 0 || rule50_margin(score, req.ply, req.hmc, ent) >= 0 {
        ent.set_score(score, req.ply);
        ent.set_bound(TTBound::Exact);
        return StageResult::Resolved;
    }

    ent.set_score(Score::ZERO, req.ply);
    ent.set_bound(if score > 0 { TTBound::LowerBound } else { TTBound::UpperBound });
    acc.has_dtm = true;

    StageResult::Inconclusive
}
