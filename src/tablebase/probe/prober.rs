use std::{path::{Path, PathBuf}, sync::Arc};
use shakmaty::Chess;
use crate::*;

/*----------------------------------------------------------------*/

/// Positions with at most this many pieces may have proven DTM scores cached in the TT.
pub const TT_DTM_MAX_PIECES: u32 = 4;

/// Gaviota WDL wins and losses are exact up to this many pieces when the half-move clock is zero.
pub const GTB_WDL_EXACT_PIECES: u32 = 4;

/// Returns how many plies a win or loss can still spare before the 50-move rule turns it
/// into a draw. A negative margin is recorded as the eval distance of `ent`.
pub fn rule50_margin(dtm_score: Score, ply: i32, hmc: i32, ent: &mut TTData) -> i32 {
    let margin = (100 - hmc) - (MATE0 - 1 - dtm_score.abs().0 - ply);

    if margin < 0 {
        ent.update_eval_score(Score(if dtm_score > 0 { -margin } else { margin }));
    }

    margin
}

/*----------------------------------------------------------------*/

/// Combines Gaviota DTM and Syzygy WDL/DTZ probes into search scores.
pub struct TbProber {
    gaviota: Option<Arc<dyn GaviotaTables>>,
    syzygy: Option<Arc<dyn SyzygyTables>>,
    syzygy_path: Option<PathBuf>,
    sub_mate: Arc<SubMateCache>,
    params: ProbeParams,
}

impl TbProber {
    pub fn new(config: &TbConfig) -> Result<TbProber> {
        init_bounds();

        let mut prober = TbProber {
            gaviota: None,
            syzygy: None,
            syzygy_path: None,
            sub_mate: Arc::new(SubMateCache::new()),
            params: config.params,
        };

        if let Some(path) = &config.syzygy_path {
            prober.set_syzygy_path(path)?;
        }

        if config.prewarm {
            prober.sub_mate.prewarm();
        }

        log::debug!(
            "Tablebase prober ready: gaviota {} pieces, syzygy {} pieces",
            prober.gtb_max_pieces(),
            prober.rtb_max_pieces(),
        );

        Ok(prober)
    }

    #[inline]
    pub fn with_gaviota(mut self, tables: Arc<dyn GaviotaTables>) -> TbProber {
        self.set_gaviota(Some(tables));
        self
    }

    #[inline]
    pub fn with_syzygy(mut self, tables: Arc<dyn SyzygyTables>) -> TbProber {
        self.syzygy = Some(tables);
        self.syzygy_path = None;
        self
    }

    #[inline]
    pub fn with_sub_mate_cache(mut self, cache: Arc<SubMateCache>) -> TbProber {
        self.sub_mate = cache;
        self
    }

    /// Loads Syzygy tables from `path`. An empty path unloads them, an unchanged path is a no-op.
    pub fn set_syzygy_path(&mut self, path: &Path) -> Result<()> {
        if self.syzygy.is_some() && self.syzygy_path.as_deref() == Some(path) {
            return Ok(());
        }

        if path.as_os_str().is_empty() {
            log::debug!("Syzygy tables disabled");
            self.syzygy = None;
            self.syzygy_path = None;
            return Ok(());
        }

        let tables = load_syzygy(path).inspect_err(|e| log::warn!("{}", e))?;
        log::debug!("Loaded syzygy tables from {} with up to {} pieces", path.display(), SyzygyTables::max_pieces(&tables));

        self.syzygy = Some(Arc::new(tables));
        self.syzygy_path = Some(path.to_path_buf());
        Ok(())
    }

    #[inline]
    pub fn set_gaviota(&mut self, tables: Option<Arc<dyn GaviotaTables>>) {
        if let Some(tables) = &tables {
            log::debug!("Gaviota tables with up to {} pieces", tables.max_pieces());
        }

        self.gaviota = tables;
    }

    /*----------------------------------------------------------------*/

    #[inline]
    pub fn gtb_max_pieces(&self) -> u32 {
        self.gaviota.as_ref().map_or(0, |tb| tb.max_pieces())
    }

    #[inline]
    pub fn rtb_max_pieces(&self) -> u32 {
        self.syzygy.as_ref().map_or(0, |tb| tb.max_pieces())
    }

    /// Largest piece count any probe can answer. Four-piece DTM results may also come from the TT.
    #[inline]
    pub fn max_pieces(&self) -> u32 {
        TT_DTM_MAX_PIECES.max(self.gtb_max_pieces()).max(self.rtb_max_pieces())
    }

    #[inline]
    pub fn tb_enabled(&self) -> bool {
        self.gtb_max_pieces() > 0 || self.rtb_max_pieces() > 0
    }

    #[inline]
    pub fn params(&self) -> &ProbeParams {
        &self.params
    }

    #[inline]
    pub fn sub_mate_cache(&self) -> &Arc<SubMateCache> {
        &self.sub_mate
    }

    #[inline]
    pub fn max_sub_mate(&self, pos: &Chess) -> i32 {
        self.sub_mate.max_sub_mate_for(pos)
    }

    /*----------------------------------------------------------------*/

    pub fn gtb_probe_dtm(&self, pos: &Chess, ply: i32) -> Option<Score> {
        let tables = self.gaviota.as_ref()?;
        if pos.piece_count() > tables.max_pieces() {
            return None;
        }

        let data = GtbProbeData::new(pos);
        let (info, plies) = tables.probe_dtm(&data)?;
        let score = gtb_dtm_score(&data, ply, info, plies);

        resolve_en_passant(pos, ply, score, |child, ply| self.gtb_probe_dtm(child, ply))
    }

    pub fn gtb_probe_wdl(&self, pos: &Chess, ply: i32) -> Option<Score> {
        let tables = self.gaviota.as_ref()?;
        if pos.piece_count() > tables.max_pieces() {
            return None;
        }

        let data = GtbProbeData::new(pos);
        let info = tables.probe_wdl(&data)?;
        let score = gtb_wdl_score(&data, ply, info)?;

        resolve_en_passant(pos, ply, score, |child, ply| self.gtb_probe_wdl(child, ply))
    }

    /// Syzygy WDL probe. Wins and losses become mate scores bounded by the longest
    /// possible sequence of DTZ phases, cursed results become draws with a recorded distance.
    pub fn rtb_probe_wdl(&self, pos: &Chess, ply: i32, ent: &mut TTData) -> Option<Score> {
        let tables = self.syzygy.as_ref()?;
        if pos.piece_count() > tables.max_pieces() || pos.has_castling_rights() {
            return None;
        }

        let wdl = tables.probe_wdl(&RtbProbeData::new(pos))?;

        match wdl {
            0 => Some(Score::ZERO),
            1 | -1 => {
                if ent.eval_score() == 0 {
                    ent.set_eval_score(Score(wdl * self.params.max_frustrated_dist));
                }

                Some(Score::ZERO)
            }
            2 | -2 => {
                let plies_to_mate = self.max_sub_mate(pos) + max_dtz(pos.material_id());
                Some(Score(wdl.signum() * (MATE0 - ply - plies_to_mate - 2)))
            }
            _ => None,
        }
    }

    /// Syzygy DTZ probe, taking the half-move clock into account.
    pub fn rtb_probe_dtz(&self, pos: &Chess, ply: i32, ent: &mut TTData) -> Option<Score> {
        let tables = self.syzygy.as_ref()?;
        if pos.piece_count() > tables.max_pieces() || pos.has_castling_rights() {
            return None;
        }

        let dtz = tables.probe_dtz(&RtbProbeData::new(pos))?;

        if dtz == 0 {
            ent.set_eval_score(Score::ZERO);
            return Some(Score::ZERO);
        }

        let hmc = pos.half_move_clock();
        let max_hmc = dtz.abs() + hmc;
        let sign = dtz.signum();

        // DTZ can be off by one
        if max_hmc == 100 && hmc > 0 && approx_dtz(pos.material_id()) {
            return None;
        }

        if dtz.abs() <= 2 {
            if max_hmc > 101 {
                ent.update_eval_score(Score(sign * (max_hmc - 100)));
                return Some(Score::ZERO);
            }

            // DTZ can be wrong when mate in one
            if max_hmc == 101 {
                return None;
            }
        } else if max_hmc > 100 {
            let dist = if dtz.abs() <= 100 { max_hmc - 100 } else { self.params.max_frustrated_dist };
            ent.update_eval_score(Score(sign * dist));
            return Some(Score::ZERO);
        }

        let plies_to_mate = self.max_sub_mate(pos) + dtz.abs();
        Some(Score(sign * (MATE0 - ply - plies_to_mate - 2)))
    }

    /// Exact DTM score from the TT cache or the Gaviota tables.
    pub fn dtm_probe(&self, pos: &Chess, ply: i32, tt: &TTable) -> Option<Score> {
        if pos.piece_count() <= TT_DTM_MAX_PIECES {
            if let Some(score) = tt.probe_dtm(pos, ply) {
                return Some(score);
            }
        }

        self.gtb_probe_dtm(pos, ply)
    }
}

/*----------------------------------------------------------------*/

#[test]
fn test_rule50_margin() {
    let mut ent = TTData::default();

    assert_eq!(rule50_margin(Score::mate(2), 0, 99, &mut ent), 0);
    assert_eq!(ent.eval_score(), 0);

    let mut last = i32::MAX;
    for hmc in 0..=100 {
        let margin = rule50_margin(Score::mate(29 + 60), 29, hmc, &mut TTData::default());
        assert!(margin < last);
        last = margin;
    }

    assert_eq!(rule50_margin(-Score::mate(29 + 114 + 1), 29, 0, &mut ent), -14);
    assert_eq!(ent.eval_score(), -14);

    assert_eq!(rule50_margin(Score::mate(120 + 1), 0, 0, &mut ent), -20);
    assert_eq!(ent.eval_score(), -14);
}

#[test]
fn test_no_tables() {
    let prober = TbProber::new(&TbConfig::default()).unwrap();

    assert!(!prober.tb_enabled());
    assert_eq!(prober.max_pieces(), TT_DTM_MAX_PIECES);
    assert!(prober.sub_mate_cache().is_empty());
}

#[test]
fn test_bad_syzygy_path() {
    let config = TbConfig::new().syzygy_path("/no/such/dir");
    assert!(matches!(TbProber::new(&config), Err(TbError::InvalidPath(_))));
}
