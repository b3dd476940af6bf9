mod common;

use cherry_tb::*;
use common::*;

const PLY: i32 = 29;

fn probe(prober: &TbProber, fen: &str, alpha: i32, beta: i32) -> (bool, TTData) {
    let tt = TTable::new(1);
    let mut ent = TTData::default();
    let found = prober.tb_probe(&chess(fen), PLY, Score(alpha), Score(beta), &tt, &mut ent);

    (found, ent)
}

/*----------------------------------------------------------------*/

#[test]
fn test_dtz_frustrated_draw() {
    setup();

    const FEN: &str = "8/8/3pk3/8/8/3NK3/3N4/8 w - - 70 1";
    let prober = prober(None, Some(MockSyzygy::new(5).with(FEN, 2, Some(38))));

    let pos = chess(FEN);
    let tt = TTable::new(1);
    let mut ent = TTData::default();

    for (alpha, beta) in [(-MATE.0, MATE.0), (-15, 15)] {
        ent.clear();

        assert!(prober.tb_probe(&pos, PLY, Score(alpha), Score(beta), &tt, &mut ent));
        assert_eq!(ent.bound(), TTBound::Exact);
        assert_eq!(ent.score(PLY), 0);
        assert_eq!(ent.eval_score(), 8);
    }
}

#[test]
fn test_cursed_win_uses_dtm_distance() {
    setup();

    const FEN: &str = "8/8/4k1N1/p7/8/8/3N2K1/8 w - - 0 1";
    let prober = prober(
        Some(MockGaviota::new(5).with(FEN, GtbInfo::WhiteMates, 193)),
        Some(MockSyzygy::new(5).with(FEN, 1, Some(116))),
    );

    let (found, ent) = probe(&prober, FEN, -MATE.0, MATE.0);
    assert!(found);
    assert_eq!(ent.bound(), TTBound::Exact);
    assert_eq!(ent.score(PLY), 0);
    assert_eq!(ent.eval_score(), 93);

    let (found, ent) = probe(&prober, FEN, -15, 15);
    assert!(found);
    assert_eq!(ent.bound(), TTBound::Exact);
    assert_eq!(ent.score(PLY), 0);
    assert_eq!(ent.eval_score(), prober.params().max_frustrated_dist);
}

#[test]
fn test_dtm_beyond_rule50() {
    setup();

    const FEN: &str = "1R5Q/8/6k1/8/4q3/8/8/K7 b - - 0 1";
    let prober = prober(Some(MockGaviota::new(5).with(FEN, GtbInfo::WhiteMates, 114)), None);

    let (found, ent) = probe(&prober, FEN, -MATE.0, MATE.0);
    assert!(found);
    assert_eq!(ent.bound(), TTBound::UpperBound);
    assert_eq!(ent.score(PLY), 0);
    assert_eq!(ent.eval_score(), -14);
}

#[test]
fn test_dtm_within_rule50() {
    setup();

    const FEN: &str = "R5Q1/8/6k1/8/4q3/8/8/K7 b - - 0 1";
    let prober = prober(
        Some(MockGaviota::new(5).with(FEN, GtbInfo::WhiteMates, 22)),
        Some(MockSyzygy::new(5).with(FEN, -2, Some(-21))),
    );

    let (found, ent) = probe(&prober, FEN, -MATE.0, MATE.0);
    assert!(found);
    assert_eq!(ent.bound(), TTBound::Exact);
    assert_eq!(ent.score(PLY), -(MATE0 - PLY - 23));

    let (found, ent) = probe(&prober, FEN, -10, 10);
    assert!(found);
    assert_eq!(ent.bound(), TTBound::UpperBound);
    assert!(ent.score(PLY).is_loss());
}

#[test]
fn test_mate_in_one() {
    setup();

    for hmc in [0, 99] {
        let fen = format!("8/8/4B3/8/kBK5/8/8/8 w - - {} 1", hmc);
        let prober = prober(
            Some(MockGaviota::new(5).with(&fen, GtbInfo::WhiteMates, 1)),
            Some(MockSyzygy::new(5).with(&fen, 2, Some(1))),
        );

        let (found, ent) = probe(&prober, &fen, -MATE.0, MATE.0);
        assert!(found);
        assert_eq!(ent.bound(), TTBound::Exact);
        assert_eq!(ent.score(PLY), MATE0 - 2 - PLY);
    }

    const FEN: &str = "8/8/4B3/8/kBK5/8/8/8 w - - 99 1";
    let prober = prober(None, Some(MockSyzygy::new(5).with(FEN, 2, Some(1))));

    let (found, _) = probe(&prober, FEN, -MATE.0, MATE.0);
    assert!(!found);
}

#[test]
fn test_untrusted_wdl_bounds() {
    setup();

    const FEN: &str = "1R5Q/8/6k1/8/4q3/8/8/K7 b - - 5 1";
    let prober = prober(None, Some(MockSyzygy::new(5).with(FEN, -2, None)));

    let (found, ent) = probe(&prober, FEN, 5, 10);
    assert!(found);
    assert_eq!(ent.bound(), TTBound::UpperBound);
    assert_eq!(ent.score(PLY), 0);

    const WIN: &str = "8/8/3pk3/8/8/3NK3/3N4/8 w - - 5 1";
    let prober = common::prober(None, Some(MockSyzygy::new(5).with(WIN, 2, None)));

    let (found, ent) = probe(&prober, WIN, -10, 0);
    assert!(found);
    assert_eq!(ent.bound(), TTBound::LowerBound);
    assert_eq!(ent.score(PLY), 0);
}

#[test]
fn test_cached_dtm() {
    setup();

    const FEN: &str = "8/8/4B3/8/kBK5/8/8/8 w - - 0 1";
    let prober = prober(None, None);
    let tt = TTable::new(1);
    let pos = chess(FEN);

    tt.store_dtm(&pos, PLY, Score::mate(PLY + 2));

    let mut ent = TTData::default();
    assert!(prober.tb_probe(&pos, PLY, -MATE, MATE, &tt, &mut ent));
    assert_eq!(ent.bound(), TTBound::Exact);
    assert_eq!(ent.score(PLY), Score::mate(PLY + 2));

    let mut ent = TTData::default();
    assert!(prober.tb_probe(&pos, 3, -MATE, MATE, &tt, &mut ent));
    assert_eq!(ent.score(3), Score::mate(5));
    assert_eq!(prober.dtm_probe(&pos, 3, &tt), Some(Score::mate(5)));
}

#[test]
fn test_wdl_stage_marks_frustrated() {
    setup();

    const FEN: &str = "8/8/4k1N1/p7/8/8/3N2K1/8 w - - 0 1";
    let prober = prober(None, Some(MockSyzygy::new(5).with(FEN, 1, Some(116))));
    let pos = chess(FEN);
    let tt = TTable::new(1);

    let req = ProbeRequest {
        pos: &pos,
        ply: PLY,
        alpha: -MATE,
        beta: MATE,
        hmc: 0,
        n_pieces: 5,
    };
    let mut ent = TTData::default();
    let mut acc = ProbeAccumulator::default();

    assert_eq!(prober.run_stage(ProbeStage::CachedDtm, &req, &tt, &mut ent, &mut acc), StageResult::NotApplicable);
    assert_eq!(prober.run_stage(ProbeStage::Wdl, &req, &tt, &mut ent, &mut acc), StageResult::Inconclusive);
    assert!(acc.has_result);
    assert!(acc.frustrated);

    assert_eq!(prober.run_stage(ProbeStage::DtmFirst, &req, &tt, &mut ent, &mut acc), StageResult::NotApplicable);
    assert!(acc.dtm_first);
    assert_eq!(prober.run_stage(ProbeStage::Dtz, &req, &tt, &mut ent, &mut acc), StageResult::Resolved);
    assert_eq!(ent.eval_score(), prober.params().max_frustrated_dist);
}

#[test]
fn test_without_tables() {
    setup();

    let prober = prober(None, None);
    let (found, _) = probe(&prober, "8/8/4B3/8/kBK5/8/8/8 w - - 0 1", -MATE.0, MATE.0);

    assert!(!found);
    assert!(!prober.tb_enabled());
}

#[test]
fn test_table_sizes() {
    let prober = prober(Some(MockGaviota::new(5)), Some(MockSyzygy::new(6)));

    assert!(prober.tb_enabled());
    assert_eq!(prober.gtb_max_pieces(), 5);
    assert_eq!(prober.rtb_max_pieces(), 6);
    assert_eq!(prober.max_pieces(), 6);
}

#[test]
fn test_dtz_one_past_horizon() {
    setup();

    const FEN: &str = "8/8/3pk3/8/8/3NK3/3N4/8 w - - 98 1";
    let prober = prober(None, Some(MockSyzygy::new(5).with(FEN, 2, Some(3))));

    let (found, ent) = probe(&prober, FEN, -MATE.0, MATE.0);
    assert!(found);
    assert_eq!(ent.bound(), TTBound::Exact);
    assert_eq!(ent.score(PLY), 0);
    assert_eq!(ent.eval_score(), 1);
}

#[test]
fn test_repeated_probe() {
    setup();

    const FEN: &str = "R5Q1/8/6k1/8/4q3/8/8/K7 b - - 0 1";
    let prober = prober(
        Some(MockGaviota::new(5).with(FEN, GtbInfo::WhiteMates, 22)),
        Some(MockSyzygy::new(5).with(FEN, -2, Some(-21))),
    );

    for (alpha, beta) in [(-MATE.0, MATE.0), (-10, 10)] {
        let first = probe(&prober, FEN, alpha, beta);
        let second = probe(&prober, FEN, alpha, beta);

        assert_eq!(first.0, second.0);
        assert_eq!(first.1.to_bits(), second.1.to_bits());
    }
}

#[test]
fn test_prober_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<TbProber>();
    assert_send_sync::<SubMateCache>();
    assert_send_sync::<TTable>();
}

#[test]
fn test_dtz_mate_estimate() {
    setup();

    const FEN: &str = "8/8/3pk3/8/8/3NK3/3N4/8 w - - 5 1";
    let prober = prober(None, Some(MockSyzygy::new(5).with(FEN, 2, Some(7))));
    let sub_mate = prober.max_sub_mate(&chess(FEN));

    let (found, ent) = probe(&prober, FEN, -10, 10);
    assert!(found);
    assert_eq!(ent.bound(), TTBound::LowerBound);
    assert_eq!(ent.score(PLY), MATE0 - PLY - (sub_mate + 7) - 2);
    assert!(ent.score(PLY).is_win());
}

#[test]
fn test_short_dtz_near_horizon() {
    setup();

    const MATE_IN_ONE: &str = "8/8/4B3/8/kBK5/8/8/8 w - - 0 1";

    let fen = MATE_IN_ONE.replace(" 0 1", " 99 1");
    let prober = prober(None, Some(MockSyzygy::new(5).with(&fen, 2, Some(2))));
    let (found, _) = probe(&prober, &fen, -MATE.0, MATE.0);
    assert!(!found);

    let fen = MATE_IN_ONE.replace(" 0 1", " 100 1");
    let (found, ent) = probe(&prober, &fen, -MATE.0, MATE.0);
    assert!(found);
    assert_eq!(ent.bound(), TTBound::Exact);
    assert_eq!(ent.score(PLY), 0);
    assert_eq!(ent.eval_score(), 2);
}

#[test]
fn test_forced_en_passant() {
    setup();

    // exd6 is the only legal move.
    const FORCED_EP: &str = "8/8/4b3/3pP3/8/6k1/7p/7K w - d6 0 1";
    const CAPTURED: &str = "8/8/3Pb3/8/8/6k1/7p/7K b - - 0 1";

    let pos = chess(FORCED_EP);
    let child = chess(CAPTURED);
    let tt = TTable::new(1);

    let prober = prober(
        Some(MockGaviota::new(6)
            .with(FORCED_EP, GtbInfo::Draw, 0)
            .with(CAPTURED, GtbInfo::BlackMates, 10)),
        None,
    );

    let child_score = prober.gtb_probe_dtm(&child, PLY + 1).unwrap();
    assert_eq!(child_score, Score::mate(PLY + 12));
    assert_eq!(prober.gtb_probe_dtm(&pos, PLY), Some(-child_score));
    assert_eq!(prober.dtm_probe(&pos, PLY, &tt), Some(-child_score));

    let prober = common::prober(Some(MockGaviota::new(6).with(FORCED_EP, GtbInfo::Draw, 0)), None);
    assert_eq!(prober.gtb_probe_dtm(&pos, PLY), None);
    assert_eq!(prober.gtb_probe_wdl(&pos, PLY), None);
}
