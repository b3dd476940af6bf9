mod common;

use cherry_tb::*;
use common::*;
use shakmaty::{Move, Position, Square};

const ROOT: &str = "8/8/4B3/8/kBK5/8/8/8 w - - 0 1";

fn is_move(mv: &Move, from: Square, to: Square) -> bool {
    mv.from() == Some(from) && mv.to() == to
}

#[test]
fn test_extend_pv_to_mate() {
    setup();

    let prober = prober(
        Some(MockGaviota::new(5)
            .with(ROOT, GtbInfo::WhiteMates, 1)
            .with("8/3B4/8/8/kBK5/8/8/8 b - - 1 1", GtbInfo::WhiteMates, 0)),
        None,
    );
    let tt = TTable::new(1);
    let mut pv = Vec::new();

    prober.extend_pv(&chess(ROOT), &mut pv, &tt);

    assert_eq!(pv.len(), 1);
    assert!(is_move(&pv[0], Square::E6, Square::D7));
}

#[test]
fn test_extend_pv_without_tables() {
    setup();

    let prober = prober(None, None);
    let tt = TTable::new(1);
    let mut pv = Vec::new();

    prober.extend_pv(&chess(ROOT), &mut pv, &tt);
    assert!(pv.is_empty());
}

#[test]
fn test_search_moves_drop_draws() {
    setup();

    let prober = prober(
        Some(MockGaviota::new(5)
            .with(ROOT, GtbInfo::WhiteMates, 1)
            .with("8/8/4B3/8/kB6/3K4/8/8 b - - 1 1", GtbInfo::Draw, 0)),
        None,
    );
    let tt = TTable::new(1);
    let pos = chess(ROOT);
    let legal = pos.legal_moves();

    let moves = prober.get_search_moves(&pos, &legal, &tt).unwrap();

    assert_eq!(moves.len(), legal.len() - 1);
    assert!(moves.iter().all(|mv| !is_move(mv, Square::C4, Square::D3)));
}

#[test]
fn test_search_moves_with_progress() {
    setup();

    let prober = prober(
        Some(MockGaviota::new(5)
            .with(ROOT, GtbInfo::WhiteMates, 1)
            .with("8/3B4/8/8/kBK5/8/8/8 b - - 1 1", GtbInfo::WhiteMates, 0)),
        None,
    );
    let tt = TTable::new(1);
    let pos = chess(ROOT);

    assert_eq!(prober.get_search_moves(&pos, &pos.legal_moves(), &tt), None);
}

#[test]
fn test_search_moves_not_winning() {
    setup();

    const DRAW: &str = "8/8/8/8/kB6/8/8/2K5 w - - 0 1";
    let prober = prober(Some(MockGaviota::new(5).with(DRAW, GtbInfo::Draw, 0)), None);
    let tt = TTable::new(1);
    let pos = chess(DRAW);

    assert_eq!(prober.get_search_moves(&pos, &pos.legal_moves(), &tt), None);
}
