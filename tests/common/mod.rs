#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};
use cherry_tb::*;
use shakmaty::{fen::Fen, CastlingMode, Chess};

pub const MATE: Score = Score::MATE;

pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn chess(fen: &str) -> Chess {
    fen.parse::<Fen>().unwrap().into_position(CastlingMode::Standard).unwrap()
}

/*----------------------------------------------------------------*/

/// Gaviota tables answering only for the positions they were given.
#[derive(Default)]
pub struct MockGaviota {
    pub max_pieces: u32,
    pub entries: HashMap<GtbProbeData, (GtbInfo, u32)>,
}

impl MockGaviota {
    pub fn new(max_pieces: u32) -> MockGaviota {
        MockGaviota { max_pieces, entries: HashMap::new() }
    }

    pub fn with(mut self, fen: &str, info: GtbInfo, plies: u32) -> MockGaviota {
        self.entries.insert(GtbProbeData::new(&chess(fen)), (info, plies));
        self
    }
}

impl GaviotaTables for MockGaviota {
    fn max_pieces(&self) -> u32 {
        self.max_pieces
    }

    fn probe_dtm(&self, data: &GtbProbeData) -> Option<(GtbInfo, u32)> {
        self.entries.get(data).copied()
    }

    fn probe_wdl(&self, data: &GtbProbeData) -> Option<GtbInfo> {
        self.entries.get(data).map(|&(info, _)| info)
    }
}

/*----------------------------------------------------------------*/

/// Syzygy tables answering only for the positions they were given, whatever the half-move clock.
#[derive(Default)]
pub struct MockSyzygy {
    pub max_pieces: u32,
    pub entries: HashMap<RtbProbeData, (i32, Option<i32>)>,
}

fn rtb_key(data: &RtbProbeData) -> RtbProbeData {
    RtbProbeData { rule50: 0, ..*data }
}

impl MockSyzygy {
    pub fn new(max_pieces: u32) -> MockSyzygy {
        MockSyzygy { max_pieces, entries: HashMap::new() }
    }

    pub fn with(mut self, fen: &str, wdl: i32, dtz: Option<i32>) -> MockSyzygy {
        self.entries.insert(rtb_key(&RtbProbeData::new(&chess(fen))), (wdl, dtz));
        self
    }
}

impl SyzygyTables for MockSyzygy {
    fn max_pieces(&self) -> u32 {
        self.max_pieces
    }

    fn probe_wdl(&self, data: &RtbProbeData) -> Option<i32> {
        self.entries.get(&rtb_key(data)).map(|&(wdl, _)| wdl)
    }

    fn probe_dtz(&self, data: &RtbProbeData) -> Option<i32> {
        self.entries.get(&rtb_key(data)).and_then(|&(_, dtz)| dtz)
    }
}

/*----------------------------------------------------------------*/

pub fn prober(gaviota: Option<MockGaviota>, syzygy: Option<MockSyzygy>) -> TbProber {
    let mut prober = TbProber::new(&TbConfig::default()).unwrap();

    if let Some(tables) = gaviota {
        prober = prober.with_gaviota(Arc::new(tables));
    }

    if let Some(tables) = syzygy {
        prober = prober.with_syzygy(Arc::new(tables));
    }

    prober
}
