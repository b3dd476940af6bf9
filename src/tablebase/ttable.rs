use std::sync::atomic::*;
use shakmaty::Chess;
use crate::*;

/*----------------------------------------------------------------*/

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum TTBound {
    #[default]
    None,
    UpperBound,
    LowerBound,
    Exact
}

impl TTBound {
    #[inline]
    pub const fn index(i: usize) -> TTBound {
        match i {
            0 => TTBound::None,
            1 => TTBound::UpperBound,
            2 => TTBound::LowerBound,
            3 => TTBound::Exact,
            _ => panic!("TTBound::index(): Index out of bounds"),
        }
    }
}

/*----------------------------------------------------------------*/

/// Score and bound for one position, plus the eval side channel.
///
/// Mate scores are stored relative to the node, use [`TTData::score`] and
/// [`TTData::set_score`] to convert from and to the root.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TTData {
    pub score: Score,
    pub eval: Score,
    pub bound: TTBound,
    pub dtm: bool,
}

#[derive(Debug, Copy, Clone)]
#[repr(C, packed)]
pub struct TTPackedData {
    pub score: i16,
    pub eval: i16,
    pub other: u8,
    pub padding: [u8; 3],
}

impl TTData {
    #[inline]
    pub fn new(score: Score, eval: Score, bound: TTBound, dtm: bool) -> TTData {
        TTData {
            score,
            eval,
            bound,
            dtm,
        }
    }

    #[inline]
    pub fn score(&self, ply: i32) -> Score {
        self.score.from_node(ply)
    }

    #[inline]
    pub fn set_score(&mut self, score: Score, ply: i32) {
        self.score = score.to_node(ply);
    }

    #[inline]
    pub fn bound(&self) -> TTBound {
        self.bound
    }

    #[inline]
    pub fn set_bound(&mut self, bound: TTBound) {
        self.bound = bound;
    }

    /// Distance, in plies, from a 50-move draw to the win or loss hidden behind it. Zero is unknown.
    #[inline]
    pub fn eval_score(&self) -> Score {
        self.eval
    }

    #[inline]
    pub fn set_eval_score(&mut self, eval: Score) {
        self.eval = eval;
    }

    /// Stores `eval` if no distance is known yet or if it is strictly closer to zero.
    #[inline]
    pub fn update_eval_score(&mut self, eval: Score) {
        if self.eval == 0 || eval.abs() < self.eval.abs() {
            self.eval = eval;
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = TTData::default();
    }

    /*----------------------------------------------------------------*/

    #[inline]
    pub fn from_bits(bits: u64) -> TTData {
        let packed = unsafe {
            ::core::mem::transmute::<u64, TTPackedData>(bits)
        };

        TTData {
            score: Score(packed.score as i32),
            eval: Score(packed.eval as i32),
            bound: TTBound::index((packed.other & 0b11) as usize),
            dtm: packed.other & 0b100 != 0,
        }
    }

    #[inline]
    pub fn to_bits(self) -> u64 {
        unsafe {
            ::core::mem::transmute::<TTPackedData, u64>(TTPackedData {
                score: self.score.0 as i16,
                eval: self.eval.0 as i16,
                other: (self.bound as u8) | ((self.dtm as u8) << 2),
                padding: [0; 3],
            })
        }
    }
}

/*----------------------------------------------------------------*/

#[derive(Debug)]
pub struct TTEntry {
    key: AtomicU64,
    data: AtomicU64
}

impl TTEntry {
    #[inline]
    pub fn data(&self) -> TTData {
        TTData::from_bits(self.data.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set(&self, hash: u64, data: TTData) {
        let data = data.to_bits();

        self.key.store(hash, Ordering::Relaxed);
        self.data.store(data, Ordering::Relaxed);
    }

    #[inline]
    pub fn reset(&self) {
        self.key.store(0, Ordering::Relaxed);
        self.data.store(0, Ordering::Relaxed);
    }

    #[inline]
    pub fn zero() -> TTEntry {
        TTEntry {
            key: AtomicU64::new(0),
            data: AtomicU64::new(0)
        }
    }
}

/*----------------------------------------------------------------*/

/// Lock-free transposition table, used here as a cache of proven DTM scores and
/// of the eval distances recorded by the probes.
#[derive(Debug)]
pub struct TTable {
    entries: Box<[TTEntry]>,
}

impl TTable {
    #[inline]
    pub fn new(mb: usize) -> TTable {
        let size = (mb * 1024 * 1024 / size_of::<TTEntry>()).max(1);

        TTable {
            entries: (0..size).map(|_| TTEntry::zero()).collect(),
        }
    }


    /*----------------------------------------------------------------*/

    pub fn probe(&self, pos: &Chess) -> Option<TTData> {
        let hash = pos.zobrist();
        let entry = &self.entries[self.index(hash)];
        let data = entry.data.load(Ordering::Relaxed);

        if entry.key.load(Ordering::Relaxed) == hash {
            return Some(TTData::from_bits(data));
        }

        None
    }

    /// Stores `data`, keeping any tighter eval distance already known for the position.
    pub fn store(&self, pos: &Chess, mut data: TTData) {
        let hash = pos.zobrist();
        let entry = &self.entries[self.index(hash)];

        if entry.key.load(Ordering::Relaxed) == hash {
            let old = entry.data();

            if old.eval != 0 && (data.eval == 0 || old.eval.abs() < data.eval.abs()) {
                data.eval = old.eval;
            }
        }

        entry.set(hash, data);
    }

    /// Proven distance-to-mate score of `pos`, relative to the root.
    pub fn probe_dtm(&self, pos: &Chess, ply: i32) -> Option<Score> {
        self.probe(pos)
            .filter(|data| data.dtm && data.bound == TTBound::Exact)
            .map(|data| data.score(ply))
    }

    pub fn store_dtm(&self, pos: &Chess, ply: i32, score: Score) {
        let mut data = TTData::new(Score::ZERO, Score::ZERO, TTBound::Exact, true);
        data.set_score(score, ply);

        self.store(pos, data);
    }

    /// Narrows the eval distance stored for `pos`. Returns false if the position is not in the table.
    pub fn tighten_eval(&self, pos: &Chess, eval: Score) -> bool {
        let hash = pos.zobrist();
        let entry = &self.entries[self.index(hash)];
        let mut current = entry.data.load(Ordering::Relaxed);

        loop {
            if entry.key.load(Ordering::Relaxed) != hash {
                return false;
            }

            let mut data = TTData::from_bits(current);
            data.update_eval_score(eval);

            let new = data.to_bits();
            if new == current {
                return true;
            }

            match entry.data.compare_exchange_weak(current, new, Ordering::Relaxed, Ordering::Relaxed) {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }

    #[inline]
    pub fn clean(&self) {
        self.entries.iter().for_each(|e| e.reset());
    }

    /*----------------------------------------------------------------*/

    #[inline]
    fn index(&self, hash: u64) -> usize {
        ((u128::from(hash) * self.entries.len() as u128) >> 64) as usize
    }
}

/*----------------------------------------------------------------*/
