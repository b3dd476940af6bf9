use core::{cmp::Ordering, fmt, ops::*};

/*----------------------------------------------------------------*/

/// Score of "side to move is mated right now". A mate in `n` plies from the root is `MATE0 - n`.
pub const MATE0: i32 = 32000;

/// Scores within this many plies of `MATE0` count as wins or losses.
/// Syzygy-derived mate estimates can lie a few thousand plies away from `MATE0`.
pub const MAX_MATE_PLIES: i32 = 5000;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(pub i32);

impl Score {
    #[inline]
    pub const fn mate(plies: i32) -> Score {
        Score(MATE0 - plies)
    }

    #[inline]
    pub const fn mated(plies: i32) -> Score {
        Score(-MATE0 + plies)
    }

    /*----------------------------------------------------------------*/

    #[inline]
    pub const fn is_win(self) -> bool {
        self.0 > MATE0 - MAX_MATE_PLIES
    }

    #[inline]
    pub const fn is_loss(self) -> bool {
        self.0 < -(MATE0 - MAX_MATE_PLIES)
    }

    #[inline]
    pub const fn is_decisive(self) -> bool {
        self.is_win() || self.is_loss()
    }

    /// Signed number of plies to mate from the root, positive when the side to move mates.
    #[inline]
    pub fn mate_in(self) -> Option<i32> {
        if !self.is_decisive() {
            return None;
        }

        Some(self.sign() * (MATE0 - self.abs().0))
    }

    /*----------------------------------------------------------------*/

    /// Converts a root-relative mate score into one relative to a node at `ply`.
    #[inline]
    pub const fn to_node(self, ply: i32) -> Score {
        if self.is_win() {
            Score(self.0 + ply)
        } else if self.is_loss() {
            Score(self.0 - ply)
        } else {
            self
        }
    }

    #[inline]
    pub const fn from_node(self, ply: i32) -> Score {
        if self.is_win() {
            Score(self.0 - ply)
        } else if self.is_loss() {
            Score(self.0 + ply)
        } else {
            self
        }
    }

    /*----------------------------------------------------------------*/

    #[inline]
    pub const fn abs(self) -> Score {
        Score(self.0.abs())
    }

    #[inline]
    pub const fn sign(self) -> i32 {
        self.0.signum()
    }

    /*----------------------------------------------------------------*/

    pub const ZERO: Score = Score(0);
    pub const MATE: Score = Score(MATE0);
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(ply) = self.mate_in() {
            write!(f, "mate {}", (ply + ply.signum()) / 2)
        } else {
            write!(f, "cp {}", self.0)
        }
    }
}

impl From<i32> for Score {
    #[inline]
    fn from(value: i32) -> Self {
        Score(value)
    }
}

impl From<Score> for i32 {
    #[inline]
    fn from(score: Score) -> i32 {
        score.0
    }
}

impl PartialEq<i32> for Score {
    #[inline]
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Score> for i32 {
    #[inline]
    fn eq(&self, other: &Score) -> bool {
        *self == other.0
    }
}

impl PartialOrd<i32> for Score {
    #[inline]
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl PartialOrd<Score> for i32 {
    #[inline]
    fn partial_cmp(&self, other: &Score) -> Option<Ordering> {
        self.partial_cmp(&other.0)
    }
}

impl Neg for Score {
    type Output = Score;

    #[inline]
    fn neg(self) -> Self::Output {
        Score(-self.0)
    }
}

macro_rules! impl_score_ops {
    ($($trait:ident, $fn:ident;)*) => {$(
        impl $trait<Score> for Score {
            type Output = Score;

            #[inline]
            fn $fn(self, rhs: Score) -> Self::Output {
                Score(self.0.$fn(rhs.0))
            }
        }
    )*};
}

macro_rules! impl_score_i32_ops {
    ($($trait:ident, $fn:ident;)*) => {$(
        impl $trait<i32> for Score {
            type Output = Score;

            #[inline]
            fn $fn(self, rhs: i32) -> Self::Output {
                Score(self.0.$fn(rhs))
            }
        }

        impl $trait<Score> for i32 {
            type Output = Score;

            #[inline]
            fn $fn(self, rhs: Score) -> Self::Output {
                Score(self.$fn(rhs.0))
            }
        }
    )*};
}

impl_score_ops! {
    Add, add;
    Sub, sub;
}

impl_score_i32_ops! {
    Add, add;
    Sub, sub;
}

/*----------------------------------------------------------------*/

#[test]
fn test_score() {
    for plies in 0..MAX_MATE_PLIES {
        let mate_score = Score::mate(plies);
        let mated_score = Score::mated(plies);

        assert!(mate_score.is_win());
        assert!(mated_score.is_loss());
        assert!(!mate_score.is_loss());
        assert_eq!(mate_score.mate_in(), Some(plies));
        assert_eq!(mated_score.mate_in(), Some(-plies));
        assert_eq!(-mate_score, mated_score);
    }

    assert!(!Score::mate(MAX_MATE_PLIES).is_win());
    assert!(!Score::ZERO.is_decisive());
    assert_eq!(Score(120).mate_in(), None);
}

#[test]
fn test_node_relative_scores() {
    let score = Score::mate(17);

    assert_eq!(score.to_node(5).from_node(5), score);
    assert_eq!(score.to_node(5), Score::mate(12));
    assert_eq!((-score).to_node(5), -Score::mate(12));
    assert_eq!(Score(35).to_node(9), Score(35));
}

#[test]
fn test_display() {
    assert_eq!(Score::mate(3).to_string(), "mate 2");
    assert_eq!(Score::mated(4).to_string(), "mate -2");
    assert_eq!(Score(-57).to_string(), "cp -57");
}
