use std::path::{Path, PathBuf};

/*----------------------------------------------------------------*/

macro_rules! params {
    ($($(#[$doc:meta])* $name:ident: $ty:ty = $default:expr,)*) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        pub struct ProbeParams {
            $($(#[$doc])* pub $name: $ty),*
        }

        impl ProbeParams {
            #[inline(always)]
            pub fn new($($name: $ty),*) -> ProbeParams {
                ProbeParams { $($name),* }
            }
        }

        impl Default for ProbeParams {
            #[inline(always)]
            fn default() -> Self {
                ProbeParams {
                    $($name: $default),*
                }
            }
        }
    }
}

params! {
    /// A drawn position with a frustrated win or loss is only returned when the window
    /// does not reach past this score.
    min_frustrated: i32 = 70,
    /// Eval distance recorded for wins or losses spoiled by the 50-move rule
    /// when the real distance is unknown.
    max_frustrated_dist: i32 = 1000,
    /// An untrusted WDL win resolves the probe when beta is at most this.
    wdl_win_beta_threshold: i32 = 0,
    /// An untrusted WDL loss resolves the probe when alpha is at least this.
    wdl_loss_alpha_threshold: i32 = 0,
}

/*----------------------------------------------------------------*/

#[derive(Debug, Clone, Default)]
pub struct TbConfig {
    pub syzygy_path: Option<PathBuf>,
    pub prewarm: bool,
    pub params: ProbeParams,
}

impl TbConfig {
    #[inline]
    pub fn new() -> TbConfig {
        TbConfig::default()
    }

    #[inline]
    pub fn syzygy_path(mut self, path: impl AsRef<Path>) -> TbConfig {
        self.syzygy_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Fills the sub-mate cache for every pawn-only composition of up to five pawns on startup.
    #[inline]
    pub fn prewarm(mut self, prewarm: bool) -> TbConfig {
        self.prewarm = prewarm;
        self
    }

    #[inline]
    pub fn params(mut self, params: ProbeParams) -> TbConfig {
        self.params = params;
        self
    }
}

/*----------------------------------------------------------------*/

#[test]
fn test_config() {
    let config = TbConfig::new()
        .syzygy_path("/tb/syzygy")
        .prewarm(true)
        .params(ProbeParams { min_frustrated: 50, ..Default::default() });

    assert_eq!(config.syzygy_path.as_deref(), Some(Path::new("/tb/syzygy")));
    assert!(config.prewarm);
    assert_eq!(config.params.min_frustrated, 50);
    assert_eq!(config.params.max_frustrated_dist, 1000);
    assert_eq!(ProbeParams::new(70, 1000, 0, 0), ProbeParams::default());
}
