mod adapters {
    mod en_passant;
    mod gaviota;
    mod syzygy;

    pub use en_passant::*;
    pub use gaviota::*;
    pub use syzygy::*;
}

mod bounds {
    mod bounds;
    mod tables;

    pub use bounds::*;
}

mod probe {
    mod prober;
    mod root;
    mod stages;

    pub use prober::*;
    pub use stages::*;
}

mod config;
mod endgame;
mod error;
mod material;
mod position;
mod score;
mod sub_mate;
mod ttable;

pub use adapters::*;
pub use bounds::*;
pub use config::*;
pub use endgame::*;
pub use error::*;
pub use material::*;
pub use position::*;
pub use probe::*;
pub use score::*;
pub use sub_mate::*;
pub use ttable::*;
