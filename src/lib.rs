mod tablebase;

pub use tablebase::*;
