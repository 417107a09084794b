//! Norms of square band matrices in compact band storage.

mod band;
mod error;
mod langb;
mod norm;

pub mod condition;
pub mod matrix;
pub mod vector;

pub use band::BandLayout;
pub use error::{Error, Result};
pub use langb::langb;
pub use norm::Norm;
