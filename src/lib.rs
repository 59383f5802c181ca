//! Codec and semantic model for the G1/G2 tile-puzzle level formats and the
//! companion TWS solution-replay container.
//!
//! - [`g1`]: the G1 binary container (DAT), cell/level/level-set model, and
//!   the structure-preserving transformer.
//! - [`g2`]: the G2 element/modifier codec and streaming map codec.
//! - [`tws`]: the solution-replay decoder.
//! - [`Error`]/[`Limits`]: shared across both formats.

mod error;
mod limits;

pub mod g1;
pub mod g2;
pub mod tws;

pub use error::Error;
pub use limits::Limits;
