//! Read-side tooling for the `blk`/`mhy0` asset container family.
//!
//! The pipeline: [`blk`] decrypts an outer container and splits it into
//! sub-containers, [`mhy0`] decodes each into named entries, [`asset_index`]
//! maps logical bundle names to physical locations across a batch of
//! containers, and [`resolver`] expands a starting file set into everything
//! its dependencies require. [`scramble`] and [`keystream`] hold the
//! reverse-engineered transforms underneath it all.

pub mod asset_index;
pub mod blk;
pub mod error;
pub mod keystream;
pub mod mhy0;
pub mod resolver;
pub mod scramble;
pub mod stream_file;

pub use error::Error;
