//! Free-text detection
//!
//! Converts an unstructured project description into a [`PartialProfile`]
//! by matching against the static trigger lexicon. Pure and infallible:
//! text that matches nothing yields an empty partial profile, which the
//! resolver completes from defaults.
//!
//! [`PartialProfile`]: crate::profile::PartialProfile

pub mod engine;
pub mod lexicon;

pub use engine::detect;
pub use lexicon::{lexicon, Lexicon};
