//! Distance-decay normalization for contact matrices.
//!
//! Contact signal decays steeply with genomic distance: near-diagonal
//! pixels carry far more counts than far-diagonal ones. The normalizer
//! groups diagonals into exponentially growing distance bins and divides
//! each bin by its mean over valid pixels, flattening the decay while
//! leaving masked-out pixels untouched.

mod norm;

pub use norm::{DecayConfig, ObservedOverExpected, observed_over_expected};
