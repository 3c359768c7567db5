//! Adaptive multiresolution denoising of contact matrices.
//!
//! A contact matrix and its raw-count companion are coarsened into a
//! pyramid of 2x2 block sums, then walked back to full resolution: pixels
//! whose local neighborhood holds fewer than `cutoff` raw counts are
//! replaced with the coarser, better-sampled local average, while
//! well-sampled pixels pass through unchanged.
//!
//! Level policy:
//! - Level 0 is the original matrix padded to the next power of two
//!   (value padding NaN, count padding 0).
//! - Each next level sums disjoint 2x2 blocks; coarsening stops once the
//!   side would drop below `min_shape`, or after `max_levels` steps.
//!
//! Tri-state arithmetic:
//! - Unmeasured cells are `None` in intermediate statistics. `None`
//!   propagates through arithmetic, never wins a block minimum unless the
//!   whole block is unmeasured, and compares false against any threshold.

mod coarsen;
mod pyramid;
mod refine;

pub use coarsen::{coarsen_min, coarsen_sum, coarsen_sum_u32, upsample_nearest};
pub use pyramid::{Pyramid, PyramidLevel};
pub use refine::{DenoiseConfig, adaptive_denoise, refine};
