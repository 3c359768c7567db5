//! Umbrella crate for the `contact-tools` workspace.
//!
//! Re-exports the contact-matrix primitives, the distance-decay
//! normalizer and the adaptive denoising pipeline.

pub use ct_bins::*;
pub use ct_core::*;
pub use ct_decay::*;
pub use ct_pyr::*;
