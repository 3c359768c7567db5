//! Foundational primitives for contact-matrix processing.
//!
//! ## Matrices
//! Contact and count matrices are square, dense and row-major. A value of
//! `f64::NAN` in a contact matrix marks an unmeasured pixel; count matrices
//! carry zero at such positions.
//!
//! ## Validity
//! [`Mask`] expresses which pixels carry information: everything, whole
//! loci, or individual pixels. For a locus-level mask a pixel is valid only
//! when both of its loci are flagged valid.

mod error;
mod mask;
mod matrix;

pub use error::Error;
pub use mask::Mask;
pub use matrix::Matrix;
