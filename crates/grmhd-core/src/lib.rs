// ─────────────────────────────────────────────────────────────────────
// Torus GRMHD — Core
// License: BSD 3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Numerical kernels for one mesh block of a torus GRMHD run:
//! sub-stage time updates, magnetic-field seeding from a density
//! distribution, plasma-beta diagnostics and field renormalization.

pub mod beta;
pub mod eos;
pub mod mhd;
pub mod normalize;
pub mod seed;
pub mod update;
