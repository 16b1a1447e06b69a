// ─────────────────────────────────────────────────────────────────────
// Torus GRMHD — Constants
// License: BSD 3-Clause
// ─────────────────────────────────────────────────────────────────────

/// Number of primitive (and conserved) components carried per cell.
pub const NPRIM: usize = 8;

/// Additive floor for quantities that may legitimately reach zero
/// (e.g. magnetic pressure in field-free cells).
pub const TINY_NUMBER: f64 = 1e-20;

/// Component indices into the combined primitive/conserved bundles.
/// Layout is fixed project-wide; every kernel indexes with these.
pub mod prims {
    /// Rest-mass density.
    pub const RHO: usize = 0;
    /// Internal energy density.
    pub const UU: usize = 1;
    /// Radial velocity.
    pub const U1: usize = 2;
    /// Polar velocity.
    pub const U2: usize = 3;
    /// Azimuthal velocity.
    pub const U3: usize = 4;
    /// Radial magnetic field.
    pub const B1: usize = 5;
    /// Polar magnetic field.
    pub const B2: usize = 6;
    /// Azimuthal magnetic field.
    pub const B3: usize = 7;
}
