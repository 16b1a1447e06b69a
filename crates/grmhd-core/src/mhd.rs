// ─────────────────────────────────────────────────────────────────────
// Torus GRMHD — MHD State
// License: BSD 3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Local magnetic four-vector reconstruction and the primitive→conserved
//! flux-transform seam used by the field normalizer.

use grmhd_types::constants::prims;
use grmhd_types::state::{BlockGrid, Loci};
use ndarray::Array4;

use crate::eos::EquationOfState;

/// Magnetic field vector of one cell, with raised and lowered spatial
/// indices for the block's diagonal metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct FourVectors {
    pub bcon: [f64; 3],
    pub bcov: [f64; 3],
}

/// Reconstruct the local field state at `(k, j, i)`.
///
/// The block metric is diagonal, `g = diag(1, r², r² sin²θ)`, so lowering an
/// index is component-wise.
pub fn get_state(
    grid: &BlockGrid,
    p: &Array4<f64>,
    k: usize,
    j: usize,
    i: usize,
    loc: Loci,
) -> FourVectors {
    let (r, th) = grid.coord_embed(j, i, loc);
    let gcov = [1.0, r * r, r * r * th.sin().powi(2)];
    let bcon = [
        p[[prims::B1, k, j, i]],
        p[[prims::B2, k, j, i]],
        p[[prims::B3, k, j, i]],
    ];
    let bcov = [gcov[0] * bcon[0], gcov[1] * bcon[1], gcov[2] * bcon[2]];
    FourVectors { bcon, bcov }
}

/// Magnetic pressure proxy `b² = b^μ b_μ`.
pub fn bsq_calc(d: &FourVectors) -> f64 {
    d.bcon[0] * d.bcov[0] + d.bcon[1] * d.bcov[1] + d.bcon[2] * d.bcov[2]
}

/// Maps the primitives of one cell to their conserved image.
///
/// The normalizer calls this after every field rescale so the conserved
/// bundle is never stale relative to the primitives.
pub trait FluxTransform {
    #[allow(clippy::too_many_arguments)]
    fn prim_to_flux(
        &self,
        grid: &BlockGrid,
        p: &Array4<f64>,
        eos: &dyn EquationOfState,
        k: usize,
        j: usize,
        i: usize,
        loc: Loci,
        u: &mut Array4<f64>,
    );
}

/// Densitized ideal-MHD conserved image: every component is the
/// metric-weighted primitive, with the energy picking up thermal and
/// magnetic pressure.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdealFluxTransform;

impl FluxTransform for IdealFluxTransform {
    fn prim_to_flux(
        &self,
        grid: &BlockGrid,
        p: &Array4<f64>,
        eos: &dyn EquationOfState,
        k: usize,
        j: usize,
        i: usize,
        loc: Loci,
        u: &mut Array4<f64>,
    ) {
        let gdet = grid.gdet(loc, j, i);
        let d = get_state(grid, p, k, j, i, loc);
        let bsq = bsq_calc(&d);

        let rho = p[[prims::RHO, k, j, i]];
        let uu = p[[prims::UU, k, j, i]];
        let pgas = eos.pressure(rho, uu);

        u[[prims::RHO, k, j, i]] = gdet * rho;
        u[[prims::UU, k, j, i]] = gdet * (uu + pgas + 0.5 * bsq);
        for m in prims::U1..=prims::U3 {
            u[[m, k, j, i]] = gdet * p[[m, k, j, i]];
        }
        for m in prims::B1..=prims::B3 {
            u[[m, k, j, i]] = gdet * p[[m, k, j, i]];
        }
    }
}
