// ─────────────────────────────────────────────────────────────────────
// Torus GRMHD — Plasma Beta
// License: BSD 3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Minimum plasma beta over one block interior.
//!
//! beta = p / (b²/2), floored in the magnetic term so field-free cells stay
//! finite. The reduction is a plain minimum, so any cell visitation order
//! and any partial-reduction grouping yields the identical scalar.

use grmhd_types::constants::{prims, TINY_NUMBER};
use grmhd_types::error::GrmhdResult;
use grmhd_types::state::{BlockGrid, FieldContainer, Loci};
use rayon::prelude::*;

use crate::eos::EquationOfState;
use crate::mhd::{bsq_calc, get_state};

/// Minimum thermal-to-magnetic pressure ratio over the interior cells of a
/// block. Read-only; parallelized over k-slabs with a min reduction.
/// Aggregation across blocks is the caller's responsibility.
pub fn local_beta_min<E: EquationOfState + Sync>(
    grid: &BlockGrid,
    rc: &FieldContainer,
    eos: &E,
) -> GrmhdResult<f64> {
    let p = rc.get("prims")?;
    let (is, ie) = (grid.is(), grid.ie());
    let (js, je) = (grid.js(), grid.je());
    let (ks, ke) = (grid.ks(), grid.ke());

    let beta_min = (ks..=ke)
        .into_par_iter()
        .map(|k| {
            let mut local = f64::MAX;
            for j in js..=je {
                for i in is..=ie {
                    let d = get_state(grid, p, k, j, i, Loci::Center);
                    let bsq = bsq_calc(&d);

                    let rho = p[[prims::RHO, k, j, i]];
                    let u = p[[prims::UU, k, j, i]];
                    let beta = eos.pressure(rho, u) / (0.5 * (bsq + TINY_NUMBER));
                    if beta < local {
                        local = beta;
                    }
                }
            }
            local
        })
        .reduce(|| f64::MAX, f64::min);

    Ok(beta_min)
}
