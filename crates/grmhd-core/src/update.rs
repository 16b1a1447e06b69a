// ─────────────────────────────────────────────────────────────────────
// Torus GRMHD — Stage Updates
// License: BSD 3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Sub-stage time-update kernels: blend a stage snapshot toward the base
//! state, then apply the accumulated time derivative.
//!
//! Both kernels sweep the FULL domain including ghost zones; later stages
//! must see consistent boundary data. Neither has a partial-failure state:
//! a sweep either completes or the inputs violated a precondition.

use grmhd_types::error::{GrmhdError, GrmhdResult};
use grmhd_types::state::{BlockGrid, FieldContainer, MeshBlock};
use ndarray::{s, Zip};

/// Sub-stage blend coefficients for one time step, owned by the external
/// scheduler. `beta[s]` both weights the blend of stage `s+1` and scales
/// its effective step `beta[s] * dt`.
#[derive(Debug, Clone)]
pub struct StageIntegrator {
    pub beta: Vec<f64>,
    pub dt: f64,
}

impl StageIntegrator {
    /// Second-order predictor-corrector (VL2) coefficients.
    pub fn vl2(dt: f64) -> Self {
        StageIntegrator {
            beta: vec![0.5, 1.0],
            dt,
        }
    }

    /// Single forward-Euler stage, kept for debugging and comparison runs.
    pub fn euler(dt: f64) -> Self {
        StageIntegrator {
            beta: vec![1.0],
            dt,
        }
    }

    pub fn nstages(&self) -> usize {
        self.beta.len()
    }
}

fn check_extents(a: &FieldContainer, b: &FieldContainer) -> GrmhdResult<()> {
    if a.extents() != b.extents() {
        return Err(GrmhdError::ShapeMismatch {
            expected: a.extents().to_vec(),
            found: b.extents().to_vec(),
        });
    }
    Ok(())
}

/// Overwrite every entry of every field of `cin` with
/// `beta·cin + (1−beta)·base`. `beta = 1` is an identity, `beta = 0` an
/// exact copy of `base`.
pub fn average_containers(
    cin: &mut FieldContainer,
    base: &FieldContainer,
    beta: f64,
) -> GrmhdResult<()> {
    check_extents(cin, base)?;
    let names: Vec<String> = cin.field_names().cloned().collect();
    for name in &names {
        let b = base.get(name)?;
        let c = cin.get_mut(name)?;
        Zip::from(&mut *c).and(b).for_each(|x, &y| {
            *x = beta * *x + (1.0 - beta) * y;
        });
    }
    Ok(())
}

/// Overwrite every entry of every field of `cout` with
/// `cin + step·dudt`. `step = 0` is an exact copy of `cin`.
pub fn update_container(
    cin: &FieldContainer,
    dudt: &FieldContainer,
    step: f64,
    cout: &mut FieldContainer,
) -> GrmhdResult<()> {
    check_extents(cin, dudt)?;
    check_extents(cin, cout)?;
    let names: Vec<String> = cin.field_names().cloned().collect();
    for name in &names {
        let s = cin.get(name)?;
        let d = dudt.get(name)?;
        let o = cout.get_mut(name)?;
        Zip::from(&mut *o).and(s).and(d).for_each(|o, &s, &d| {
            *o = s + step * d;
        });
    }
    Ok(())
}

/// Component-wise copy of one named field between containers, interior
/// cells only. Ghost zones of the destination are left untouched; they are
/// refreshed by the next boundary exchange.
pub fn copy_field(
    grid: &BlockGrid,
    var: &str,
    rc0: &FieldContainer,
    rc1: &mut FieldContainer,
) -> GrmhdResult<()> {
    check_extents(rc1, rc0)?;
    let src = rc0.get(var)?;
    let dst = rc1.get_mut(var)?;
    dst.slice_mut(s![
        ..,
        grid.ks()..=grid.ke(),
        grid.js()..=grid.je(),
        grid.is()..=grid.ie()
    ])
    .assign(&src.slice(s![
        ..,
        grid.ks()..=grid.ke(),
        grid.js()..=grid.je(),
        grid.is()..=grid.ie()
    ]));
    Ok(())
}

/// Advance one sub-stage on one block.
///
/// `stage` is 1-based; `stage_names[stage-1]` names the blend input and
/// `stage_names[stage]` the output. The derivative container is `"dUdt"`
/// and the reference state `"base"`. For the first stage the input often IS
/// the base container, in which case the blend is an identity and is
/// skipped.
pub fn advance_sub_stage(
    block: &mut MeshBlock,
    stage: usize,
    stage_names: &[String],
    integrator: &StageIntegrator,
) -> GrmhdResult<()> {
    if stage == 0 || stage > integrator.nstages() {
        return Err(GrmhdError::ConfigError(format!(
            "sub-stage {stage} out of range for a {}-stage integrator",
            integrator.nstages()
        )));
    }
    if stage_names.len() <= stage {
        return Err(GrmhdError::ConfigError(format!(
            "need {} stage names, got {}",
            stage + 1,
            stage_names.len()
        )));
    }
    let beta = integrator.beta[stage - 1];
    let cin_name = stage_names[stage - 1].as_str();
    let cout_name = stage_names[stage].as_str();

    if cin_name != "base" {
        let [cin, base] = block.containers_disjoint_mut([cin_name, "base"])?;
        average_containers(cin, base, beta)?;
    }

    let [cin, dudt, cout] = block.containers_disjoint_mut([cin_name, "dUdt", cout_name])?;
    update_container(cin, dudt, beta * integrator.dt, cout)?;
    Ok(())
}
