// ─────────────────────────────────────────────────────────────────────
// Torus GRMHD — State
// License: BSD 3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Block-local grid geometry and the named field-container registry.
//!
//! A `MeshBlock` owns one `BlockGrid` plus any number of named
//! `FieldContainer`s ("base", per-stage snapshots, "dUdt"). Every container
//! on a block shares the block's extents; registering anything else is a
//! fatal `ShapeMismatch`.

use std::collections::HashMap;

use ndarray::{Array1, Array4};

use crate::constants::NPRIM;
use crate::error::{GrmhdError, GrmhdResult};

/// Floor on the metric determinant. Only reachable at ghost corners that
/// cross the polar axis or the inner radial edge of a small block.
const GDET_FLOOR: f64 = 1e-12;

/// Stagger location within a cell at which a quantity is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loci {
    /// Cell center.
    Center,
    /// Lower-left cell corner in the poloidal plane.
    Corner,
}

/// One mesh block of a spherical-polar grid with ghost zones.
///
/// The embedding is axisymmetric: x1 is areal radius, x2 polar angle,
/// x3 azimuth. Spacing is uniform per direction, and the spatial metric is
/// diagonal with determinant `r² sinθ`. The grid is immutable for the
/// lifetime of the block and is never written by any kernel.
#[derive(Debug, Clone)]
pub struct BlockGrid {
    pub n1: usize,
    pub n2: usize,
    pub n3: usize,
    pub nghost: usize,
    pub dx1: f64,
    pub dx2: f64,
    pub dx3: f64,
    pub r_in: f64,
    pub r_out: f64,
    x1f: Array1<f64>, // radial face coordinates over the entire domain [n1_tot + 1]
    x2f: Array1<f64>, // polar face coordinates over the entire domain [n2_tot + 1]
}

impl BlockGrid {
    /// Build a block covering `[r_in, r_out] × [0, π] × [0, 2π]` with
    /// `nghost` ghost cells per side in x1 and x2.
    pub fn new(n1: usize, n2: usize, n3: usize, nghost: usize, r_in: f64, r_out: f64) -> Self {
        let dx1 = (r_out - r_in) / n1 as f64;
        let dx2 = std::f64::consts::PI / n2 as f64;
        let dx3 = 2.0 * std::f64::consts::PI / n3 as f64;

        let n1_tot = n1 + 2 * nghost;
        let n2_tot = n2 + 2 * nghost;
        let x1f = Array1::from_shape_fn(n1_tot + 1, |i| {
            r_in + (i as f64 - nghost as f64) * dx1
        });
        let x2f = Array1::from_shape_fn(n2_tot + 1, |j| (j as f64 - nghost as f64) * dx2);

        BlockGrid {
            n1,
            n2,
            n3,
            nghost,
            dx1,
            dx2,
            dx3,
            r_in,
            r_out,
            x1f,
            x2f,
        }
    }

    /// First interior index in x1.
    pub fn is(&self) -> usize {
        self.nghost
    }

    /// Last interior index in x1.
    pub fn ie(&self) -> usize {
        self.nghost + self.n1 - 1
    }

    /// First interior index in x2.
    pub fn js(&self) -> usize {
        self.nghost
    }

    /// Last interior index in x2.
    pub fn je(&self) -> usize {
        self.nghost + self.n2 - 1
    }

    /// First interior index in x3.
    pub fn ks(&self) -> usize {
        self.nghost
    }

    /// Last interior index in x3.
    pub fn ke(&self) -> usize {
        self.nghost + self.n3 - 1
    }

    /// Total cell count in x1 including ghosts.
    pub fn n1_tot(&self) -> usize {
        self.n1 + 2 * self.nghost
    }

    /// Total cell count in x2 including ghosts.
    pub fn n2_tot(&self) -> usize {
        self.n2 + 2 * self.nghost
    }

    /// Total cell count in x3 including ghosts.
    pub fn n3_tot(&self) -> usize {
        self.n3 + 2 * self.nghost
    }

    /// Embedding coordinates `(r, θ)` at the given poloidal index and stagger.
    pub fn coord_embed(&self, j: usize, i: usize, loc: Loci) -> (f64, f64) {
        match loc {
            Loci::Corner => (self.x1f[i], self.x2f[j]),
            Loci::Center => (
                0.5 * (self.x1f[i] + self.x1f[i + 1]),
                0.5 * (self.x2f[j] + self.x2f[j + 1]),
            ),
        }
    }

    /// Radial cell width at index `i`. Uniform here; the index argument keeps
    /// call sites valid for stretched grids.
    pub fn dx1v(&self, _i: usize) -> f64 {
        self.dx1
    }

    /// Polar cell width at index `j`.
    pub fn dx2v(&self, _j: usize) -> f64 {
        self.dx2
    }

    /// Metric determinant `√|g| = r² sinθ` at the given index and stagger,
    /// floored so ghost corners on the axis stay usable.
    pub fn gdet(&self, loc: Loci, j: usize, i: usize) -> f64 {
        let (r, th) = self.coord_embed(j, i, loc);
        (r * r * th.sin().abs()).max(GDET_FLOOR)
    }

    /// Full extents of every field array on this block:
    /// `[NPRIM, n3_tot, n2_tot, n1_tot]`.
    pub fn field_extents(&self) -> [usize; 4] {
        [NPRIM, self.n3_tot(), self.n2_tot(), self.n1_tot()]
    }
}

/// A named bundle of grid-indexed fields for one mesh block.
///
/// Fields are `(component, k, j, i)` arrays looked up by fixed string keys;
/// the combined primitive bundle lives under `"prims"` and the conserved
/// bundle under `"cons"`. All fields share the container's extents.
#[derive(Debug, Clone)]
pub struct FieldContainer {
    extents: [usize; 4],
    fields: HashMap<String, Array4<f64>>,
}

impl FieldContainer {
    /// Empty container with the block's extents.
    pub fn new(grid: &BlockGrid) -> Self {
        FieldContainer {
            extents: grid.field_extents(),
            fields: HashMap::new(),
        }
    }

    /// Container pre-populated with zeroed `"prims"` and `"cons"` bundles.
    pub fn with_bundles(grid: &BlockGrid) -> Self {
        let mut rc = Self::new(grid);
        rc.add_field("prims");
        rc.add_field("cons");
        rc
    }

    /// Register a zero-initialized field under `name`, replacing any
    /// existing field of that name.
    pub fn add_field(&mut self, name: &str) {
        let [np, n3, n2, n1] = self.extents;
        self.fields
            .insert(name.to_string(), Array4::zeros((np, n3, n2, n1)));
    }

    /// Register an existing array under `name`. Extents must match the
    /// container's exactly.
    pub fn insert_field(&mut self, name: &str, data: Array4<f64>) -> GrmhdResult<()> {
        if data.shape() != &self.extents[..] {
            return Err(GrmhdError::ShapeMismatch {
                expected: self.extents.to_vec(),
                found: data.shape().to_vec(),
            });
        }
        self.fields.insert(name.to_string(), data);
        Ok(())
    }

    pub fn get(&self, name: &str) -> GrmhdResult<&Array4<f64>> {
        self.fields
            .get(name)
            .ok_or_else(|| GrmhdError::UnknownField(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> GrmhdResult<&mut Array4<f64>> {
        self.fields
            .get_mut(name)
            .ok_or_else(|| GrmhdError::UnknownField(name.to_string()))
    }

    /// Mutable access to two distinct fields at once (e.g. primitives plus
    /// the conserved image they map to).
    pub fn fields_disjoint_mut(
        &mut self,
        a: &str,
        b: &str,
    ) -> GrmhdResult<(&mut Array4<f64>, &mut Array4<f64>)> {
        if a == b {
            return Err(GrmhdError::ConfigError(format!(
                "disjoint field access requires distinct names, got '{a}' twice"
            )));
        }
        match self.fields.get_disjoint_mut([a, b]) {
            [Some(fa), Some(fb)] => Ok((fa, fb)),
            [None, _] => Err(GrmhdError::UnknownField(a.to_string())),
            [_, None] => Err(GrmhdError::UnknownField(b.to_string())),
        }
    }

    /// Names of all registered fields, in arbitrary order.
    pub fn field_names(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    pub fn extents(&self) -> [usize; 4] {
        self.extents
    }
}

/// A mesh block: immutable geometry plus the registry of named containers.
#[derive(Debug, Clone)]
pub struct MeshBlock {
    pub grid: BlockGrid,
    containers: HashMap<String, FieldContainer>,
}

impl MeshBlock {
    pub fn new(grid: BlockGrid) -> Self {
        MeshBlock {
            grid,
            containers: HashMap::new(),
        }
    }

    /// Register a container pre-populated with the standard bundles.
    pub fn add_container(&mut self, name: &str) {
        let rc = FieldContainer::with_bundles(&self.grid);
        self.containers.insert(name.to_string(), rc);
    }

    pub fn container(&self, name: &str) -> GrmhdResult<&FieldContainer> {
        self.containers
            .get(name)
            .ok_or_else(|| GrmhdError::UnknownContainer(name.to_string()))
    }

    pub fn container_mut(&mut self, name: &str) -> GrmhdResult<&mut FieldContainer> {
        self.containers
            .get_mut(name)
            .ok_or_else(|| GrmhdError::UnknownContainer(name.to_string()))
    }

    /// Mutable access to `N` distinct containers at once. Stage drivers need
    /// the blend input, the derivative and the output simultaneously.
    pub fn containers_disjoint_mut<const N: usize>(
        &mut self,
        names: [&str; N],
    ) -> GrmhdResult<[&mut FieldContainer; N]> {
        for a in 0..N {
            for b in (a + 1)..N {
                if names[a] == names[b] {
                    return Err(GrmhdError::ConfigError(format!(
                        "disjoint container access requires distinct names, got '{}' twice",
                        names[a]
                    )));
                }
            }
        }
        let got = self.containers.get_disjoint_mut(names);
        let mut out = Vec::with_capacity(N);
        for (opt, name) in got.into_iter().zip(names) {
            match opt {
                Some(rc) => out.push(rc),
                None => return Err(GrmhdError::UnknownContainer(name.to_string())),
            }
        }
        out.try_into().map_err(|_| {
            GrmhdError::ConfigError("disjoint container access arity mismatch".to_string())
        })
    }
}
