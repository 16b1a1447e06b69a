// ─────────────────────────────────────────────────────────────────────
// Torus GRMHD — Property-Based Tests (proptest) for grmhd-types
// License: BSD 3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for the grid geometry and container registry.

use grmhd_types::constants::NPRIM;
use grmhd_types::state::{BlockGrid, FieldContainer, Loci};
use proptest::prelude::*;

proptest! {
    /// Interior bounds always cover exactly n cells per direction.
    #[test]
    fn grid_bounds_cover_interior(
        n1 in 1usize..48,
        n2 in 1usize..48,
        n3 in 1usize..16,
        nghost in 1usize..4,
    ) {
        let grid = BlockGrid::new(n1, n2, n3, nghost, 2.0, 20.0);
        prop_assert_eq!(grid.ie() - grid.is() + 1, n1);
        prop_assert_eq!(grid.je() - grid.js() + 1, n2);
        prop_assert_eq!(grid.ke() - grid.ks() + 1, n3);
        prop_assert_eq!(grid.n1_tot(), n1 + 2 * nghost);
        prop_assert_eq!(grid.field_extents()[0], NPRIM);
    }

    /// Cell widths are consistent with the configured extent.
    #[test]
    fn grid_spacing_consistency(
        n1 in 1usize..64,
        n2 in 1usize..64,
        r_in in 0.5f64..5.0,
        width in 1.0f64..100.0,
    ) {
        let grid = BlockGrid::new(n1, n2, 4, 2, r_in, r_in + width);
        prop_assert!((grid.dx1 - width / n1 as f64).abs() < 1e-12);
        prop_assert!((grid.dx2 - std::f64::consts::PI / n2 as f64).abs() < 1e-14);
    }

    /// The first interior corner sits exactly at (r_in, 0) and interior
    /// centers are offset half a cell from their corners.
    #[test]
    fn grid_corner_center_offset(
        n1 in 2usize..32,
        n2 in 2usize..32,
        nghost in 1usize..4,
    ) {
        let grid = BlockGrid::new(n1, n2, 4, nghost, 2.0, 20.0);
        let (r0, th0) = grid.coord_embed(grid.js(), grid.is(), Loci::Corner);
        prop_assert!((r0 - 2.0).abs() < 1e-12);
        prop_assert!(th0.abs() < 1e-12);

        for j in grid.js()..=grid.je() {
            for i in grid.is()..=grid.ie() {
                let (rc, thc) = grid.coord_embed(j, i, Loci::Corner);
                let (rm, thm) = grid.coord_embed(j, i, Loci::Center);
                prop_assert!((rm - rc - 0.5 * grid.dx1).abs() < 1e-12);
                prop_assert!((thm - thc - 0.5 * grid.dx2).abs() < 1e-12);
            }
        }
    }

    /// gdet is strictly positive at every index and stagger, ghosts included.
    #[test]
    fn gdet_strictly_positive(
        n1 in 1usize..24,
        n2 in 1usize..24,
        nghost in 1usize..4,
    ) {
        let grid = BlockGrid::new(n1, n2, 2, nghost, 1.0, 10.0);
        for j in 0..grid.n2_tot() {
            for i in 0..grid.n1_tot() {
                prop_assert!(grid.gdet(Loci::Center, j, i) > 0.0);
                prop_assert!(grid.gdet(Loci::Corner, j, i) > 0.0);
            }
        }
    }

    /// Containers built from the same grid always share extents.
    #[test]
    fn containers_share_extents(
        n1 in 1usize..24,
        n2 in 1usize..24,
        n3 in 1usize..8,
    ) {
        let grid = BlockGrid::new(n1, n2, n3, 2, 2.0, 12.0);
        let a = FieldContainer::with_bundles(&grid);
        let b = FieldContainer::with_bundles(&grid);
        prop_assert_eq!(a.extents(), b.extents());
        prop_assert_eq!(a.get("prims").unwrap().shape(), &a.extents()[..]);
    }
}
