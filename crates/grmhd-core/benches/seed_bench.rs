// ─────────────────────────────────────────────────────────────────────
// Torus GRMHD — Seeding Benchmarks
// License: BSD 3-Clause
// ─────────────────────────────────────────────────────────────────────
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grmhd_core::beta::local_beta_min;
use grmhd_core::eos::GammaLaw;
use grmhd_core::seed::seed_b_field;
use grmhd_types::config::SeedConfig;
use grmhd_types::constants::prims;
use grmhd_types::state::{BlockGrid, FieldContainer, Loci};

fn torus_block(n: usize) -> (BlockGrid, FieldContainer) {
    let grid = BlockGrid::new(n, n, 4, 2, 2.0, 50.0);
    let mut rc = FieldContainer::with_bundles(&grid);
    {
        let p = rc.get_mut("prims").unwrap();
        for k in 0..grid.n3_tot() {
            for j in 0..grid.n2_tot() {
                for i in 0..grid.n1_tot() {
                    let (r, th) = grid.coord_embed(j, i, Loci::Center);
                    let x = r * th.sin() - 12.0;
                    let z = r * th.cos();
                    p[[prims::RHO, k, j, i]] = (-(x * x + z * z) / 20.0).exp();
                    p[[prims::UU, k, j, i]] = 0.1 * p[[prims::RHO, k, j, i]] + 0.01;
                }
            }
        }
    }
    (grid, rc)
}

fn bench_seed(c: &mut Criterion) {
    let cfg = SeedConfig {
        b_type: "r3s3".to_string(),
        ..SeedConfig::default()
    };
    for n in [64usize, 128] {
        let (grid, rc) = torus_block(n);
        c.bench_function(&format!("seed_b_field_{n}x{n}"), |b| {
            b.iter(|| {
                let mut rc2 = rc.clone();
                seed_b_field(black_box(&grid), &mut rc2, black_box(&cfg)).unwrap();
                rc2
            })
        });
    }
}

fn bench_beta_min(c: &mut Criterion) {
    let cfg = SeedConfig {
        b_type: "sane".to_string(),
        ..SeedConfig::default()
    };
    let eos = GammaLaw::new(5.0 / 3.0);
    for n in [64usize, 128] {
        let (grid, mut rc) = torus_block(n);
        seed_b_field(&grid, &mut rc, &cfg).unwrap();
        c.bench_function(&format!("local_beta_min_{n}x{n}"), |b| {
            b.iter(|| local_beta_min(black_box(&grid), black_box(&rc), &eos).unwrap())
        });
    }
}

criterion_group!(benches, bench_seed, bench_beta_min);
criterion_main!(benches);
