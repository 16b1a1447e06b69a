// ─────────────────────────────────────────────────────────────────────
// Torus GRMHD — Config
// License: BSD 3-Clause
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{GrmhdError, GrmhdResult};
use crate::state::BlockGrid;

/// Top-level run configuration, loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrmhdConfig {
    pub grid: GridConfig,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub b_field: SeedConfig,
}

/// Per-block grid dimensions and radial extent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub n1: usize,
    pub n2: usize,
    pub n3: usize,
    #[serde(default = "default_nghost")]
    pub nghost: usize,
    pub r_in: f64,
    pub r_out: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Adiabatic index of the gamma-law equation of state.
    #[serde(default = "default_gamma")]
    pub gamma: f64,
}

/// Magnetic-field seeding parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Seed-formula name: one of `none|sane|ryan|r3s3|gaussian`.
    /// `none` makes the whole seeding pipeline a no-op.
    #[serde(rename = "type", default = "default_seed_type")]
    pub b_type: String,
    /// Reference radius of the seed potential.
    #[serde(default = "default_rin")]
    pub rin: f64,
    /// Minimum-density threshold below which the potential is cut off.
    #[serde(default = "default_min_rho_q")]
    pub min_rho_q: f64,
    /// Target minimum plasma beta after renormalization.
    #[serde(default = "default_beta_target")]
    pub beta_target: f64,
}

fn default_nghost() -> usize {
    2
}

fn default_gamma() -> f64 {
    5.0 / 3.0
}

fn default_seed_type() -> String {
    "none".to_string()
}

fn default_rin() -> f64 {
    6.0
}

fn default_min_rho_q() -> f64 {
    0.2
}

fn default_beta_target() -> f64 {
    100.0
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            gamma: default_gamma(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            b_type: default_seed_type(),
            rin: default_rin(),
            min_rho_q: default_min_rho_q(),
            beta_target: default_beta_target(),
        }
    }
}

impl GrmhdConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file(path: &str) -> GrmhdResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: GrmhdConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every numeric input before any grid is built. Seed-formula
    /// string validity is checked by the seeding pipeline itself, which owns
    /// the closed set of recognized names.
    pub fn validate(&self) -> GrmhdResult<()> {
        let g = &self.grid;
        if g.n1 == 0 || g.n2 == 0 || g.n3 == 0 {
            return Err(GrmhdError::ConfigError(format!(
                "grid dimensions must all be >= 1, got ({}, {}, {})",
                g.n1, g.n2, g.n3
            )));
        }
        if g.nghost == 0 {
            return Err(GrmhdError::ConfigError(
                "nghost must be >= 1 (corner stencils read one cell inward)".to_string(),
            ));
        }
        if !g.r_in.is_finite() || !g.r_out.is_finite() || g.r_in <= 0.0 || g.r_out <= g.r_in {
            return Err(GrmhdError::ConfigError(format!(
                "radial extent must satisfy 0 < r_in < r_out, got [{}, {}]",
                g.r_in, g.r_out
            )));
        }
        if !self.physics.gamma.is_finite() || self.physics.gamma <= 1.0 {
            return Err(GrmhdError::ConfigError(format!(
                "adiabatic index must be finite and > 1, got {}",
                self.physics.gamma
            )));
        }
        let b = &self.b_field;
        if !b.rin.is_finite() || b.rin <= 0.0 {
            return Err(GrmhdError::ConfigError(format!(
                "seed reference radius must be finite and > 0, got {}",
                b.rin
            )));
        }
        if !b.min_rho_q.is_finite() || b.min_rho_q < 0.0 {
            return Err(GrmhdError::ConfigError(format!(
                "min_rho_q must be finite and >= 0, got {}",
                b.min_rho_q
            )));
        }
        if !b.beta_target.is_finite() || b.beta_target <= 0.0 {
            return Err(GrmhdError::ConfigError(format!(
                "beta_target must be finite and > 0, got {}",
                b.beta_target
            )));
        }
        Ok(())
    }

    /// Build the block grid described by this configuration.
    pub fn create_block_grid(&self) -> BlockGrid {
        BlockGrid::new(
            self.grid.n1,
            self.grid.n2,
            self.grid.n3,
            self.grid.nghost,
            self.grid.r_in,
            self.grid.r_out,
        )
    }
}
