// ─────────────────────────────────────────────────────────────────────
// Torus GRMHD — EOS
// License: BSD 3-Clause
// ─────────────────────────────────────────────────────────────────────
//! Equation-of-state seam. Kernels construct a `GammaLaw` at entry and drop
//! it at exit; it is a plain value and is never cached across calls.

/// Thermal pressure from the primitive density/energy pair.
pub trait EquationOfState {
    fn pressure(&self, rho: f64, u: f64) -> f64;

    /// Adiabatic index this EOS was built from.
    fn gamma(&self) -> f64;
}

/// Ideal gamma-law gas: `p = (Γ - 1) u`.
#[derive(Debug, Clone, Copy)]
pub struct GammaLaw {
    gamma: f64,
}

impl GammaLaw {
    /// `gamma` is validated at configuration load; this constructor assumes
    /// `gamma > 1`.
    pub fn new(gamma: f64) -> Self {
        GammaLaw { gamma }
    }
}

impl EquationOfState for GammaLaw {
    fn pressure(&self, _rho: f64, u: f64) -> f64 {
        (self.gamma - 1.0) * u
    }

    fn gamma(&self) -> f64 {
        self.gamma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_law_pressure() {
        let eos = GammaLaw::new(5.0 / 3.0);
        assert!((eos.pressure(1.0, 3.0) - 2.0).abs() < 1e-14);
        assert!((eos.pressure(7.0, 3.0) - 2.0).abs() < 1e-14, "density-independent");
        assert_eq!(eos.pressure(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_gamma_accessor() {
        let eos = GammaLaw::new(13.0 / 9.0);
        assert!((eos.gamma() - 13.0 / 9.0).abs() < 1e-14);
    }
}
