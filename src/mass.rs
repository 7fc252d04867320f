pub mod mmass {
    use log::debug;

    use crate::comet_types::mcomet_types::Observation;
    use crate::constants::mconstants::{MAGNITUDE_OFFSET, MASS_DENOMINATOR};
    use crate::errors::merrors::{CometError, CometResult};

    /// Total mass of a comet in kg.
    ///
    /// * `m_k` - apparent visual magnitude
    /// * `delta` - distance from Earth, AU
    /// * `r` - distance from Sun, AU
    ///
    /// No input is validated. Zero distances give 0, and IEEE special values
    /// (underflow to 0, overflow to infinity, NaN) are returned as they come
    /// out of the arithmetic.
    pub fn calculate_mass(m_k: f64, delta: f64, r: f64) -> f64 {
        // 10^(-0.4 m_k - 0.4 m_lx) * delta^2 r^2 / (1.37e-38 f_C2)
        let exponent = -0.4 * m_k + MAGNITUDE_OFFSET;
        // Squares are grouped so that swapping delta and r is bit-exact.
        let distances = (delta * delta) * (r * r);
        let numerator = 10f64.powf(exponent) * distances;
        numerator / MASS_DENOMINATOR
    }

    /// Same as [`calculate_mass`], but refuses non-finite inputs and negative
    /// distances instead of returning a physically meaningless mass.
    ///
    /// Zero distances are still accepted. For every accepted input the result
    /// is bit-identical to `calculate_mass`.
    pub fn calculate_mass_checked(m_k: f64, delta: f64, r: f64) -> CometResult<f64> {
        for (name, value) in [("m_k", m_k), ("delta", delta), ("r", r)] {
            if !value.is_finite() {
                debug!("rejecting non-finite {}: {}", name, value);
                return Err(CometError::NonFinite { name, value });
            }
        }
        for distance in [delta, r] {
            if distance < 0.0 {
                debug!("rejecting negative distance {}", distance);
                return Err(CometError::NegativeDistance(distance));
            }
        }
        Ok(calculate_mass(m_k, delta, r))
    }

    pub fn calculate_masses(observations: &[Observation]) -> Vec<f64> {
        observations.iter().map(Observation::mass).collect()
    }
}
