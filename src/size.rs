pub mod msize {
    use log::debug;

    use crate::constants::mconstants::{ALBEDO_MAX, DIAMETER_CONSTANT_KM};
    use crate::errors::merrors::{CometError, CometResult};

    fn check_albedo(albedo: f64) -> CometResult<f64> {
        // Written so that NaN fails too.
        if albedo > 0.0 && albedo <= ALBEDO_MAX {
            Ok(albedo)
        } else {
            debug!("rejecting albedo {}", albedo);
            Err(CometError::InvalidAlbedo(albedo))
        }
    }

    /// Nucleus diameter in km from absolute magnitude `h` and geometric albedo.
    ///
    /// D = 1329 / sqrt(p) * 10^(-0.2 H)
    pub fn calculate_diameter(h: f64, albedo: f64) -> CometResult<f64> {
        let albedo = check_albedo(albedo)?;
        Ok(DIAMETER_CONSTANT_KM / albedo.sqrt() * 10f64.powf(-0.2 * h))
    }

    /// Element-wise [`calculate_diameter`]. Every albedo is checked before
    /// anything is computed, so the call either fully succeeds or fails on the
    /// first bad albedo.
    pub fn calculate_diameters(h: &[f64], albedo: &[f64]) -> CometResult<Vec<f64>> {
        if h.len() != albedo.len() {
            return Err(CometError::LengthMismatch { h: h.len(), albedo: albedo.len() });
        }
        for p in albedo {
            check_albedo(*p)?;
        }
        h.iter()
            .zip(albedo.iter())
            .map(|(h, p)| calculate_diameter(*h, *p))
            .collect()
    }
}
