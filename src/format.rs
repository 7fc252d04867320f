pub mod mformat {
    use crate::constants::mconstants::{MASS_BAND_1E18, MASS_BAND_1E21};

    /// Human readable mass, e.g. `1.23 × 10²¹ kg`.
    ///
    /// The top band has no upper bound, so masses far above 1e21 kg keep the
    /// 10²¹ suffix with a large mantissa.
    pub fn format_mass(mass: f64) -> String {
        if mass >= MASS_BAND_1E21 {
            format!("{:.2} × 10²¹ kg", mass / 1e21)
        } else if mass >= MASS_BAND_1E18 {
            format!("{:.2} × 10¹⁸ kg", mass / 1e18)
        } else {
            // NaN compares false above and lands here too.
            format!("{:.2e} kg", mass)
        }
    }
}
