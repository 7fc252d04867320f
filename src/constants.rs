pub mod mconstants {
    // Mass formula
    pub const LUX_MAGNITUDE: f64 = -13.78; // magnitude of one lux (m_lx)
    pub const OSCILLATOR_STRENGTH: f64 = 0.031; // C2 Swan band, f_C2
    pub const BASE_CONSTANT: f64 = 1.37e-38;

    // Derived
    pub const MAGNITUDE_OFFSET: f64 = -0.4 * LUX_MAGNITUDE; // 5.512
    pub const MASS_DENOMINATOR: f64 = BASE_CONSTANT * OSCILLATOR_STRENGTH; // 4.247e-40

    // Nucleus size
    pub const DIAMETER_CONSTANT_KM: f64 = 1329.0; // km, diameter at H = 0 and unit albedo
    pub const ALBEDO_MAX: f64 = 1.0; // valid albedo is (0, ALBEDO_MAX]

    // Display bands used by format_mass
    pub const MASS_BAND_1E21: f64 = 1e20; // kg
    pub const MASS_BAND_1E18: f64 = 1e17; // kg
}
