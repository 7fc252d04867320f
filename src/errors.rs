pub mod merrors {
    use thiserror::Error;

    pub type CometResult<T> = Result<T, CometError>;

    /// Physical inputs the validating calculators refuse.
    ///
    /// `calculate_mass` never produces one of these; only the checked and
    /// nucleus-size calculators do.
    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum CometError {
        #[error("distance cannot be negative: {0}")]
        NegativeDistance(f64),

        #[error("albedo must be in the range (0, 1]: {0}")]
        InvalidAlbedo(f64),

        #[error("{name} must be finite, got {value}")]
        NonFinite { name: &'static str, value: f64 },

        #[error("length mismatch: {h} magnitudes but {albedo} albedos")]
        LengthMismatch { h: usize, albedo: usize },
    }
}
