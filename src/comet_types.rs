pub mod mcomet_types {
    use crate::errors::merrors::CometResult;
    use crate::mass::mmass::{calculate_mass, calculate_mass_checked};
    use crate::size::msize::calculate_diameter;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Observation {
        pub m_k: f64,   // apparent magnitude
        pub delta: f64, // AU, from Earth
        pub r: f64,     // AU, from Sun
    }

    impl Observation {
        pub fn new(m_k: f64, delta: f64, r: f64) -> Self {
            Self { m_k, delta, r }
        }

        /// Mass in kg, without any validation of the distances.
        pub fn mass(&self) -> f64 {
            calculate_mass(self.m_k, self.delta, self.r)
        }

        pub fn mass_checked(&self) -> CometResult<f64> {
            calculate_mass_checked(self.m_k, self.delta, self.r)
        }

        // delta and r enter the formula the same way, so this has the same mass.
        pub fn symmetric(&self) -> Self {
            Self { m_k: self.m_k, delta: self.r, r: self.delta }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Nucleus {
        pub h: f64,      // absolute magnitude
        pub albedo: f64, // geometric, (0, 1]
    }

    impl Nucleus {
        pub fn new(h: f64, albedo: f64) -> Self {
            Self { h, albedo }
        }

        /// Diameter in km.
        pub fn diameter(&self) -> CometResult<f64> {
            calculate_diameter(self.h, self.albedo)
        }
    }
}
