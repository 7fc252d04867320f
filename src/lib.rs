pub mod comet_types;
pub mod constants;
pub mod errors;
pub mod format;
pub mod mass;
pub mod size;


pub use crate::comet_types::mcomet_types::{Nucleus, Observation};
pub use crate::errors::merrors::{CometError, CometResult};
pub use crate::format::mformat::format_mass;
pub use crate::mass::mmass::{calculate_mass, calculate_mass_checked, calculate_masses};
pub use crate::size::msize::{calculate_diameter, calculate_diameters};

#[cfg(feature = "python-binding")]
mod python {
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::errors::merrors::CometError;
    use crate::format::mformat;
    use crate::mass::mmass;
    use crate::size::msize;

    impl From<CometError> for PyErr {
        fn from(err: CometError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    /// Comet mass (kg) from apparent magnitude, Earth distance (AU) and Sun distance (AU).
    #[pyfunction]
    #[pyo3(name = "calculate_mass", text_signature = "(m_k, delta, r)")]
    fn calculate_mass(m_k: f64, delta: f64, r: f64) -> f64 {
        mmass::calculate_mass(m_k, delta, r)
    }

    /// Like calculate_mass, but raises ValueError on negative or non-finite input.
    #[pyfunction]
    #[pyo3(name = "calculate_mass_checked", text_signature = "(m_k, delta, r)")]
    fn calculate_mass_checked(m_k: f64, delta: f64, r: f64) -> PyResult<f64> {
        Ok(mmass::calculate_mass_checked(m_k, delta, r)?)
    }

    /// Nucleus diameter (km) from absolute magnitude and albedo in (0, 1].
    #[pyfunction]
    #[pyo3(name = "calculate_diameter", text_signature = "(h, albedo)")]
    fn calculate_diameter(h: f64, albedo: f64) -> PyResult<f64> {
        Ok(msize::calculate_diameter(h, albedo)?)
    }

    #[pyfunction]
    #[pyo3(name = "format_mass", text_signature = "(mass)")]
    fn format_mass(mass: f64) -> String {
        mformat::format_mass(mass)
    }

    /// Comet mass and nucleus size calculators implemented in Rust.
    #[pymodule]
    fn comet_mass(_py: Python, m: &PyModule) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(calculate_mass, m)?)?;
        m.add_function(wrap_pyfunction!(calculate_mass_checked, m)?)?;
        m.add_function(wrap_pyfunction!(calculate_diameter, m)?)?;
        m.add_function(wrap_pyfunction!(format_mass, m)?)?;
        Ok(())
    }

    #[cfg(all(test, feature = "python-test"))]
    mod tests {
        use pyo3::exceptions::PyValueError;
        use pyo3::prelude::*;

        use super::{calculate_diameter, calculate_mass_checked};
        use crate::errors::merrors::CometError;

        #[test]
        fn test_comet_error_is_value_error() {
            Python::with_gil(|py| {
                let err: PyErr = CometError::InvalidAlbedo(0.0).into();
                assert!(err.is_instance_of::<PyValueError>(py));
                assert_eq!(err.value(py).to_string(), "albedo must be in the range (0, 1]: 0");
            });
        }

        #[test]
        fn test_checked_functions_raise_value_error() {
            Python::with_gil(|py| {
                let err = calculate_diameter(10.0, 1.1).unwrap_err();
                assert!(err.is_instance_of::<PyValueError>(py));
                let err = calculate_mass_checked(10.0, -1.0, 1.0).unwrap_err();
                assert!(err.is_instance_of::<PyValueError>(py));
                assert_eq!(err.value(py).to_string(), "distance cannot be negative: -1");
                assert!(calculate_mass_checked(10.0, 1.0, 1.0).is_ok());
            });
        }
    }
}
