use approx::assert_relative_eq;

use comet_mass::{
    calculate_diameter, calculate_diameters, calculate_mass, calculate_mass_checked,
    calculate_masses, format_mass, CometError, Nucleus, Observation,
};

#[test]
fn mass_from_crate_root() {
    let mass = calculate_mass(10.0, 1.0, 1.0);
    assert_relative_eq!(mass, 7.6545e40, max_relative = 1e-4);
    assert_eq!(format_mass(mass), format!("{:.2} × 10²¹ kg", mass / 1e21));
}

#[test]
fn calls_from_many_threads_agree() {
    let expected = calculate_mass(11.5, 0.7, 1.9);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| calculate_mass(11.5, 0.7, 1.9)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().to_bits(), expected.to_bits());
        }
    });
}

#[test]
fn error_messages() {
    assert_eq!(
        CometError::NegativeDistance(-1.0).to_string(),
        "distance cannot be negative: -1"
    );
    assert_eq!(
        CometError::InvalidAlbedo(1.1).to_string(),
        "albedo must be in the range (0, 1]: 1.1"
    );
    let err = calculate_mass_checked(10.0, 1.0, f64::NAN).unwrap_err();
    assert_eq!(err.to_string(), "r must be finite, got NaN");
    let err = calculate_diameters(&[1.0], &[]).unwrap_err();
    assert_eq!(err.to_string(), "length mismatch: 1 magnitudes but 0 albedos");
}

#[test]
fn value_types_match_free_functions() {
    let observations = [Observation::new(10.0, 1.0, 1.0), Observation::new(8.0, 0.5, 2.0)];
    let masses = calculate_masses(&observations);
    assert_eq!(masses[0], observations[0].mass());
    assert_eq!(masses[1], observations[1].symmetric().mass());

    let nucleus = Nucleus::new(15.0, 0.1);
    assert_eq!(nucleus.diameter(), calculate_diameter(15.0, 0.1));
}
