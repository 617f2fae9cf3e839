use urania::angles::{angular_separation, normalize_degrees};
use urania::houses::{HouseCalculator, HouseSystem};
use urania::time::J2000_JD;

const JD: f64 = J2000_JD + 3742.63;

fn assert_complete(cusps: &[urania::HouseCusp]) {
    assert_eq!(cusps.len(), 12);
    for (i, cusp) in cusps.iter().enumerate() {
        assert_eq!(cusp.house_number as usize, i + 1);
        assert!((0.0..360.0).contains(&cusp.cusp_longitude));
    }
}

#[test]
fn test_every_system_yields_twelve_cusps() {
    let calc = HouseCalculator::new();
    for system in HouseSystem::all() {
        for latitude in [-66.5, -30.0, 0.0, 45.0, 55.75, 89.9] {
            let houses = calc.compute_houses(JD, latitude, 37.62, system);
            assert_eq!(houses.system, system);
            assert!(!houses.fallback);
            assert_complete(&houses.cusps);
        }
    }
}

#[test]
fn test_unknown_identifier_uses_equal_houses() {
    let calc = HouseCalculator::new();
    let houses = calc.compute_houses_for_id(JD, 51.5, -0.12, "topocentric");
    assert_eq!(houses.system, HouseSystem::Equal);
    assert_complete(&houses.cusps);
    let equal = calc.compute_houses(JD, 51.5, -0.12, HouseSystem::Equal);
    assert_eq!(houses, equal);
}

#[test]
fn test_equal_and_whole_sign_identity() {
    let calc = HouseCalculator::new();
    for system in [HouseSystem::Equal, HouseSystem::WholeSign] {
        for latitude in [-45.0, 0.0, 59.9] {
            let houses = calc.compute_houses(JD, latitude, 10.0, system);
            for (i, cusp) in houses.iter().enumerate() {
                assert_eq!(
                    cusp.cusp_longitude,
                    normalize_degrees(houses.ascendant + i as f64 * 30.0)
                );
            }
        }
    }
}

#[test]
fn test_first_cusp_of_equal_houses_is_the_ascendant() {
    let houses = HouseCalculator::new().compute_houses(JD, 40.7, -74.0, HouseSystem::Equal);
    assert_eq!(houses.cusps[0].cusp_longitude, houses.ascendant);
    assert_eq!(houses.descendant(), normalize_degrees(houses.ascendant + 180.0));
}

#[test]
fn test_invalid_coordinates_take_the_fixed_fallback() {
    let calc = HouseCalculator::new();
    for (latitude, longitude) in [(95.0, 0.0), (0.0, 200.0), (f64::NAN, 0.0)] {
        let houses = calc.compute_houses(JD, latitude, longitude, HouseSystem::Koch);
        assert!(houses.fallback);
        assert_complete(&houses.cusps);
        for (i, cusp) in houses.iter().enumerate() {
            assert_eq!(cusp.cusp_longitude, i as f64 * 30.0);
        }
    }
    let houses = calc.compute_houses(f64::NAN, 10.0, 10.0, HouseSystem::Placidus);
    assert!(houses.fallback);
}

#[test]
fn test_cusps_are_continuous_in_latitude_and_time() {
    let calc = HouseCalculator::new();
    for system in HouseSystem::all() {
        let base = calc.compute_houses(JD, 48.0, 11.5, system);
        let nudged_lat = calc.compute_houses(JD, 48.001, 11.5, system);
        let nudged_time = calc.compute_houses(JD + 1e-5, 48.0, 11.5, system);
        for i in 0..12 {
            let a = base.cusps[i].cusp_longitude;
            assert!(angular_separation(a, nudged_lat.cusps[i].cusp_longitude) < 0.05);
            assert!(angular_separation(a, nudged_time.cusps[i].cusp_longitude) < 0.05);
        }
    }
}

#[test]
fn test_perturbed_systems_differ_from_equal() {
    let calc = HouseCalculator::new();
    let equal = calc.compute_houses(JD, 50.0, 8.0, HouseSystem::Equal);
    for system in HouseSystem::all().filter(|s| !s.is_equal_spaced()) {
        let houses = calc.compute_houses(JD, 50.0, 8.0, system);
        assert_eq!(houses.ascendant, equal.ascendant);
        let differs = houses
            .iter()
            .zip(equal.iter())
            .any(|(a, b)| angular_separation(a.cusp_longitude, b.cusp_longitude) > 0.01);
        assert!(differs, "{} matches equal houses", system);
    }
}

#[test]
fn test_ascendant_and_midheaven_are_normalized() {
    let calc = HouseCalculator::new();
    for step in 0..100 {
        let houses = calc.compute_houses(JD + step as f64 * 0.37, -33.9, 151.2, HouseSystem::Porphyry);
        assert!((0.0..360.0).contains(&houses.ascendant));
        assert!((0.0..360.0).contains(&houses.midheaven));
    }
}
