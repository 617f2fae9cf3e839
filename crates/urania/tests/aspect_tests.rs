use urania::aspects::{AspectCalculator, AspectKind, AspectNature, AspectStrength, MAX_ASPECTS};
use urania::ephemeris::{AnalyticEphemeris, Body, EphemerisBackend, PlanetPosition};
use urania::time::J2000_JD;

fn at(body: Body, longitude: f64) -> PlanetPosition {
    PlanetPosition::new(body, longitude, 0.0, 1.0, body.info().mean_motion)
}

#[test]
fn test_calculate_aspect_conjunction() {
    let calculator = AspectCalculator::new();
    let aspect = calculator
        .calculate_aspect(&at(Body::Sun, 100.0), &at(Body::Venus, 102.0))
        .unwrap();
    assert_eq!(aspect.kind, AspectKind::Conjunction);
    assert!((aspect.orb_delta - 2.0).abs() < 1e-9);
    assert_eq!(aspect.kind.nature(), AspectNature::Neutral);
}

#[test]
fn test_calculate_aspect_opposition_across_zero() {
    let calculator = AspectCalculator::new();
    // 355° and 177° are 178° apart on the shorter arc.
    let aspect = calculator
        .calculate_aspect(&at(Body::Moon, 355.0), &at(Body::Mars, 177.0))
        .unwrap();
    assert_eq!(aspect.kind, AspectKind::Opposition);
    assert!((aspect.actual_angle - 178.0).abs() < 1e-9);
    assert_eq!(aspect.kind.symbol(), "☍");
}

#[test]
fn test_outer_body_widens_the_orb() {
    let calculator = AspectCalculator::new();

    let sun_saturn = calculator
        .calculate_aspect(&at(Body::Sun, 0.0), &at(Body::Saturn, 91.0))
        .unwrap();
    assert_eq!(sun_saturn.kind, AspectKind::Square);
    assert!((sun_saturn.effective_orb - 12.0).abs() < 1e-9);

    let sun_mercury = calculator
        .calculate_aspect(&at(Body::Sun, 0.0), &at(Body::Mercury, 91.0))
        .unwrap();
    assert_eq!(sun_mercury.kind, AspectKind::Square);
    assert!((sun_mercury.effective_orb - 8.0).abs() < 1e-9);

    let wide_saturn = calculator
        .calculate_aspect(&at(Body::Sun, 0.0), &at(Body::Saturn, 100.0))
        .unwrap();
    assert_eq!(wide_saturn.kind, AspectKind::Square);
    assert!((wide_saturn.orb_delta - 10.0).abs() < 1e-9);
    assert_eq!(wide_saturn.strength, AspectStrength::Weak);

    assert!(calculator
        .calculate_aspect(&at(Body::Sun, 0.0), &at(Body::Mercury, 100.0))
        .is_none());
}

#[test]
fn test_exactness_and_strength() {
    let calculator = AspectCalculator::new();
    let exact = calculator
        .calculate_aspect(&at(Body::Venus, 10.0), &at(Body::Mars, 130.5))
        .unwrap();
    assert_eq!(exact.kind, AspectKind::Trine);
    assert_eq!(exact.strength, AspectStrength::Exact);
    assert!((exact.exactness - 93.75).abs() < 1e-9);

    let medium = calculator
        .calculate_aspect(&at(Body::Venus, 10.0), &at(Body::Mars, 71.5))
        .unwrap();
    assert_eq!(medium.kind, AspectKind::Sextile);
    assert_eq!(medium.strength, AspectStrength::Medium);
}

#[test]
fn test_empty_and_single_inputs() {
    let calculator = AspectCalculator::new();
    assert!(calculator.compute_aspects(&[]).is_empty());
    assert!(calculator.compute_aspects(&[at(Body::Sun, 0.0)]).is_empty());
}

#[test]
fn test_list_is_capped_and_sorted() {
    // Every pair is a conjunction, 66 in all.
    let planets: Vec<PlanetPosition> = Body::all()
        .enumerate()
        .map(|(i, body)| at(body, 200.0 + i as f64 * 0.4))
        .collect();
    let aspects = AspectCalculator::new().compute_aspects(&planets);

    assert_eq!(aspects.len(), MAX_ASPECTS);
    assert!(aspects.windows(2).all(|w| w[0].orb_delta <= w[1].orb_delta));
    assert!(aspects.iter().all(|a| a.kind == AspectKind::Conjunction));
}

#[test]
fn test_pairs_are_unique_and_canonical() {
    let eph = AnalyticEphemeris::new();
    for step in 0..50 {
        let planets = eph.compute_planets(J2000_JD + step as f64 * 123.4);
        let aspects = AspectCalculator::new().compute_aspects(&planets);
        for (i, a) in aspects.iter().enumerate() {
            assert!(a.body_a < a.body_b);
            for b in &aspects[i + 1..] {
                assert!(!(a.body_a == b.body_a && a.body_b == b.body_b));
                assert!(!(a.body_a == b.body_b && a.body_b == b.body_a));
            }
        }
    }
}

#[test]
fn test_input_order_does_not_change_result() {
    // Sun-Moon and Moon-Jupiter tie at half a degree.
    let forward = vec![at(Body::Sun, 10.0), at(Body::Moon, 100.5), at(Body::Jupiter, 190.0)];
    let mut reversed = forward.clone();
    reversed.reverse();

    let calc = AspectCalculator::new();
    let a = calc.compute_aspects(&forward);
    let b = calc.compute_aspects(&reversed);
    assert_eq!(a.len(), 3);
    let pairs: Vec<_> = a.iter().map(|x| (x.body_a, x.body_b, x.kind)).collect();
    assert_eq!(
        pairs,
        vec![
            (Body::Sun, Body::Jupiter, AspectKind::Opposition),
            (Body::Sun, Body::Moon, AspectKind::Square),
            (Body::Moon, Body::Jupiter, AspectKind::Square),
        ]
    );
    assert_eq!(a, b);
}
