use chrono::{TimeZone, Utc};
use urania::time::{to_julian_day, J2000_JD};

#[test]
fn test_known_date_is_j2000() {
    let moment = to_julian_day("01.01.2000", "12:00");
    assert!((moment.julian_day - 2451545.0).abs() < 1e-6);
    assert!(!moment.fallback);
    assert_eq!(moment.utc_instant, Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
}

#[test]
fn test_unparseable_input_falls_back_to_j2000() {
    let moment = to_julian_day("not-a-date", "99:99");
    assert_eq!(moment.julian_day, J2000_JD);
    assert!(moment.fallback);
    assert_eq!(moment.utc_instant, Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
}

#[test]
fn test_out_of_range_components_fall_back() {
    for (date, time) in [
        ("31.02.2000", "10:00"),
        ("01.13.2000", "10:00"),
        ("01.01.2000", "24:00"),
        ("01.01.2000", "12:60"),
        ("", ""),
        ("2000/01/01", "12:00"),
    ] {
        let moment = to_julian_day(date, time);
        assert!(moment.fallback, "{} {} should fall back", date, time);
        assert_eq!(moment.julian_day, J2000_JD);
    }
}

#[test]
fn test_both_date_shapes_agree() {
    let dotted = to_julian_day("17.05.1990", "08:30");
    let iso = to_julian_day("1990-05-17", "08:30");
    assert_eq!(dotted, iso);
}

#[test]
fn test_midnight_is_half_a_day_before_noon() {
    let midnight = to_julian_day("2000-01-01", "00:00");
    assert!((midnight.julian_day - 2451544.5).abs() < 1e-9);

    let evening = to_julian_day("01.01.2000", "18:00");
    assert!((evening.julian_day - 2451545.25).abs() < 1e-9);
}

#[test]
fn test_utc_instant_matches_clock() {
    let moment = to_julian_day("1987-11-03", "23:45");
    assert_eq!(moment.utc_instant, Utc.with_ymd_and_hms(1987, 11, 3, 23, 45, 0).unwrap());
}
