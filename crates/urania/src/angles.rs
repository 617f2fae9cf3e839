//! Degree arithmetic shared by the ephemeris, house and aspect modules.

/// Normalize an angle in degrees into `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `360.0`,
/// which is folded back to `0.0` here.
pub fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Shorter-arc separation between two longitudes, in `[0, 180]`.
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Signed shortest delta from `from` to `to`, in `(-180, 180]`.
///
/// Used for finite-difference speeds where the body may cross 0°/360°.
pub fn signed_delta(from: f64, to: f64) -> f64 {
    let mut delta = to - from;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta <= -180.0 {
        delta += 360.0;
    }
    delta
}
