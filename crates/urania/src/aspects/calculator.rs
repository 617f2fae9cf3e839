use crate::angles::{angular_separation, signed_delta};
use crate::aspects::types::{Aspect, AspectDefinition, AspectStrength, ASPECT_CATALOG};
use crate::ephemeris::types::{Body, PlanetPosition};

/// Maximum number of aspects kept per chart.
pub const MAX_ASPECTS: usize = 15;

/// Orb multiplier when either body is Jupiter or beyond.
pub const OUTER_ORB_MULTIPLIER: f64 = 1.5;

/// Orb multiplier for a pair of bodies.
pub fn orb_multiplier(a: Body, b: Body) -> f64 {
    if a.is_outer() || b.is_outer() {
        OUTER_ORB_MULTIPLIER
    } else {
        1.0
    }
}

/// Strength class from the orb as a fraction of the effective orb.
pub fn classify_strength(orb_delta: f64, effective_orb: f64) -> AspectStrength {
    if orb_delta <= effective_orb * 0.1 {
        AspectStrength::Exact
    } else if orb_delta <= effective_orb * 0.3 {
        AspectStrength::Medium
    } else {
        AspectStrength::Weak
    }
}

/// 100 at exactness, falling linearly to 0 at the edge of the orb.
pub fn exactness_score(orb_delta: f64, effective_orb: f64) -> f64 {
    if effective_orb <= 0.0 {
        return 0.0;
    }
    (100.0 - orb_delta / effective_orb * 100.0).max(0.0)
}

/// Aspect calculator
pub struct AspectCalculator;

impl AspectCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute aspects between every pair of distinct bodies, tightest first,
    /// capped at [`MAX_ASPECTS`].
    pub fn compute_aspects(&self, planets: &[PlanetPosition]) -> Vec<Aspect> {
        let mut aspects = Vec::new();

        for i in 0..planets.len() {
            for j in (i + 1)..planets.len() {
                if planets[i].body == planets[j].body {
                    continue;
                }
                if let Some(aspect) = self.calculate_aspect(&planets[i], &planets[j]) {
                    aspects.push(aspect);
                }
            }
        }

        // Equal orbs fall back to canonical pair order.
        aspects.sort_by(|a, b| {
            a.orb_delta
                .total_cmp(&b.orb_delta)
                .then(a.body_a.cmp(&b.body_a))
                .then(a.body_b.cmp(&b.body_b))
        });
        aspects.truncate(MAX_ASPECTS);

        log::debug!("Found {} aspects among {} bodies", aspects.len(), planets.len());
        aspects
    }

    /// The first aspect type, in catalog order, whose effective orb contains
    /// the pair's separation.
    pub fn calculate_aspect(&self, p1: &PlanetPosition, p2: &PlanetPosition) -> Option<Aspect> {
        let (first, second) = if p1.body <= p2.body { (p1, p2) } else { (p2, p1) };

        if !(first.longitude.is_finite() && second.longitude.is_finite()) {
            return None;
        }

        let angle_diff = angular_separation(first.longitude, second.longitude);
        let multiplier = orb_multiplier(first.body, second.body);
        let (definition, orb_delta, effective_orb) = match_aspect(angle_diff, multiplier)?;

        let applying = self.is_aspect_applying(
            first.longitude,
            second.longitude,
            first.daily_speed,
            second.daily_speed,
            definition.angle,
            angle_diff,
        );

        Some(Aspect {
            body_a: first.body,
            body_b: second.body,
            kind: definition.kind,
            actual_angle: angle_diff,
            orb_delta,
            effective_orb,
            strength: classify_strength(orb_delta, effective_orb),
            exactness: exactness_score(orb_delta, effective_orb),
            applying,
        })
    }

    /// Determine if an aspect is applying (approaching exact) or separating
    fn is_aspect_applying(
        &self,
        lon1: f64,
        lon2: f64,
        speed1: f64,
        speed2: f64,
        aspect_angle: f64,
        current_angle: f64,
    ) -> bool {
        let relative_speed = speed1 - speed2;

        // Direction is unreliable when the bodies move together.
        if relative_speed.abs() < 0.01 {
            return current_angle < aspect_angle + 0.5;
        }

        let signed_diff = signed_delta(lon2, lon1);
        let current_distance = (current_angle - aspect_angle).abs();

        // Project a tenth of a day ahead.
        let time_step = 0.1;
        let future_angle = signed_delta(0.0, signed_diff + relative_speed * time_step).abs();
        let future_distance = (future_angle - aspect_angle).abs();

        future_distance < current_distance
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Match a separation against the catalog. Returns the definition, the orb
/// delta and the effective orb.
pub fn match_aspect(
    separation: f64,
    multiplier: f64,
) -> Option<(&'static AspectDefinition, f64, f64)> {
    ASPECT_CATALOG.iter().find_map(|definition| {
        let effective_orb = definition.orb * multiplier;
        let orb_delta = (separation - definition.angle).abs();
        (orb_delta <= effective_orb).then_some((definition, orb_delta, effective_orb))
    })
}
