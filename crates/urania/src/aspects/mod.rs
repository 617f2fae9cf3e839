pub mod calculator;
pub mod types;

pub use calculator::{
    classify_strength, exactness_score, match_aspect, orb_multiplier, AspectCalculator,
    MAX_ASPECTS, OUTER_ORB_MULTIPLIER,
};
pub use types::{Aspect, AspectDefinition, AspectKind, AspectNature, AspectStrength, ASPECT_CATALOG};
