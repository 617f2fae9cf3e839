pub mod zodiac;

pub use zodiac::{
    degree_in_sign, format_degree, sign_index, Element, Modality, Sign, ZodiacSign, ZODIAC_SIGNS,
};
