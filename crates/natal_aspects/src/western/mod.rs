pub mod signs;

pub use signs::{normalize_degrees, sign_position, Element, Modality, ZodiacSign};
