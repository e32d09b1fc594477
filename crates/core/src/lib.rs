pub mod catalog;
pub mod models;
pub mod normalize;
pub mod rules;

pub use catalog::{family_price_list, harvest_products};
pub use models::*;
pub use normalize::{normalize_text, MAX_INPUT_GRAPHEMES};
pub use rules::{classify, opening_greeting, Rule, QUICK_REPLIES, RULES};
