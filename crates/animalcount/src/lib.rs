pub mod handlers;
pub mod matcher;

pub use handlers::{AppState, router};
pub use matcher::{count_animals, count_plurals, match_animals, strip_size_adjectives};
