pub mod dict;
pub mod language;
pub mod models;
pub mod score;
pub mod settings;

pub use language::Language;
pub use models::{detect, Detection, LanguageModels};
pub use score::ScoreDistribution;
