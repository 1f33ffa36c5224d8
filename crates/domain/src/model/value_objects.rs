pub mod score;

pub use score::{ReadingAge, Score, ScoreKind};
