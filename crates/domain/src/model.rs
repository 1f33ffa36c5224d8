pub mod entities;
pub mod value_objects;

pub use entities::{TextStatistics, TextStatisticsBuilder};
pub use value_objects::{ReadingAge, Score, ScoreKind};
