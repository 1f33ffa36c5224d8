pub mod text_statistics;

pub use text_statistics::{TextStatistics, TextStatisticsBuilder};
