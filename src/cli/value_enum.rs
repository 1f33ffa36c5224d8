use clap::ValueEnum;
use readability_domain::{
    model::ScoreKind,
    options::{OutputFormat, ScoreSelection},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum CliScore {
    Ari,
    Fk,
    Smog,
    Cl,
    #[value(name = "all")]
    All,
}

impl From<CliScore> for ScoreSelection {
    fn from(value: CliScore) -> Self {
        match value {
            CliScore::Ari => ScoreSelection::Single(ScoreKind::Ari),
            CliScore::Fk => ScoreSelection::Single(ScoreKind::FleschKincaid),
            CliScore::Smog => ScoreSelection::Single(ScoreKind::Smog),
            CliScore::Cl => ScoreSelection::Single(ScoreKind::ColemanLiau),
            CliScore::All => ScoreSelection::All,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}
