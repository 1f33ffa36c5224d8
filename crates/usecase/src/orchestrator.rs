use std::path::Path;

use readability_domain::{analytics, model::TextStatistics, options::ScoreSelection};
use readability_ports::{filesystem::DocumentReader, prompt::Prompt};
use readability_shared_kernel::{ApplicationError, Result};

use crate::dto::{DocumentAnalysis, ScoreReport};

/// Question shown before reading the score selector.
pub const SELECTION_QUESTION: &str = "Enter the score you want to calculate (ARI, FK, SMOG, CL, all):";

/// Loads a document through its port and measures it.
pub struct AnalyzeDocument<'a> {
    reader: &'a dyn DocumentReader,
}

impl<'a> AnalyzeDocument<'a> {
    pub fn new(reader: &'a dyn DocumentReader) -> Self {
        Self { reader }
    }

    /// Returns `None` for a blank document: there is nothing to report.
    pub fn run(&self, path: &Path) -> Result<Option<DocumentAnalysis>> {
        let document = self.reader.read(path)?;
        if document.text.trim().is_empty() {
            log::info!("{} is empty, nothing to analyze", document.path.display());
            return Ok(None);
        }

        let statistics = TextStatistics::measure(&document.text);
        Ok(Some(DocumentAnalysis { path: document.path, statistics }))
    }
}

/// Resolves the score selection, asking the user when none was preselected.
pub struct SelectScores<'a> {
    prompt: &'a mut dyn Prompt,
}

impl<'a> SelectScores<'a> {
    pub fn new(prompt: &'a mut dyn Prompt) -> Self {
        Self { prompt }
    }

    /// Unrecognised answers and end of input both select every score.
    pub fn run(&mut self, preselected: Option<ScoreSelection>) -> Result<ScoreSelection> {
        if let Some(selection) = preselected {
            return Ok(selection);
        }

        let Some(answer) = self.prompt.ask(SELECTION_QUESTION)? else {
            log::debug!("no score selector given, computing all scores");
            return Ok(ScoreSelection::All);
        };

        Ok(answer.parse().unwrap_or_else(|err| {
            log::warn!("{err}; computing all scores");
            ScoreSelection::All
        }))
    }
}

/// Computes the selected scores for measured statistics.
pub struct ScoreDocument;

impl ScoreDocument {
    pub fn run(selection: ScoreSelection, statistics: &TextStatistics) -> Result<ScoreReport> {
        let scores = selection
            .kinds()
            .into_iter()
            .map(|kind| {
                analytics::evaluate(kind, statistics).map_err(|source| ApplicationError::ScoringFailed {
                    kind: kind.label().to_string(),
                    source,
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(ScoreReport { scores })
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, path::PathBuf};

    use readability_domain::model::ScoreKind;
    use readability_ports::filesystem::DocumentDto;
    use readability_shared_kernel::{DomainError, InfrastructureError};

    use super::*;

    struct StubReader {
        text: Option<&'static str>,
    }

    impl DocumentReader for StubReader {
        fn read(&self, path: &Path) -> Result<DocumentDto> {
            match self.text {
                Some(text) => Ok(DocumentDto { path: path.to_path_buf(), text: text.to_string() }),
                None => Err(InfrastructureError::FileRead {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }
                .into()),
            }
        }
    }

    #[derive(Default)]
    struct ScriptedPrompt {
        answers: VecDeque<&'static str>,
        questions: Vec<String>,
    }

    impl ScriptedPrompt {
        fn answering(answers: &[&'static str]) -> Self {
            Self { answers: answers.iter().copied().collect(), questions: Vec::new() }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn ask(&mut self, question: &str) -> Result<Option<String>> {
            self.questions.push(question.to_string());
            Ok(self.answers.pop_front().map(str::to_string))
        }
    }

    #[test]
    fn analyze_measures_text() {
        let reader = StubReader { text: Some("The quick brown fox.") };
        let analysis = AnalyzeDocument::new(&reader)
            .run(Path::new("fox.txt"))
            .expect("run succeeds")
            .expect("document is not empty");

        assert_eq!(analysis.path, PathBuf::from("fox.txt"));
        assert_eq!(analysis.statistics.sentences(), 1usize);
        assert_eq!(analysis.statistics.words(), 4usize);
    }

    #[test]
    fn analyze_skips_blank_document() {
        let reader = StubReader { text: Some("  \n") };
        let analysis = AnalyzeDocument::new(&reader).run(Path::new("blank.txt")).unwrap();
        assert!(analysis.is_none());
    }

    #[test]
    fn analyze_propagates_read_failure() {
        let reader = StubReader { text: None };
        let err = AnalyzeDocument::new(&reader).run(Path::new("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn preselection_skips_prompt() {
        let mut prompt = ScriptedPrompt::answering(&["ARI"]);
        let selection = SelectScores::new(&mut prompt)
            .run(Some(ScoreSelection::Single(ScoreKind::Smog)))
            .unwrap();

        assert_eq!(selection, ScoreSelection::Single(ScoreKind::Smog));
        assert!(prompt.questions.is_empty());
    }

    #[test]
    fn prompt_answer_is_parsed() {
        let mut prompt = ScriptedPrompt::answering(&["cl"]);
        let selection = SelectScores::new(&mut prompt).run(None).unwrap();

        assert_eq!(selection, ScoreSelection::Single(ScoreKind::ColemanLiau));
        assert_eq!(prompt.questions, vec![SELECTION_QUESTION.to_string()]);
    }

    #[test]
    fn unknown_answer_and_eof_select_all() {
        let mut prompt = ScriptedPrompt::answering(&["grade level"]);
        assert_eq!(SelectScores::new(&mut prompt).run(None).unwrap(), ScoreSelection::All);

        let mut prompt = ScriptedPrompt::default();
        assert_eq!(SelectScores::new(&mut prompt).run(None).unwrap(), ScoreSelection::All);
    }

    #[test]
    fn scoring_names_the_failing_index() {
        let err = ScoreDocument::run(ScoreSelection::Single(ScoreKind::Smog), &TextStatistics::default())
            .unwrap_err();

        assert!(err.to_string().contains("Simple Measure of Gobbledygook"));
        assert_eq!(err.as_domain(), Some(&DomainError::InsufficientText { missing: "sentences" }));
    }

    #[test]
    fn scoring_all_keeps_report_order() {
        let stats = TextStatistics::measure("The quick brown fox jumps over the lazy dog.");
        let report = ScoreDocument::run(ScoreSelection::All, &stats).unwrap();
        let kinds: Vec<_> = report.scores.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, ScoreKind::ALL.to_vec());
    }
}
