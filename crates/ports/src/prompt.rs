// crates/ports/src/prompt.rs
use readability_shared_kernel::Result;

/// Port for a question/answer exchange with the user.
pub trait Prompt {
    /// Show `question` and wait for one line of input.
    ///
    /// Returns `None` when the input is exhausted.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}
