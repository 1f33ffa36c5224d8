// crates/infra/src/prompt.rs
use std::io::{self, BufRead, Write};

use readability_ports::prompt::Prompt;
use readability_shared_kernel::{InfrastructureError, Result};

/// Line-oriented prompt: writes the question, reads one answer line.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.output, "{question}")
            .and_then(|()| self.output.flush())
            .map_err(|source| InfrastructureError::PromptIo { source })?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| InfrastructureError::PromptIo { source })?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
