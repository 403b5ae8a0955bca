//! Line-oriented console I/O.
//!
//! [`Console`] is generic over its reader and writer so that every prompt in
//! the session can be driven from an in-memory script in tests.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use bikeshare_core::error::{BikeshareError, Result};

/// Answer accepted as consent at every yes/no prompt, compared case-insensitively.
pub const YES: &str = "yes";

/// A prompt/answer channel over a reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's standard input and output.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `prompt`, wait for one line and return it trimmed and lower-cased.
    ///
    /// Fails with [`BikeshareError::InputClosed`] when the input stream ends.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim().to_lowercase())
    }

    /// Ask a yes/no question. Only `"yes"` (any case) counts as consent.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask(prompt)? == YES)
    }

    /// Writer for report views that render directly to the console.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the writer, e.g. to inspect captured output in tests.
    pub fn into_output(self) -> W {
        self.output
    }
}
