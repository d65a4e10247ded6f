use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

use crate::error::QuizError;

/// Line-oriented text channel to the player.
pub struct Console<R, W> {
    input: R,
    output: W,
}

pub type StdConsole = Console<BufReader<Stdin>, Stdout>;

pub fn stdio() -> StdConsole {
    Console::new(BufReader::new(io::stdin()), io::stdout())
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` followed by a newline.
    pub async fn say(&mut self, text: &str) -> Result<(), QuizError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Writes `text` as-is, for prompts that keep the cursor on the line.
    pub async fn prompt(&mut self, text: &str) -> Result<(), QuizError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Next line without its line ending, or `None` at end of input.
    pub async fn read_line(&mut self) -> Result<Option<String>, QuizError> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
