use anyhow::Result;
use std::io::{BufRead, Write};
use tokendex_core::{DocumentStore, Engine};

pub const PROMPT: &str = "Enter command:";
pub const CONTINUE_PROMPT: &str = "Continue? [Y/N]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Prompt for a command, answer it, then ask whether to continue.
    Interactive,
    /// One command per line, no prompts.
    Batch,
}

/// Drive `engine` from `input` until the user stops or input runs out.
/// Returns the number of commands executed.
pub fn run_session<S, R, W>(engine: &mut Engine<S>, mut input: R, mut output: W, mode: Mode) -> Result<usize>
where
    S: DocumentStore,
    R: BufRead,
    W: Write,
{
    let mut executed = 0;
    let mut line = String::new();
    loop {
        if mode == Mode::Interactive {
            writeln!(output, "{PROMPT}")?;
            output.flush()?;
        }
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if mode == Mode::Batch && line.trim().is_empty() {
            continue;
        }

        let reply = engine.execute(&line);
        executed += 1;
        writeln!(output, "{reply}")?;

        if mode == Mode::Interactive {
            writeln!(output, "{CONTINUE_PROMPT}")?;
            output.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 || !line.trim().eq_ignore_ascii_case("y") {
                break;
            }
        }
    }
    tracing::info!(executed, tokens = engine.inverted_index().token_count(), "session finished");
    Ok(executed)
}
