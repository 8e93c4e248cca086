use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::command::{Input, parse_input};
use super::escape::quote_bytes;
use super::ui;
use crate::completion::ChatTransport;
use crate::interaction_log::InteractionLog;
use crate::output;
use crate::ui::Spinner;

/// Printed before every read.
pub const PROMPT: &str = "You: ";

const EMPTY_RESPONSE: &str = "Error: empty response";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Prompting,
    Terminated,
}

/// An interactive chat session.
///
/// Each line read is one turn: it is logged, sent to the model on its own
/// (no earlier turns are included) and the first choice of the reply is
/// printed and logged. Turn failures are reported and the session keeps
/// prompting.
pub struct ChatSession<T, W: Write> {
    transport: T,
    log: InteractionLog<W>,
    state: SessionState,
}

impl<T: ChatTransport, W: Write> ChatSession<T, W> {
    pub const fn new(transport: T, log: InteractionLog<W>) -> Self {
        Self {
            transport,
            log,
            state: SessionState::Prompting,
        }
    }

    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Runs the read loop until `exit` or end of input.
    ///
    /// Prompts and replies are written to `out`. Errors are only returned
    /// when reading `input` or writing `out` fails.
    pub async fn run<R, O>(&mut self, mut input: R, out: &mut O) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        O: Write,
    {
        let mut buf = Vec::new();

        while self.state == SessionState::Prompting {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                self.state = SessionState::Terminated;
                break;
            }

            self.handle_line(strip_line_ending(&buf), out).await?;
        }

        Ok(())
    }

    /// Processes one line of input and returns the resulting state.
    ///
    /// The line need not be valid UTF-8: it is logged lossily and invalid
    /// bytes are sent as `\xNN` escapes.
    pub async fn handle_line<O: Write>(
        &mut self,
        line: impl AsRef<[u8]>,
        out: &mut O,
    ) -> Result<SessionState> {
        let line = line.as_ref();
        let text = String::from_utf8_lossy(line);
        self.record(&text);

        if parse_input(&text) == Input::Exit {
            self.state = SessionState::Terminated;
            return Ok(self.state);
        }

        let spinner = if output::is_quiet() {
            Spinner::hidden()
        } else {
            Spinner::new("Thinking...")
        };
        let result = self.transport.send_chat(&quote_bytes(line)).await;
        spinner.stop();

        match result {
            Err(e) => {
                let message = format!("Error getting AI response: {e}");
                self.record(&message);
                ui::print_error(&message);
            }
            Ok(response) => match response.first_content() {
                None => {
                    self.record(EMPTY_RESPONSE);
                    ui::print_error(EMPTY_RESPONSE);
                }
                Some("") => {}
                Some(content) => {
                    let reply = format!("AI: {content}");
                    self.record(&reply);
                    writeln!(out, "{reply}")?;
                }
            },
        }

        Ok(self.state)
    }

    pub fn into_parts(self) -> (T, InteractionLog<W>) {
        (self.transport, self.log)
    }

    fn record(&mut self, message: &str) {
        if let Err(e) = self.log.record(message) {
            tracing::warn!(error = %e, "failed to append to interaction log");
        }
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
