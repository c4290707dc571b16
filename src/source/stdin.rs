//! Stdin-based command source for piped input.
//!
//! A background thread blocks on stdin and forwards complete lines over a
//! channel, so the TUI event loop can poll without blocking. EOF on stdin
//! closes the channel, which the source surfaces via [`StdinSource::is_complete`].

use crate::model::error::InputError;
use std::io::{BufRead, BufReader, IsTerminal};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;

/// Stdin source for piped JSONL commands.
///
/// Supports both streaming hosts (commands arriving over time) and complete
/// scripts (`cat script.jsonl | hudlink`).
#[derive(Debug)]
pub struct StdinSource {
    rx: Receiver<String>,
    complete: bool,
}

impl StdinSource {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY. This prevents the
    /// TUI from blocking on interactive input when the user forgot to pipe
    /// a command stream.
    pub fn new() -> Result<Self, InputError> {
        if std::io::stdin().is_terminal() {
            return Err(InputError::NoInput);
        }
        // StdinLock is not Send, so the reader thread gets a BufReader over
        // the Stdin handle itself (which locks per read).
        Ok(Self::from_reader(BufReader::new(std::io::stdin())))
    }

    /// Create a StdinSource from any reader.
    ///
    /// Spawns the reader thread; the channel closes when the reader hits
    /// EOF or an I/O error.
    pub(crate) fn from_reader<R: BufRead + Send + 'static>(reader: R) -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        thread::spawn(move || {
            for line in reader.lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self {
            rx,
            complete: false,
        }
    }

    /// Drain all lines that have arrived since the last poll.
    ///
    /// Non-blocking: returns immediately with whatever the reader thread
    /// has produced. Sets the complete flag once the channel disconnects.
    ///
    /// # Errors
    ///
    /// Infallible in practice; the `Result` matches the source interface.
    pub fn poll_lines(&mut self) -> Result<Vec<String>, InputError> {
        let mut lines = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(line) => lines.push(line),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.complete = true;
                    break;
                }
            }
        }
        Ok(lines)
    }

    /// Check if EOF has been reached (no more data will arrive).
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    fn drain_until_complete(source: &mut StdinSource) -> Vec<String> {
        let mut all = Vec::new();
        for _ in 0..100 {
            all.extend(source.poll_lines().unwrap());
            if source.is_complete() {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        all
    }

    #[test]
    fn poll_returns_lines_as_they_arrive() {
        let data = Cursor::new(b"{\"line\":1}\n{\"line\":2}\n".to_vec());
        let mut source = StdinSource::from_reader(data);

        let lines = drain_until_complete(&mut source);
        assert_eq!(lines, vec!["{\"line\":1}", "{\"line\":2}"]);
    }

    #[test]
    fn is_complete_true_after_eof() {
        let data = Cursor::new(b"{\"line\":1}\n".to_vec());
        let mut source = StdinSource::from_reader(data);

        drain_until_complete(&mut source);
        assert!(source.is_complete());
    }

    #[test]
    fn empty_input_completes_with_no_lines() {
        let data = Cursor::new(Vec::new());
        let mut source = StdinSource::from_reader(data);

        let lines = drain_until_complete(&mut source);
        assert!(lines.is_empty());
        assert!(source.is_complete());
    }

    #[test]
    fn stdin_reader_type_satisfies_the_thread_spawn_bounds() {
        fn assert_reader<R: BufRead + Send + 'static>() {}
        assert_reader::<BufReader<std::io::Stdin>>();

        let data = BufReader::new(Cursor::new(b"{\"line\":1}\n".to_vec()));
        let mut source = StdinSource::from_reader(data);
        let lines = drain_until_complete(&mut source);
        assert_eq!(lines, vec!["{\"line\":1}"]);
    }

    #[test]
    fn lines_are_stripped_of_newlines() {
        let data = Cursor::new(b"first line\n".to_vec());
        let mut source = StdinSource::from_reader(data);

        let lines = drain_until_complete(&mut source);
        assert_eq!(lines, vec!["first line"]);
    }
}
