//! Primary stream appender (stdout / stderr)

use crate::core::Stream;
use std::fmt;
use std::io::{self, Write};

type BoxedWriter = Box<dyn Write + Send>;

/// Writes lines to the process's standard output or standard error
///
/// The two writers can be replaced, which is how tests capture console
/// output.
pub struct ConsoleAppender {
    stdout: BoxedWriter,
    stderr: BoxedWriter,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    /// Use custom writers in place of stdout and stderr
    ///
    /// # Example
    ///
    /// ```
    /// use multi_sink_logger::appenders::ConsoleAppender;
    /// use multi_sink_logger::core::Stream;
    ///
    /// let mut console = ConsoleAppender::with_writers(Vec::new(), std::io::sink());
    /// console.write_line(Stream::Stdout, "hello").unwrap();
    /// ```
    pub fn with_writers<O, E>(stdout: O, stderr: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            stdout: Box::new(stdout),
            stderr: Box::new(stderr),
        }
    }

    /// Write `line` and a newline to `stream`, flushing it.
    pub fn write_line(&mut self, stream: Stream, line: &str) -> io::Result<()> {
        let writer = match stream {
            Stream::Stdout => &mut self.stdout,
            Stream::Stderr => &mut self.stderr,
        };

        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        writer.write_all(buf.as_bytes())?;
        writer.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        // Flush both since we write to both
        self.stdout.flush()?;
        self.stderr.flush()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsoleAppender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleAppender").finish_non_exhaustive()
    }
}
