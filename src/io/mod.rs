//! Destinations for verbose solver output.
//!
//! Solvers write their progress reports to a [`PrintTarget`], which by
//! default is the process stdout.  Anything implementing
//! [`ConfigurablePrintTarget`] can be redirected to a file, an arbitrary
//! stream, an in-memory buffer, or discarded altogether.

use std::fs::File;
use std::io::{self, Stdout, Write};

/// Destination of verbose output.
pub enum PrintTarget {
    Stdout(Stdout),
    File(File),
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>),
    Sink,
}

impl Default for PrintTarget {
    fn default() -> Self {
        PrintTarget::Stdout(io::stdout())
    }
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PrintTarget::Stdout(_) => "Stdout",
            PrintTarget::File(_) => "File",
            PrintTarget::Buffer(_) => "Buffer",
            PrintTarget::Stream(_) => "Stream",
            PrintTarget::Sink => "Sink",
        };
        write!(f, "PrintTarget::{name}")
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            PrintTarget::Stdout(out) => out.write(buf),
            PrintTarget::File(file) => file.write(buf),
            PrintTarget::Buffer(buffer) => {
                buffer.extend_from_slice(buf);
                Ok(buf.len())
            }
            PrintTarget::Stream(stream) => stream.write(buf),
            PrintTarget::Sink => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            PrintTarget::Stdout(out) => out.flush(),
            PrintTarget::File(file) => file.flush(),
            PrintTarget::Stream(stream) => stream.flush(),
            PrintTarget::Buffer(_) | PrintTarget::Sink => Ok(()),
        }
    }
}

/// Redirection of verbose output.
pub trait ConfigurablePrintTarget {
    /// print to stdout (the default)
    fn print_to_stdout(&mut self);
    /// print to a file
    fn print_to_file(&mut self, file: File);
    /// print to any writable stream
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>);
    /// discard all output
    fn print_to_sink(&mut self);
    /// collect output in an internal buffer
    fn print_to_buffer(&mut self);
    /// Contents of the internal buffer.  Fails if output is not
    /// currently being buffered.
    fn get_print_buffer(&mut self) -> io::Result<String>;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::Stdout(io::stdout());
    }

    fn print_to_file(&mut self, file: File) {
        *self = PrintTarget::File(file);
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Stream(stream);
    }

    fn print_to_sink(&mut self) {
        *self = PrintTarget::Sink;
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn get_print_buffer(&mut self) -> io::Result<String> {
        match self {
            PrintTarget::Buffer(buffer) => Ok(String::from_utf8_lossy(buffer).into_owned()),
            _ => Err(io::Error::new(
                io::ErrorKind::Other,
                "print buffering is not configured",
            )),
        }
    }
}
