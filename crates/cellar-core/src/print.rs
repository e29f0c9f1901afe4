//! Line sinks for printing a cellar.

use std::io::{self, Write};

/// Anything that accepts output one line at a time.
pub trait Printer {
    /// Emit a single line. The line carries no terminator.
    fn println(&mut self, line: &str);
}

/// Prints lines to standard output.
///
/// Write errors (for example a closed pipe) are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutPrinter;

impl Printer for StdoutPrinter {
    fn println(&mut self, line: &str) {
        let _ = writeln!(io::stdout().lock(), "{line}");
    }
}

/// Collects lines in memory.
impl Printer for Vec<String> {
    fn println(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<P: Printer + ?Sized> Printer for &mut P {
    fn println(&mut self, line: &str) {
        (**self).println(line);
    }
}
