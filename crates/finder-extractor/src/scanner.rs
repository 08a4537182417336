//! Single-pass scanner for one-column CSV documents
//!
//! The scanner walks the document one character at a time with at most one
//! character of lookahead (to recognize a doubled quotation mark). It never
//! backtracks and never fails: malformed quoting simply leaves the scanner in
//! whatever state it reached, and the end-of-input flush still recovers the
//! partial value.

use tracing::warn;

const QUOTE: char = '"';

/// Where the scanner currently is in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Still inside the header line; everything here is discarded
    InHeader {
        /// Whether a quoted region is open within the header
        quoted: bool,
    },
    /// Reading a data value outside quotation marks
    InUnquotedField,
    /// Reading a data value inside quotation marks
    InQuotedField,
}

/// Stateful scanner producing trimmed, non-blank values in document order.
///
/// Values are not length-filtered here; that is the extractor's job.
#[derive(Debug)]
pub struct DelimitedScanner {
    state: ScanState,
    current: String,
    values: Vec<String>,
}

impl Default for DelimitedScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DelimitedScanner {
    /// Create a scanner positioned at the start of a document
    pub fn new() -> Self {
        Self {
            state: ScanState::InHeader { quoted: false },
            current: String::new(),
            values: Vec::new(),
        }
    }

    /// Scan a whole document
    pub fn scan(text: &str) -> Vec<String> {
        let mut scanner = Self::new();
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if scanner.feed(c, chars.peek().copied()) {
                chars.next();
            }
        }
        scanner.finish()
    }

    /// Current state
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Advance by one character.
    ///
    /// `next` is the following character, if any. Returns `true` when that
    /// lookahead character was consumed as part of a `""` escape.
    pub fn feed(&mut self, c: char, next: Option<char>) -> bool {
        match (self.state, c) {
            (_, '\r') => {}

            (ScanState::InHeader { quoted: true }, QUOTE) if next == Some(QUOTE) => {
                return true;
            }
            (ScanState::InHeader { quoted }, QUOTE) => {
                self.state = ScanState::InHeader { quoted: !quoted };
            }
            (ScanState::InHeader { quoted: false }, '\n') => {
                self.state = ScanState::InUnquotedField;
            }
            (ScanState::InHeader { .. }, _) => {}

            (ScanState::InUnquotedField, QUOTE) => {
                self.state = ScanState::InQuotedField;
            }
            (ScanState::InUnquotedField, '\n') => {
                self.emit();
                self.current.clear();
            }
            (ScanState::InUnquotedField, c) => self.current.push(c),

            (ScanState::InQuotedField, QUOTE) if next == Some(QUOTE) => {
                self.current.push(QUOTE);
                return true;
            }
            (ScanState::InQuotedField, QUOTE) => {
                self.emit();
                self.state = ScanState::InUnquotedField;
            }
            (ScanState::InQuotedField, c) => self.current.push(c),
        }
        false
    }

    /// Flush the trailing value and return everything collected
    pub fn finish(mut self) -> Vec<String> {
        match self.state {
            ScanState::InHeader { .. } => {}
            ScanState::InQuotedField => {
                warn!("document ended inside a quoted field, keeping partial value");
                self.emit();
            }
            ScanState::InUnquotedField => self.emit(),
        }
        self.values
    }

    /// Push the trimmed buffer if it holds anything.
    ///
    /// A blank buffer is left untouched.
    fn emit(&mut self) {
        let trimmed = self.current.trim();
        if !trimmed.is_empty() {
            self.values.push(trimmed.to_string());
            self.current.clear();
        }
    }
}
