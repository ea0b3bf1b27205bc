//! Converts integer epoch timestamps (seconds, milliseconds, microseconds, or nanoseconds since 1970-01-01T00:00:00Z) into calendar datetimes.
//!
//! The `tsconv` binary is a thin wrapper around [`Converter`]: it converts each command-line argument, or each line of standard input if there are no arguments.

#![deny(missing_docs, rust_2018_idioms, unused, unused_import_braces, unused_lifetimes, unused_qualifications, warnings)]
#![forbid(unsafe_code)]

use {
    std::io::{
        self,
        prelude::*,
    },
    chrono::prelude::*,
    chrono_tz::Tz,
    log::trace,
};
pub use crate::formats::{
    FormatError,
    InputFormat,
    OutputFormat,
    Rule,
};

mod formats;

/// An error that aborted a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the input units or writing a converted line failed.
    #[error(transparent)] Io(#[from] io::Error),
    /// A unit could not be read using the input format.
    #[error("Input: {token} as {format}: {source}")]
    Input {
        /// The offending unit, verbatim.
        token: String,
        /// The input format identifier as given by the user.
        format: String,
        /// What went wrong.
        source: FormatError,
    },
    /// A datetime could not be rendered using the output format.
    #[error("Output: {instant} as {format}: {source}")]
    Output {
        /// The datetime which was decoded from the unit.
        instant: DateTime<Utc>,
        /// The output format identifier as given by the user.
        format: String,
        /// What went wrong.
        source: FormatError,
    },
}

/// Converts units from one format to another.
#[derive(Debug, Clone)]
pub struct Converter {
    from: String,
    to: String,
    timezone: Tz,
}

impl Converter {
    /// Creates a converter from the given input and output format identifiers, rendering in UTC.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Converter {
        Converter {
            from: from.into(),
            to: to.into(),
            timezone: Tz::UTC,
        }
    }

    /// Renders output in the given timezone instead of UTC.
    pub fn with_timezone(self, timezone: Tz) -> Converter {
        Converter { timezone, ..self }
    }

    /// Parses a single unit into a datetime.
    pub fn decode(&self, token: &str) -> Result<DateTime<Utc>, Error> {
        self.from.parse::<InputFormat>()
            .and_then(|format| format.decode(token))
            .map_err(|source| Error::Input { token: token.to_owned(), format: self.from.clone(), source })
    }

    /// Renders a datetime as text.
    pub fn encode(&self, instant: DateTime<Utc>) -> Result<String, Error> {
        self.to.parse::<OutputFormat>()
            .and_then(|format| format.encode(instant, self.timezone))
            .map_err(|source| Error::Output { instant, format: self.to.clone(), source })
    }

    /// Decodes and then encodes a single unit.
    pub fn convert(&self, token: &str) -> Result<String, Error> {
        let instant = self.decode(token)?;
        let text = self.encode(instant)?;
        trace!("{token:?} -> {text}");
        Ok(text)
    }

    /// Converts each unit in order, writing one line per unit to `output`.
    ///
    /// Stops at the first error. Lines for units before the failing one have already been written at that point.
    pub fn run<S: AsRef<str>, I: IntoIterator<Item = S>, W: Write>(&self, units: I, mut output: W) -> Result<(), Error> {
        for unit in units {
            writeln!(output, "{}", self.convert(unit.as_ref())?)?;
        }
        Ok(())
    }
}

impl Default for Converter {
    fn default() -> Converter {
        Converter::new(InputFormat::default().default_alias(), OutputFormat::default().default_alias())
    }
}

/// Reads `input` to the end and splits it into units on `\n`.
///
/// Nothing is trimmed, so input ending in a newline yields a trailing empty unit, and empty input yields a single empty unit.
pub fn read_units(mut input: impl Read) -> io::Result<Vec<String>> {
    let mut buf = String::default();
    input.read_to_string(&mut buf)?;
    Ok(buf.split('\n').map(str::to_owned).collect())
}
