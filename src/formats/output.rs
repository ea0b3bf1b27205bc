use {
    std::{
        fmt,
        str::FromStr,
    },
    chrono::{
        SecondsFormat,
        prelude::*,
    },
    chrono_tz::Tz,
    crate::formats::{
        FormatError,
        Rule,
        resolve,
    },
};

/// Rules for rendering a datetime as text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// [RFC 3339](https://www.rfc-editor.org/rfc/rfc3339) with whole seconds, e.g. `1970-01-01T00:16:40Z`. A zero offset is written as `Z`.
    #[default]
    Rfc3339,
}

impl OutputFormat {
    /// Renders `instant` in the given timezone. Subsecond nanoseconds are truncated.
    ///
    /// Fails if the year in that timezone is outside 0000 to 9999.
    pub fn encode(self, instant: DateTime<Utc>, timezone: Tz) -> Result<String, FormatError> {
        let local = instant.with_timezone(&timezone);
        match self {
            OutputFormat::Rfc3339 => {
                if !(0..=9999).contains(&local.year()) {
                    return Err(FormatError::Year(local.year()))
                }
                Ok(local.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
        }
    }
}

impl Rule for OutputFormat {
    const ALL: &'static [OutputFormat] = &[OutputFormat::Rfc3339];

    fn aliases(self) -> &'static [&'static str] {
        match self {
            OutputFormat::Rfc3339 => &["rfc3339"],
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<OutputFormat, FormatError> {
        resolve(s)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.default_alias().fmt(f)
    }
}
