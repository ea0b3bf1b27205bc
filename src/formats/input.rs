use {
    std::{
        fmt,
        str::FromStr,
    },
    chrono::prelude::*,
    crate::formats::{
        FormatError,
        Rule,
        resolve,
    },
};

/// Rules for reading a timestamp as an integer count of some unit since the Unix epoch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    /// POSIX timestamp, `unix`/`sec`/`secs`.
    #[default]
    Seconds,
    /// `milli`/`millis`
    Milliseconds,
    /// `micro`/`micros`
    Microseconds,
    /// `nano`/`nanos`
    Nanoseconds,
}

impl InputFormat {
    /// Parses `text` as a base-10 signed 64-bit integer and interprets it in this rule's unit.
    ///
    /// Surrounding whitespace is not stripped, so `"12\r"` is malformed.
    pub fn decode(self, text: &str) -> Result<DateTime<Utc>, FormatError> {
        let count = text.parse::<i64>()?;
        match self {
            InputFormat::Seconds => DateTime::from_timestamp(count, 0),
            InputFormat::Milliseconds => DateTime::from_timestamp_millis(count),
            InputFormat::Microseconds => DateTime::from_timestamp_micros(count),
            InputFormat::Nanoseconds => Some(DateTime::from_timestamp_nanos(count)),
        }.ok_or(FormatError::Timestamp)
    }
}

impl Rule for InputFormat {
    const ALL: &'static [InputFormat] = &[
        InputFormat::Seconds,
        InputFormat::Milliseconds,
        InputFormat::Microseconds,
        InputFormat::Nanoseconds,
    ];

    fn aliases(self) -> &'static [&'static str] {
        match self {
            InputFormat::Seconds => &["unix", "sec", "secs"],
            InputFormat::Milliseconds => &["milli", "millis"],
            InputFormat::Microseconds => &["micro", "micros"],
            InputFormat::Nanoseconds => &["nano", "nanos"],
        }
    }
}

impl FromStr for InputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<InputFormat, FormatError> {
        resolve(s)
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.default_alias().fmt(f)
    }
}
