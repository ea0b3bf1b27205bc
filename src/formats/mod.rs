use {
    std::num::ParseIntError,
    log::trace,
};

mod input;
mod output;

pub use self::{
    input::InputFormat,
    output::OutputFormat,
};

/// An error that occurred while resolving a format or applying its rule.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The timestamp was not a base-10 signed 64-bit integer.
    #[error("malformed integer: {0}")]
    ParseInt(#[from] ParseIntError),
    /// The timestamp was outside the range of datetimes supported by this implementation.
    #[error("timestamp out of range")]
    Timestamp,
    /// The datetime's year can't be written with four digits. The year is included in the error data.
    #[error("year {0} is outside 0000 to 9999")]
    Year(i32),
    /// The format identifier does not match any alias of any known rule. The identifier is included in the error data.
    #[error("unsupported format: {0:?}")]
    UnsupportedFormat(String),
}

/// A closed set of conversion rules, each selected by a fixed list of lowercase aliases.
pub trait Rule: Copy + Sized + 'static {
    /// Every rule of this kind, in matching order.
    const ALL: &'static [Self];

    /// The aliases accepted for this rule. The first one is canonical.
    fn aliases(self) -> &'static [&'static str];

    /// The canonical alias, used when no format is specified.
    fn default_alias(self) -> &'static str {
        self.aliases()[0]
    }
}

/// Selects the rule whose aliases contain the given identifier, ignoring case and surrounding whitespace.
pub(crate) fn resolve<R: Rule>(identifier: &str) -> Result<R, FormatError> {
    let normalized = identifier.trim().to_lowercase();
    let rule = R::ALL.iter()
        .copied()
        .find(|rule| rule.aliases().contains(&&*normalized))
        .ok_or_else(|| FormatError::UnsupportedFormat(identifier.to_owned()))?;
    trace!("resolved format {identifier:?} to {:?}", rule.default_alias());
    Ok(rule)
}
