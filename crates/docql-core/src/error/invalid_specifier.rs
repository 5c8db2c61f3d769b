use super::Error;

/// Error when a table specifier string does not match the specifier grammar.
#[derive(Debug)]
pub(super) struct InvalidSpecifierError {
    specifier: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidSpecifierError {}

impl core::fmt::Display for InvalidSpecifierError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid table specifier `{}`: {}",
            self.specifier, self.reason
        )
    }
}

impl Error {
    /// Creates an invalid specifier error.
    ///
    /// `specifier` is the original input string, `reason` says which part of
    /// `<table>[@<doc>][=><destination>]` is malformed.
    pub fn invalid_specifier(specifier: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSpecifier(InvalidSpecifierError {
            specifier: specifier.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid specifier error.
    pub fn is_invalid_specifier(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSpecifier(_))
    }
}
