use std::fmt;

use thiserror::Error;

use super::types::InvalidChars;

/// Error taxonomy surfaced by the strict validator.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingAddress,
    BaseFormat,
    LocalPart,
    Domain,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingAddress => "MissingAddressError",
            Self::BaseFormat => "BaseFormatError",
            Self::LocalPart => "LocalPartError",
            Self::Domain => "DomainError",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("the address to validate must be provided")]
    MissingAddress,
    #[error("{message}")]
    BaseFormat { message: String },
    #[error("{message}")]
    LocalPart {
        message: String,
        invalid_chars: Option<InvalidChars>,
    },
    #[error("{message}")]
    Domain {
        message: String,
        label: Option<String>,
        invalid_chars: Option<InvalidChars>,
    },
}

impl EmailError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingAddress => ErrorKind::MissingAddress,
            Self::BaseFormat { .. } => ErrorKind::BaseFormat,
            Self::LocalPart { .. } => ErrorKind::LocalPart,
            Self::Domain { .. } => ErrorKind::Domain,
        }
    }

    /// Offending characters, when the error comes from a character-class check.
    pub fn invalid_chars(&self) -> Option<&InvalidChars> {
        match self {
            Self::LocalPart { invalid_chars, .. } | Self::Domain { invalid_chars, .. } => {
                invalid_chars.as_ref()
            }
            _ => None,
        }
    }

    /// DNS label the error refers to, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Domain { label, .. } => label.as_deref(),
            _ => None,
        }
    }

    pub(crate) fn base_format(message: impl Into<String>) -> Self {
        Self::BaseFormat {
            message: message.into(),
        }
    }

    pub(crate) fn local_part(message: impl Into<String>) -> Self {
        Self::LocalPart {
            message: message.into(),
            invalid_chars: None,
        }
    }

    pub(crate) fn local_part_chars(message: impl Into<String>, chars: InvalidChars) -> Self {
        Self::LocalPart {
            message: message.into(),
            invalid_chars: Some(chars),
        }
    }

    pub(crate) fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
            label: None,
            invalid_chars: None,
        }
    }

    pub(crate) fn dns_label(message: impl Into<String>, label: &str) -> Self {
        Self::Domain {
            message: message.into(),
            label: Some(label.to_string()),
            invalid_chars: None,
        }
    }

    pub(crate) fn dns_label_chars(
        message: impl Into<String>,
        label: &str,
        chars: InvalidChars,
    ) -> Self {
        Self::Domain {
            message: message.into(),
            label: Some(label.to_string()),
            invalid_chars: Some(chars),
        }
    }
}
