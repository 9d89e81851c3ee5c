use std::collections::BTreeSet;
use std::fmt;

use super::error::{EmailError, ErrorKind};

/// Maximum length of a whole address (RFC 5321 path limit minus the brackets).
pub const EMAIL_MAX_LENGTH: usize = 254;
pub const LOCAL_PART_MAX_LENGTH: usize = 64;
pub const DOMAIN_MAX_LENGTH: usize = 255;
pub const DNS_LABEL_MAX_LENGTH: usize = 64;

/// Length limits applied by the validator, counted in characters.
#[cfg_attr(
    feature = "with-serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub email_max: usize,
    pub local_max: usize,
    pub domain_max: usize,
    pub label_max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            email_max: EMAIL_MAX_LENGTH,
            local_max: LOCAL_PART_MAX_LENGTH,
            domain_max: DOMAIN_MAX_LENGTH,
            label_max: DNS_LABEL_MAX_LENGTH,
        }
    }
}

impl Limits {
    pub fn with_email_max(mut self, email_max: usize) -> Self {
        self.email_max = email_max;
        self
    }

    pub fn with_local_max(mut self, local_max: usize) -> Self {
        self.local_max = local_max;
        self
    }

    pub fn with_domain_max(mut self, domain_max: usize) -> Self {
        self.domain_max = domain_max;
        self
    }

    pub fn with_label_max(mut self, label_max: usize) -> Self {
        self.label_max = label_max;
        self
    }
}

/// An address split at its right-most `@`.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressParts {
    pub local_part: String,
    pub domain: String,
}

impl AddressParts {
    pub fn new(local_part: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            local_part: local_part.into(),
            domain: domain.into(),
        }
    }
}

/// Tagged result of a strict validation.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid { kind: ErrorKind, message: String },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Valid => None,
            Self::Invalid { kind, .. } => Some(*kind),
        }
    }
}

impl<T> From<Result<T, EmailError>> for ValidationOutcome {
    fn from(result: Result<T, EmailError>) -> Self {
        match result {
            Ok(_) => Self::Valid,
            Err(err) => Self::Invalid {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// Deduplicated, sorted set of characters rejected by a grammar rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidChars(BTreeSet<char>);

impl InvalidChars {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl Extend<char> for InvalidChars {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<char> for InvalidChars {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for InvalidChars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
