#![forbid(unsafe_code)]
//! addrspec_check: validation syntaxique d'adresses e-mail (sous-ensemble RFC 5322)
//!
//! Two modes share the same grammar: [`validate_email`] reports the first
//! failing stage with a diagnostic, [`fast_validate`] only answers yes or no.

pub mod validator;
pub use validator::{
    AddressParts,
    DNS_LABEL_MAX_LENGTH,
    DOMAIN_MAX_LENGTH,
    EMAIL_MAX_LENGTH,
    EmailError,
    EmailValidator,
    ErrorKind,
    InvalidChars,
    LOCAL_PART_MAX_LENGTH,
    Limits,
    ValidationOutcome,
    fast_validate,
    is_email_valid, // affiche le diagnostic, ne propage jamais d'erreur
    strict_validate,
    validate_email,
    validate_email_with_limits,
};
