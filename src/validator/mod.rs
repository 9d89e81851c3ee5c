mod domain;
mod error;
pub mod grammar;
mod local;
mod split;
mod types;

use std::fmt::Display;
use std::io::{self, Write};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

pub use error::{EmailError, ErrorKind};
pub use types::{
    AddressParts, DNS_LABEL_MAX_LENGTH, DOMAIN_MAX_LENGTH, EMAIL_MAX_LENGTH, InvalidChars,
    LOCAL_PART_MAX_LENGTH, Limits, ValidationOutcome,
};

use domain::check_domain;
use grammar::VALID_ADDRESS;
use local::check_local_part;
use split::split_address;

/// Stateless e-mail syntax validator.
///
/// Holds nothing but its [`Limits`]; every call works on its own copy of the
/// normalized input, so a single validator can be shared freely between
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailValidator {
    limits: Limits,
}

impl EmailValidator {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Strict validation with diagnostics.
    ///
    /// The input is stringified and lowercased once, then checked in a fixed
    /// order (base format, local part, domain). The first failing stage is
    /// returned.
    pub fn validate<T: Display>(&self, address: T) -> Result<AddressParts, EmailError> {
        let address = normalize(address);
        let parts = self
            .check_base(&address)
            .inspect_err(|err| trace_rejection("base", &address, err))?;
        check_local_part(&parts.local_part, &self.limits)
            .inspect_err(|err| trace_rejection("local-part", &address, err))?;
        check_domain(&parts.domain, &self.limits)
            .inspect_err(|err| trace_rejection("domain", &address, err))?;
        Ok(parts)
    }

    /// Same as [`validate`](Self::validate) for an optional input, as a
    /// [`ValidationOutcome`]. `None` is a [`ErrorKind::MissingAddress`].
    pub fn check<T: Display>(&self, address: Option<T>) -> ValidationOutcome {
        match address {
            Some(address) => self.validate(address).into(),
            None => ValidationOutcome::from(Err::<(), _>(EmailError::MissingAddress)),
        }
    }

    /// Syntax and length admissibility only: no diagnostics, never fails.
    ///
    /// The whole address must match the anchored addr-spec pattern; the local
    /// part and domain lengths are then checked again on a split at the last
    /// `@`, independently of what the pattern captured.
    pub fn fast_validate(&self, address: &str) -> bool {
        let address = address.to_lowercase();
        if address.chars().count() > self.limits.email_max || !VALID_ADDRESS.is_match(&address) {
            return false;
        }
        match address.rsplit_once('@') {
            Some((local, domain)) => {
                local.chars().count() <= self.limits.local_max
                    && domain.chars().count() <= self.limits.domain_max
            }
            None => false,
        }
    }

    /// Runs [`check`](Self::check) and reports any failure on stderr.
    pub fn is_email_valid<T: Display>(&self, address: Option<T>) -> bool {
        self.is_email_valid_to(address, &mut io::stderr())
    }

    /// Runs [`check`](Self::check) and writes `"<kind>: <message>"` to `out`
    /// on failure. Never fails, write errors included; a panic while
    /// rendering or validating the input is reported with its payload and
    /// yields `false`.
    pub fn is_email_valid_to<T, W>(&self, address: Option<T>, out: &mut W) -> bool
    where
        T: Display,
        W: Write,
    {
        let mut rendered: Option<String> = None;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            rendered = address.map(|a| a.to_string());
            self.check(rendered.as_deref())
        }));
        match outcome {
            Ok(ValidationOutcome::Valid) => true,
            Ok(ValidationOutcome::Invalid { kind, message }) => {
                #[cfg(feature = "with-tracing")]
                tracing::warn!(
                    %kind,
                    address = rendered.as_deref().unwrap_or_default(),
                    "invalid e-mail address"
                );
                let _ = writeln!(out, "{kind}: {message}");
                false
            }
            Err(payload) => {
                let _ = writeln!(
                    out,
                    "found an unexpected error when validating the address `{}`: {}",
                    rendered.as_deref().unwrap_or_default(),
                    panic_message(payload.as_ref())
                );
                false
            }
        }
    }

    fn check_base(&self, address: &str) -> Result<AddressParts, EmailError> {
        if address.chars().count() > self.limits.email_max {
            return Err(EmailError::base_format(format!(
                "the address cannot be longer than {} characters",
                self.limits.email_max
            )));
        }
        split_address(address)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

fn normalize<T: Display>(address: T) -> String {
    address.to_string().to_lowercase()
}

#[cfg(feature = "with-tracing")]
fn trace_rejection(stage: &'static str, address: &str, err: &EmailError) {
    tracing::debug!(stage, address, kind = %err.kind(), "address rejected");
}

#[cfg(not(feature = "with-tracing"))]
fn trace_rejection(_stage: &'static str, _address: &str, _err: &EmailError) {}

/// Strict validation with the default [`Limits`].
pub fn validate_email<T: Display>(address: T) -> Result<AddressParts, EmailError> {
    EmailValidator::default().validate(address)
}

pub fn validate_email_with_limits<T: Display>(
    address: T,
    limits: Limits,
) -> Result<AddressParts, EmailError> {
    EmailValidator::new(limits).validate(address)
}

/// Strict validation of an optional input, as a tagged outcome.
pub fn strict_validate<T: Display>(address: Option<T>) -> ValidationOutcome {
    EmailValidator::default().check(address)
}

pub fn fast_validate(address: &str) -> bool {
    EmailValidator::default().fast_validate(address)
}

/// Diagnostic wrapper: prints the reason of a rejection on stderr and
/// returns whether the address is valid.
pub fn is_email_valid<T: Display>(address: Option<T>) -> bool {
    EmailValidator::default().is_email_valid(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_basic() {
        let parts = validate_email("alice@example.com").unwrap();
        assert_eq!(parts, AddressParts::new("alice", "example.com"));
    }

    #[test]
    fn lowercases_before_splitting() {
        let parts = validate_email("Alice@Example.COM").unwrap();
        assert_eq!(parts, AddressParts::new("alice", "example.com"));
    }

    #[test]
    fn stage_order_local_before_domain() {
        let err = validate_email(".bad@bad..domain").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LocalPart);
    }

    #[test]
    fn multiple_at_reports_local_part_chars() {
        let err = validate_email("a@b@c@example.com").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LocalPart);
        assert_eq!(err.invalid_chars().unwrap().to_string(), "@");
    }

    #[test]
    fn whole_length_is_base_format() {
        let label = "b".repeat(63);
        let address = format!("{}@{label}.{label}.{label}.com", "a".repeat(64));
        assert_eq!(address.len(), 260);
        let err = validate_email(&address).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BaseFormat);
        assert!(!fast_validate(&address));
    }

    #[test]
    fn non_string_input_is_stringified() {
        let err = validate_email(12345).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BaseFormat);
    }

    #[test]
    fn missing_address() {
        let outcome = strict_validate(None::<&str>);
        assert_eq!(outcome.kind(), Some(ErrorKind::MissingAddress));
    }

    #[test]
    fn fast_mode_splits_on_last_at_for_lengths() {
        let limits = Limits::default().with_local_max(5);
        let validator = EmailValidator::new(limits);
        assert!(validator.fast_validate("\"a@b\"@example.com"));
        assert!(!validator.fast_validate("\"a@bcd\"@example.com"));
    }

    #[test]
    fn fast_mode_without_at() {
        assert!(!fast_validate("userexample.com"));
    }

    #[test]
    fn diagnostic_wrapper_writes_kind_and_message() {
        let mut out = Vec::new();
        let ok = EmailValidator::default().is_email_valid_to(Some("us..er@example.com"), &mut out);
        assert!(!ok);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("LocalPartError: invalid syntax for local part `us..er`"));
    }

    struct Exploding;

    impl Display for Exploding {
        fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            panic!("display failed")
        }
    }

    #[test]
    fn diagnostic_wrapper_reports_panic_payload() {
        let mut out = Vec::new();
        let ok = EmailValidator::default().is_email_valid_to(Some(Exploding), &mut out);
        assert!(!ok);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("found an unexpected error when validating the address"));
        assert!(text.trim_end().ends_with(": display failed"), "{text}");
    }

    #[test]
    fn panic_message_downcasts_owned_payloads() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");
        let payload: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }

    #[test]
    fn validator_exposes_its_limits() {
        let limits = Limits::default().with_label_max(10);
        assert_eq!(EmailValidator::new(limits).limits(), &limits);
        assert_eq!(EmailValidator::default().limits(), &Limits::default());
    }

    #[test]
    fn diagnostic_wrapper_is_silent_on_valid() {
        let mut out = Vec::new();
        assert!(EmailValidator::default().is_email_valid_to(Some("user@example.com"), &mut out));
        assert!(out.is_empty());
    }
}
