use super::error::EmailError;
use super::grammar::{
    QUOTED_CONTENT, QUOTED_LOCAL_PART, UNQUOTED_LOCAL_PART_CHARS, UNQUOTED_LOCAL_PART_DOTS,
    invalid_chars,
};
use super::types::{InvalidChars, Limits};

/// Validates a (lowercased) local part.
///
/// The length limit applies before the quoted/unquoted dispatch; a local
/// part that starts and ends with `"` takes the quoted branch.
pub(crate) fn check_local_part(local: &str, limits: &Limits) -> Result<(), EmailError> {
    if local.chars().count() > limits.local_max {
        return Err(EmailError::local_part(format!(
            "the local part cannot be longer than {} characters",
            limits.local_max
        )));
    }
    if local.is_empty() {
        return Err(EmailError::local_part("the local part cannot be empty"));
    }

    if local.starts_with('"') && local.ends_with('"') {
        check_quoted(local)
    } else {
        check_unquoted(local)
    }
}

fn check_quoted(local: &str) -> Result<(), EmailError> {
    if local.matches('"').count() > 2 {
        return Err(EmailError::local_part(format!(
            "invalid syntax for quoted local part `{local}`\n\
             it must contain only one quoted string, i.e. no more than 2 `\"` characters"
        )));
    }
    if QUOTED_LOCAL_PART.is_match(local) {
        return Ok(());
    }

    let inner = local
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or_default();
    let mut offending = invalid_chars(inner, &QUOTED_CONTENT);
    if offending.is_empty() {
        // a lone `"`
        offending = local.chars().collect::<InvalidChars>();
    }
    Err(EmailError::local_part_chars(
        format!(
            "invalid syntax for quoted local part `{local}`\n\
             it contains the following invalid characters: `{offending}` \
             (accepted: printable US-ASCII except `\"` and `\\`, or `\\` followed by any character)"
        ),
        offending,
    ))
}

fn check_unquoted(local: &str) -> Result<(), EmailError> {
    if UNQUOTED_LOCAL_PART_DOTS.is_match(local) {
        return Err(EmailError::local_part(format!(
            "invalid syntax for local part `{local}`\n\
             unquoted local parts cannot begin, end, or have two or more consecutive dots"
        )));
    }

    let offending = invalid_chars(local, &UNQUOTED_LOCAL_PART_CHARS);
    if offending.is_empty() {
        return Ok(());
    }
    Err(EmailError::local_part_chars(
        format!(
            "invalid syntax for unquoted local part `{local}`\n\
             it contains the following invalid characters: `{offending}` \
             (accepted: letters, digits, ``!#$%&'*+-/=?^_`{{|}}~`` and non-consecutive inner dots)"
        ),
        offending,
    ))
}
