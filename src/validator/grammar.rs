//! Grammar rules of the supported addr-spec subset (RFC 5322, §3.2.3 to §3.4.1).
//!
//! The pattern sources are exposed as constants; the compiled matchers are
//! process-wide statics built on first use. Comments and folding white space
//! (CFWS) are not part of the subset: any white space is rejected.

use std::sync::LazyLock;

use regex::Regex;

use super::types::InvalidChars;

macro_rules! atext {
    () => {
        r"[a-zA-Z0-9!#$%&'*+\-/=?^_`{|}~]"
    };
}

// printable US-ASCII except `"` and `\`
macro_rules! qtext {
    () => {
        r"[\x21\x23-\x5B\x5D-\x7E]"
    };
}

macro_rules! quoted_pair {
    () => {
        r"\\."
    };
}

macro_rules! qcontent {
    () => {
        concat!("(?:", qtext!(), "|", quoted_pair!(), ")")
    };
}

// printable US-ASCII except `(`, `)`, `[`, `\`, `]`
macro_rules! dtext {
    () => {
        r"[\x21-\x27\x2A-\x5A\x5E-\x7E]"
    };
}

macro_rules! dot_atom {
    () => {
        concat!(atext!(), r"+(?:\.", atext!(), "+)*")
    };
}

macro_rules! quoted_string {
    () => {
        concat!("\"", qcontent!(), "*\"")
    };
}

macro_rules! domain_literal {
    () => {
        concat!(r"\[", dtext!(), r"*\]")
    };
}

macro_rules! addr_spec {
    () => {
        concat!(
            "(",
            dot_atom!(),
            "|",
            quoted_string!(),
            ")@(",
            dot_atom!(),
            "|",
            domain_literal!(),
            ")"
        )
    };
}

/// Atom text: Latin letters, digits and ``! # $ % & ' * + - / = ? ^ _ ` { | } ~``.
pub const ATEXT: &str = atext!();
/// Quoted text: printable US-ASCII except `"` and `\`.
pub const QTEXT: &str = qtext!();
/// A backslash followed by any character.
pub const QUOTED_PAIR: &str = quoted_pair!();
pub const QCONTENT: &str = qcontent!();
/// Domain literal text.
pub const DTEXT: &str = dtext!();
/// `ATEXT` runs separated by single dots.
pub const DOT_ATOM: &str = dot_atom!();
pub const QUOTED_STRING: &str = quoted_string!();
pub const DOMAIN_LITERAL: &str = domain_literal!();
/// `(DOT_ATOM | QUOTED_STRING) @ (DOT_ATOM | DOMAIN_LITERAL)`, unanchored.
pub const ADDR_SPEC: &str = addr_spec!();

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("grammar patterns are valid regular expressions")
}

/// Whole-address matcher used by the fast mode.
pub(crate) static VALID_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| compile(concat!(r"\A", addr_spec!(), r"\z")));

/// Leading, trailing or doubled dots in an unquoted local part.
pub(crate) static UNQUOTED_LOCAL_PART_DOTS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\A\.|\.{2,}|\.\z"));

/// Runs of characters allowed in an unquoted local part (`ATEXT` or `.`).
pub(crate) static UNQUOTED_LOCAL_PART_CHARS: LazyLock<Regex> =
    LazyLock::new(|| compile(concat!("(?:", atext!(), r"|\.)+")));

pub(crate) static QUOTED_LOCAL_PART: LazyLock<Regex> =
    LazyLock::new(|| compile(concat!(r"\A", quoted_string!(), r"\z")));

/// Runs of valid content between the quotes of a quoted local part.
pub(crate) static QUOTED_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| compile(concat!(qcontent!(), "+")));

pub(crate) static DNS_LABEL_DOTS: LazyLock<Regex> = LazyLock::new(|| compile(r"\.{2,}"));

pub(crate) static DNS_LABEL_HYPHENS: LazyLock<Regex> = LazyLock::new(|| compile(r"\A-|-\z"));

pub(crate) static DNS_LABEL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| compile(concat!(atext!(), "+")));

pub(crate) static DOMAIN_LITERAL_FULL: LazyLock<Regex> =
    LazyLock::new(|| compile(concat!(r"\A", domain_literal!(), r"\z")));

/// Characters of `text` not covered by any match of `valid`.
///
/// The result is deduplicated and sorted; when nothing in `text` matches,
/// every distinct character of `text` is reported.
pub(crate) fn invalid_chars(text: &str, valid: &Regex) -> InvalidChars {
    let mut offending = InvalidChars::default();
    let mut cursor = 0;
    for found in valid.find_iter(text) {
        offending.extend(text[cursor..found.start()].chars());
        cursor = found.end();
    }
    offending.extend(text[cursor..].chars());
    offending
}
