use super::error::EmailError;
use super::grammar::{
    DNS_LABEL_CHARS, DNS_LABEL_DOTS, DNS_LABEL_HYPHENS, DOMAIN_LITERAL_FULL, invalid_chars,
};
use super::types::Limits;

/// Valide le domaine: longueur globale, puis littéral `[...]` ou labels LDH.
pub(crate) fn check_domain(domain: &str, limits: &Limits) -> Result<(), EmailError> {
    if domain.chars().count() > limits.domain_max {
        return Err(EmailError::domain(format!(
            "invalid syntax for domain name `{domain}`\n\
             it cannot be longer than {} characters",
            limits.domain_max
        )));
    }
    if domain.is_empty() {
        return Err(EmailError::domain("the domain name cannot be empty"));
    }

    if domain.starts_with('[') && domain.ends_with(']') {
        check_literal(domain)
    } else {
        check_ldh(domain, limits)
    }
}

// No distinction between IPv4 and IPv6 literals.
fn check_literal(domain: &str) -> Result<(), EmailError> {
    if DOMAIN_LITERAL_FULL.is_match(domain) {
        Ok(())
    } else {
        Err(EmailError::domain("invalid domain literal syntax"))
    }
}

fn check_ldh(domain: &str, limits: &Limits) -> Result<(), EmailError> {
    if DNS_LABEL_DOTS.is_match(domain) {
        return Err(EmailError::domain(format!(
            "invalid format for domain name `{domain}`\n\
             DNS labels must be separated by a single dot"
        )));
    }

    for label in domain.split('.') {
        check_label(domain, label, limits)?;
    }
    Ok(())
}

fn check_label(domain: &str, label: &str, limits: &Limits) -> Result<(), EmailError> {
    if label.is_empty() {
        return Err(EmailError::dns_label(
            format!(
                "invalid syntax for domain name `{domain}`\n\
                 DNS labels cannot be empty"
            ),
            label,
        ));
    }
    if label.chars().count() > limits.label_max {
        return Err(EmailError::dns_label(
            format!(
                "invalid syntax for domain name `{domain}`\n\
                 DNS labels cannot be longer than {} characters",
                limits.label_max
            ),
            label,
        ));
    }
    if DNS_LABEL_HYPHENS.is_match(label) {
        return Err(EmailError::dns_label(
            format!(
                "invalid syntax for domain name `{domain}`\n\
                 DNS labels cannot begin or end with a hyphen"
            ),
            label,
        ));
    }

    let offending = invalid_chars(label, &DNS_LABEL_CHARS);
    if offending.is_empty() {
        return Ok(());
    }
    Err(EmailError::dns_label_chars(
        format!(
            "invalid format for domain name `{domain}`\n\
             the DNS label `{label}` contains the following invalid characters: `{offending}`"
        ),
        label,
        offending,
    ))
}
