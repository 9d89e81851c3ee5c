use super::error::EmailError;
use super::types::AddressParts;

/// Splits `address` at its right-most `@`.
///
/// Only decomposes: neither part is judged here, so `a@b@c@example.com`
/// yields the local part `a@b@c`, and a `\` before the split point is left
/// to the local-part checks.
pub(crate) fn split_address(address: &str) -> Result<AddressParts, EmailError> {
    let (local_part, domain) = address.rsplit_once('@').ok_or_else(|| {
        EmailError::base_format("expecting address syntax `localpart@domainname`")
    })?;
    Ok(AddressParts::new(local_part, domain))
}
