#[cfg(not(feature = "dangerous-disable-verification"))]
use subtle::ConstantTimeEq;

use crate::TokenRef;

/// Double-submit check
///
/// The header-echoed token has to byte-match the authoritative cookie.
/// Absence of either side fails the check, and the failure modes are
/// indistinguishable to the caller.
#[cfg(not(feature = "dangerous-disable-verification"))]
#[must_use]
pub fn verify(presented: Option<&TokenRef>, authoritative: Option<&TokenRef>) -> bool {
    let (Some(presented), Some(authoritative)) = (presented, authoritative) else {
        return false;
    };

    presented
        .as_str()
        .as_bytes()
        .ct_eq(authoritative.as_str().as_bytes())
        .into()
}

/// Verification stub for local development against plain-HTTP frontends
#[cfg(feature = "dangerous-disable-verification")]
#[must_use]
pub fn verify(_presented: Option<&TokenRef>, _authoritative: Option<&TokenRef>) -> bool {
    true
}
