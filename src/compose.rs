use thiserror::Error;

use crate::{ parse_dn, Dn, ParseError };

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Expected exactly one RDN in '{0}', found {1}")]
    NotSingleRdn(String, usize),
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Composes a DN from a slice of string slices, each holding exactly one
/// RDN in string form, most significant first.
///
/// Each string slice is parsed as a DN that must contain a single RDN, which
/// may be multi-valued.
///
/// # Errors
///
/// Returns [`Error::ParseError`] if a piece fails to parse and
/// [`Error::NotSingleRdn`] if a piece holds no RDN or more than one.
///
/// # Example
///
/// ```rust
/// # use dn_parse::compose_dn;
/// let dn = compose_dn(&["CN=James", "OU=Sales+L=Berlin", "DC=com"]).unwrap();
/// assert_eq!(dn.len(), 3);
/// assert_eq!(dn.rdns()[1].len(), 2);
/// ```
pub fn compose_dn(rdns: &[&str]) -> Result<Dn> {
    let mut result = Vec::with_capacity(rdns.len());
    for piece in rdns {
        let mut parsed = parse_dn(piece)?.into_rdns();
        if parsed.len() != 1 {
            return Err(Error::NotSingleRdn(piece.to_string(), parsed.len()));
        }
        result.append(&mut parsed);
    }
    Ok(Dn::new(result))
}
