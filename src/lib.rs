//! # LDAP Distinguished Name Parser
//!
//! This crate parses [RFC 4514](https://datatracker.ietf.org/doc/html/rfc4514)
//! string representations of LDAP distinguished names (DNs) into a tree of
//! relative distinguished names (RDNs) and their `type=value` pairs.
//!
//! It is intended for directory clients that need the structure of a DN,
//! for example to resolve a search base or build a rename request. It does
//! not compare, normalize, or serialize DNs, and does not check attribute
//! types against a schema.
//!
//! The primary functions provided are:
//!
//! - `parse_dn`: Parses a DN string into a `Dn`.
//! - `parse_dn_with_decoder`: The same, with a caller-supplied decoder for
//!   `#`-prefixed BER values.
//! - `compose_dn`: Composes a `Dn` from a slice of strings each holding one
//!   RDN.
//!
//! | Syntax                  | Example                          | Value(s)                   |
//! | ----------------------- | -------------------------------- | -------------------------- |
//! | Single attribute        | `CN=James`                       | `James`                    |
//! | Several RDNs            | `CN=James,DC=example,DC=com`     | `James`, `example`, `com`  |
//! | Multi-valued RDN        | `OU=Sales+CN=J. Smith`           | `Sales`, `J. Smith`        |
//! | Escaped special         | `CN=James\, Jr.`                 | `James, Jr.`               |
//! | Hex escape              | `CN=Lu\C4\8Di\C4\87`             | `Lučić`                    |
//! | Escaped trailing space  | `CN=James\ `                     | `James `                   |
//! | BER hex string          | `1.3.6.1.4.1.1466.0=#04024869`   | `Hi`                       |
//!
//! ## Whitespace
//!
//! Unescaped spaces before a type or value and after it are dropped. Spaces
//! inside a value, and any escaped space, are kept.
//!
//! ## BER values
//!
//! A value starting with `#` holds hex-encoded BER running up to the next
//! `,` or `+`. The bytes are handed to a [`BerDecoder`]; the default
//! [`Asn1BerDecoder`] reads one element and uses its content octets as the
//! value text.

mod error;
pub use error::{ Error as ParseError, Result as ParseResult };
pub(crate) use error::{ Error, Result };

mod token;

mod dn;
pub use dn::{ AttributeTypeAndValue, Dn, RelativeDn };

mod ber;
pub use ber::{ Asn1BerDecoder, BerDecoder, BerError, BerValue };

mod parse;
pub use parse::{ parse_dn, parse_dn_with_decoder };

mod compose;
pub use compose::{ compose_dn, Error as ComposeError, Result as ComposeResult };
