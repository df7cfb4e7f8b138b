use asn1_rs::{ Any, FromBer };
use logos::Span;
use thiserror::Error;

use crate::{ Error, Result };

/// A value produced by a [`BerDecoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BerValue {
    /// Text used verbatim as the attribute value.
    pub rendered: String,
    /// Number of input bytes the decoder consumed.
    pub consumed: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct BerError(pub String);

/// Decodes the raw bytes of a `#`-prefixed attribute value.
///
/// The parser treats the rendering as opaque text; implementations decide
/// how tag, length and content map onto it.
pub trait BerDecoder {
    fn decode(&self, raw: &[u8]) -> std::result::Result<BerValue, BerError>;
}

/// Reads a single BER element with `asn1-rs` and renders its content
/// octets as UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Asn1BerDecoder;

impl BerDecoder for Asn1BerDecoder {
    fn decode(&self, raw: &[u8]) -> std::result::Result<BerValue, BerError> {
        let (rest, any) = Any::from_ber(raw).map_err(|e| BerError(e.to_string()))?;
        let rendered = String::from_utf8(any.data.to_vec())
            .map_err(|_| BerError("content octets are not valid UTF-8".to_string()))?;
        Ok(BerValue { rendered, consumed: raw.len() - rest.len() })
    }
}

/// Decodes the hex span of a `#`-prefixed value.
///
/// `rest` is the input immediately after the `#`, and `offset` its byte
/// position in the full input. The span runs up to the next `,` or `+` or
/// to the end of input. Returns the rendered value and the length of the
/// span, which the caller must skip.
pub(crate) fn decode_hex_value(
    rest: &str,
    offset: usize,
    decoder: &dyn BerDecoder,
) -> Result<(String, usize)> {
    let len = rest.find([',', '+']).unwrap_or(rest.len());
    let hex_span = &rest[..len];
    let span: Span = offset..offset + len;
    log::trace!("BER value at {span:?}: {hex_span}");

    let raw = hex::decode(hex_span)
        .map_err(|_| Error::InvalidBerHex(hex_span.to_string(), span.clone()))?;
    let value = decoder
        .decode(&raw)
        .map_err(|e| Error::BerDecode(e.to_string(), span.clone()))?;
    if value.consumed < raw.len() {
        log::debug!(
            "ignoring {} trailing byte(s) after BER value at {span:?}",
            raw.len() - value.consumed
        );
    }
    Ok((value.rendered, len))
}
