use logos::{ Lexer, Logos, Span };

use crate::{
    ber::{ self, Asn1BerDecoder, BerDecoder },
    token::Token,
    AttributeTypeAndValue,
    Dn,
    Error,
    RelativeDn,
    Result,
};

/// Parses an RFC 4514 distinguished name.
///
/// Attribute values prefixed with `#` are hex-encoded BER and are decoded
/// with [`Asn1BerDecoder`]. Use [`parse_dn_with_decoder`] to supply a
/// different decoder.
///
/// An empty string is a valid DN with no RDNs.
///
/// # Errors
///
/// Returns an error for a truncated or non-hex escape sequence, a malformed
/// or undecodable `#` value, attribute text that is not UTF-8, and an
/// attribute value without a type.
///
/// # Example
///
/// ```rust
/// # use dn_parse::parse_dn;
/// let dn = parse_dn("CN=James\\2C Jr.,DC=example,DC=com").unwrap();
/// assert_eq!(dn.len(), 3);
/// assert_eq!(dn.rdns()[0].attributes()[0].value(), "James, Jr.");
/// ```
pub fn parse_dn(src: &str) -> Result<Dn> {
    parse_dn_with_decoder(src, &Asn1BerDecoder)
}

/// Parses an RFC 4514 distinguished name, decoding `#`-prefixed values with
/// `decoder`.
///
/// # Errors
///
/// See [`parse_dn`]. Failures reported by `decoder` surface as
/// [`Error::BerDecode`].
pub fn parse_dn_with_decoder(src: &str, decoder: &dyn BerDecoder) -> Result<Dn> {
    let mut lexer = Token::lexer(src);
    let mut buffer = TokenBuffer::default();
    let mut attr_type = String::new();
    let mut rdn = RelativeDn::default();
    let mut rdns = Vec::new();

    while let Some(token) = lexer.next() {
        let token = token.map_err(|e| {
            if e.is_default() { Error::UnrecognizedToken(lexer.span()) } else { e }
        })?;
        let span = lexer.span();
        match token {
            Token::EscapedSpecial(byte) | Token::EscapedOctet(byte) => {
                buffer.push_escaped(byte, span.start);
            }
            Token::Backslash => return Err(broken_escape(&lexer)),
            Token::Equals => {
                attr_type = buffer.take(span.start)?;
                if lexer.remainder().starts_with('#') {
                    let offset = span.end + 1;
                    let (value, len) =
                        ber::decode_hex_value(&lexer.remainder()[1..], offset, decoder)?;
                    buffer.push_str(&value, offset);
                    lexer.bump(1 + len);
                }
            }
            Token::Comma | Token::Plus => {
                rdn.push(finish_attribute(&mut attr_type, &mut buffer, span.start)?);
                if token == Token::Comma {
                    rdns.push(std::mem::take(&mut rdn));
                }
            }
            Token::Space if buffer.is_empty() => {}
            Token::Space => buffer.push_space(span.start),
            Token::Text => buffer.push_str(lexer.slice(), span.start),
        }
    }

    if !buffer.is_empty() || !attr_type.is_empty() {
        rdn.push(finish_attribute(&mut attr_type, &mut buffer, src.len())?);
    }
    if !rdn.is_empty() {
        rdns.push(rdn);
    }

    let dn = Dn::new(rdns);
    log::debug!(
        "parsed DN with {} RDN(s), {} attribute(s)",
        dn.len(),
        dn.iter().map(RelativeDn::len).sum::<usize>()
    );
    Ok(dn)
}

//
// === Private Functions ===
//

fn finish_attribute(
    attr_type: &mut String,
    buffer: &mut TokenBuffer,
    end: usize,
) -> Result<AttributeTypeAndValue> {
    if attr_type.is_empty() {
        return Err(Error::IncompletePair(buffer.span(end)));
    }
    let value = buffer.take(end)?;
    Ok(AttributeTypeAndValue::new(std::mem::take(attr_type), value))
}

/// A backslash that is not followed by a special character or a valid hex
/// pair.
fn broken_escape(lexer: &Lexer<'_, Token>) -> Error {
    let start = lexer.span().start;
    let rest = lexer.remainder().as_bytes();
    if rest.len() < 2 {
        Error::TruncatedEscape(start..lexer.span().end + rest.len())
    } else {
        let pair = String::from_utf8_lossy(&rest[..2]).into_owned();
        Error::InvalidEscapeHex(pair, start..lexer.span().end + 2)
    }
}

/// Accumulates the bytes of the attribute type or value being scanned.
///
/// `trailing_spaces` counts the unescaped spaces at the end of `bytes`;
/// they are dropped when the token is taken. Escaped spaces never count.
#[derive(Debug, Default)]
struct TokenBuffer {
    bytes: Vec<u8>,
    trailing_spaces: usize,
    start: Option<usize>,
}

impl TokenBuffer {
    fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn mark(&mut self, pos: usize) {
        self.start.get_or_insert(pos);
    }

    fn push_escaped(&mut self, byte: u8, pos: usize) {
        self.mark(pos);
        self.bytes.push(byte);
        self.trailing_spaces = 0;
    }

    fn push_space(&mut self, pos: usize) {
        self.mark(pos);
        self.bytes.push(b' ');
        self.trailing_spaces += 1;
    }

    fn push_str(&mut self, text: &str, pos: usize) {
        if text.is_empty() {
            return;
        }
        self.mark(pos);
        self.bytes.extend_from_slice(text.as_bytes());
        self.trailing_spaces = 0;
    }

    fn span(&self, end: usize) -> Span {
        self.start.unwrap_or(end)..end
    }

    /// Returns the token text without its unescaped trailing spaces and
    /// clears the buffer for the next token.
    fn take(&mut self, end: usize) -> Result<String> {
        let len = self.bytes.len() - self.trailing_spaces;
        let text = std::str::from_utf8(&self.bytes[..len])
            .map(str::to_owned)
            .map_err(|_| Error::InvalidUtf8(self.span(end)));
        self.bytes.clear();
        self.trailing_spaces = 0;
        self.start = None;
        text
    }
}
