use logos::Logos;

use crate::error::Error;

/// Character classes of the DN string grammar.
///
/// Every character of the input falls into exactly one class, so the lexer
/// never produces an unrecognized token for well-formed UTF-8.
#[derive(Debug, Clone, Copy, Logos, PartialEq, Eq)]
#[rustfmt::skip]
#[logos(error = Error)]
pub(crate) enum Token {
    /// `\` followed by one of the RFC 4514 special characters.
    #[regex(r##"\\[ "#+,;<=>\\]"##, |lex| lex.slice().as_bytes()[1])]
    EscapedSpecial(u8),

    /// `\` followed by two hex digits naming a raw octet.
    #[regex(r"\\[0-9a-fA-F]{2}", |lex| {
        let pair = &lex.slice()[1..];
        hex::decode(pair)
            .map(|bytes| bytes[0])
            .map_err(|_| Error::InvalidEscapeHex(pair.to_string(), lex.span()))
    })]
    EscapedOctet(u8),

    /// A backslash that starts neither a special nor a hex escape.
    #[token("\\")]
    Backslash,

    #[token("=")]
    Equals,

    #[token(",")]
    Comma,

    #[token("+")]
    Plus,

    #[token(" ")]
    Space,

    /// Any other single character, passed through byte-for-byte.
    #[regex(r"[^\\=,+ ]")]
    Text,
}
