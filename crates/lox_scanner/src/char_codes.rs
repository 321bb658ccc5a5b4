//! Character constants and classes used by the scanner.

pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const TAB: char = '\t';
pub const SPACE: char = ' ';

pub const EXCLAMATION: char = '!';
pub const DOUBLE_QUOTE: char = '"';
pub const OPEN_PAREN: char = '(';
pub const CLOSE_PAREN: char = ')';
pub const ASTERISK: char = '*';
pub const PLUS: char = '+';
pub const COMMA: char = ',';
pub const MINUS: char = '-';
pub const DOT: char = '.';
pub const SLASH: char = '/';
pub const SEMICOLON: char = ';';
pub const LESS_THAN: char = '<';
pub const EQUALS: char = '=';
pub const GREATER_THAN: char = '>';
pub const UNDERSCORE: char = '_';
pub const OPEN_BRACE: char = '{';
pub const CLOSE_BRACE: char = '}';

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character can start an identifier. Digits cannot.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch == UNDERSCORE || ch.is_ascii_alphabetic()
}

/// Check if a character can continue an identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    ch == UNDERSCORE || ch.is_ascii_alphanumeric()
}
