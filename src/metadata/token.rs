use std::fmt;
use std::hash::{Hash, Hasher};

/// A metadata token identifying a node of the metadata graph.
///
/// Tokens follow the ECMA-335 layout of a 32-bit value where:
/// - The high byte (bits 24-31) indicates the table type
/// - The low 24 bits (bits 0-23) indicate the row index within that table
///
/// The graph nodes of this crate use the table ids of their ECMA-335 counterparts, so tokens
/// taken from a real assembly can be carried over unchanged.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Token(pub u32);

impl Token {
    /// Table id of `TypeDef` rows
    pub const TABLE_TYPEDEF: u8 = 0x02;
    /// Table id of `Field` rows
    pub const TABLE_FIELD: u8 = 0x04;
    /// Table id of `MethodDef` rows
    pub const TABLE_METHODDEF: u8 = 0x06;
    /// Table id of `Event` rows
    pub const TABLE_EVENT: u8 = 0x14;
    /// Table id of `Property` rows
    pub const TABLE_PROPERTY: u8 = 0x17;
    /// Table id of `Assembly` rows
    pub const TABLE_ASSEMBLY: u8 = 0x20;

    /// Creates a token from a table id and a row index
    ///
    /// Row indices wider than 24 bits are truncated.
    #[must_use]
    pub fn from_parts(table: u8, row: u32) -> Self {
        Token((u32::from(table) << 24) | (row & 0x00FF_FFFF))
    }

    /// Returns the raw token value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Extracts the table type from the token (high byte)
    #[must_use]
    pub fn table(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Extracts the row index from the token (low 24 bits)
    #[must_use]
    pub fn row(&self) -> u32 {
        self.0 & 0x00FF_FFFF
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl From<Token> for u32 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(0x{:08x}, table: 0x{:02x}, row: {})",
            self.0,
            self.table(),
            self.row()
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
