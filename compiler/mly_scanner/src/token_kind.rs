//! External token kinds and the per-call request set.
//!
//! `TokenKind` discriminants are the indices of the grammar's `externals`
//! list, so they double as the host engine's symbol numbers and as bit
//! positions in [`ValidTokens`].

/// Token kinds this scanner can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    /// `(* ... *)`, nesting, with strings and quoted strings opaque.
    Comment = 0,
    /// A lone `"` opening or closing a grammar-level string.
    StringDelimiter = 1,
    /// Host-language code up to the matching `}`.
    EmbeddedCode = 2,
    /// A type annotation up to the terminating `>`.
    TypeExtent = 3,
    /// Attribute payload up to the matching `]`.
    AttributeExtent = 4,
}

impl TokenKind {
    /// All kinds, in symbol order.
    pub const ALL: [TokenKind; 5] = [
        TokenKind::Comment,
        TokenKind::StringDelimiter,
        TokenKind::EmbeddedCode,
        TokenKind::TypeExtent,
        TokenKind::AttributeExtent,
    ];

    /// The host engine's external symbol index.
    #[inline]
    pub const fn symbol(self) -> u16 {
        self as u16
    }

    /// Look up a kind by external symbol index.
    pub const fn from_symbol(symbol: u16) -> Option<TokenKind> {
        match symbol {
            0 => Some(TokenKind::Comment),
            1 => Some(TokenKind::StringDelimiter),
            2 => Some(TokenKind::EmbeddedCode),
            3 => Some(TokenKind::TypeExtent),
            4 => Some(TokenKind::AttributeExtent),
            _ => None,
        }
    }

    /// Node name used by the grammar for this external.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Comment => "ocaml_comment",
            TokenKind::StringDelimiter => "\"",
            TokenKind::EmbeddedCode => "ocaml",
            TokenKind::TypeExtent => "ocaml_type",
            TokenKind::AttributeExtent => "attribute_payload",
        }
    }
}

bitflags::bitflags! {
    /// Token kinds the grammar permits at the cursor for one scan call.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ValidTokens: u8 {
        const COMMENT = 1 << 0;
        const STRING_DELIMITER = 1 << 1;
        const EMBEDDED_CODE = 1 << 2;
        const TYPE_EXTENT = 1 << 3;
        const ATTRIBUTE_EXTENT = 1 << 4;
    }
}

impl ValidTokens {
    /// Build the set from a host `valid_symbols` array indexed by symbol.
    ///
    /// Entries past the end of `symbols` count as not requested.
    pub fn from_symbols(symbols: &[bool]) -> Self {
        TokenKind::ALL
            .into_iter()
            .filter(|kind| symbols.get(usize::from(kind.symbol())) == Some(&true))
            .map(ValidTokens::from)
            .collect()
    }

    /// Returns `true` if `kind` is requested.
    #[inline]
    pub fn contains_kind(self, kind: TokenKind) -> bool {
        self.contains(ValidTokens::from(kind))
    }
}

impl From<TokenKind> for ValidTokens {
    #[inline]
    fn from(kind: TokenKind) -> Self {
        ValidTokens::from_bits_retain(1 << kind as u8)
    }
}

/// A token produced over a [`SourceBuffer`](crate::SourceBuffer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScannedToken {
    pub kind: TokenKind,
    /// Byte offset of the first character, after skipped whitespace.
    pub start: u32,
    /// Byte length up to the committed end.
    pub len: u32,
}

impl ScannedToken {
    /// Byte offset one past the last character.
    #[inline]
    pub fn end(self) -> u32 {
        self.start + self.len
    }
}

#[cfg(test)]
mod tests;
