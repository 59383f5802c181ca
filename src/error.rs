use failure::Fail;

/// Every failure kind this crate's decoders can raise, per the codec
/// error-handling design. Mutation methods on `Cell`/`Level` never return
/// this type — illegal edits are reconciled silently instead.
#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "bad magic: found {:02x?}", found)]
    BadMagic { found: [u8; 4] },

    #[fail(display = "truncated input: needed {} bytes, had {}", needed, available)]
    Truncated { needed: usize, available: usize },

    #[fail(display = "bad length for field {:#04x}: {}", field_id, len)]
    BadFieldLength { field_id: u8, len: usize },

    #[fail(display = "bad RLE stream: {}", reason)]
    BadRle { reason: &'static str },

    #[fail(display = "invalid tile code: {:#04x}", code)]
    InvalidTileCode { code: u16 },

    #[fail(
        display = "declared length {} exceeds configured limit {}",
        declared, limit
    )]
    LayerTooLarge { declared: usize, limit: usize },

    #[fail(display = "level fails is_valid(): {}", reason)]
    InvariantViolated { reason: String },

    #[fail(display = "unknown G2 opcode: {:#04x}", opcode)]
    UnknownOpcode { opcode: u8 },

    #[fail(display = "unsupported modifier for opcode {:#04x}", opcode)]
    UnsupportedModifier { opcode: u8 },
}

/// A short read against a `Cursor` (the common case once a declared length
/// has already been bounds-checked against the buffer) becomes a generic
/// `Truncated`; callers that know the exact counts use the struct variants
/// directly instead of going through `?`.
impl From<std::io::Error> for Error {
    fn from(_: std::io::Error) -> Error {
        Error::Truncated {
            needed: 0,
            available: 0,
        }
    }
}
