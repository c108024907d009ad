use thiserror::Error;

/// Everything that can go wrong while validating or laying out a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("code must be exactly 12 or 13 ASCII digits")]
    MalformedInput,

    #[error("value {value} is out of range (must be below {limit})")]
    OutOfRange { value: u64, limit: u64 },

    #[error("checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: u8, found: u8 },

    #[error("bounding area is too small for the barcode")]
    AreaTooSmall,

    #[error("font is too big: glyph width {glyph_width} exceeds digit cell width {cell_width}")]
    FontTooBig { glyph_width: i32, cell_width: i32 },
}

/// Error returned by a concrete surface: either the layout was rejected
/// before anything was drawn, or the underlying target failed.
#[derive(Debug, Error)]
pub enum DrawError<E> {
    #[error(transparent)]
    Layout(#[from] Error),

    #[error("drawing target failed: {0:?}")]
    Target(E),
}
