//! Shared emission state and hex formatting.

/// Formats one masked value as a hex literal padded to the byte width.
///
/// Widths other than 1 and 2 print unpadded, matching their unmasked
/// sampling semantics.
#[must_use]
pub fn hex(value: u32, bytes: u32) -> String {
    match bytes {
        1 => format!("0x{value:02X}"),
        2 => format!("0x{value:04X}"),
        _ => format!("0x{value:X}"),
    }
}

/// C element type for a byte width.
#[must_use]
pub fn c_type(bytes: u32) -> &'static str {
    if bytes == 1 {
        "char"
    } else {
        "short"
    }
}

/// Per-run emission state.
///
/// One `Emitter` lives for the whole run. Each block is returned as its own
/// `String`; the byte-address counter persists across blocks, starting at
/// zero (or the `-at` address once set) and advancing per value emitted by
/// C-mode standard tables.
#[derive(Debug, Default)]
pub struct Emitter {
    address: u32,
}

impl Emitter {
    /// Creates an emitter with the address counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current byte-address counter.
    #[must_use]
    pub fn address(&self) -> u32 {
        self.address
    }

    /// Moves the counter to a configured start address.
    pub fn set_address(&mut self, address: u32) {
        self.address = address;
    }

    pub(crate) fn advance(&mut self, bytes: u32) {
        self.address = self.address.wrapping_add(bytes);
    }
}
