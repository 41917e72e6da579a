//! Run-wide generation configuration.
//!
//! The configuration is an explicit owned value threaded through every
//! generation call. The CLI mutates it in place as it walks the argument
//! stream, so a flag affects exactly the table requests that follow it.

/// Output syntax for generated blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// C array declarations.
    C,
    /// Assembly `.db`/`.dw` data directives.
    Asm,
}

impl OutputFormat {
    /// Comment leader used by banner and table comments in this syntax.
    #[must_use]
    pub fn comment_leader(self) -> &'static str {
        match self {
            OutputFormat::C => "//",
            OutputFormat::Asm => ";",
        }
    }
}

/// Run-wide generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Sample count N. Must be positive for meaningful output; not otherwise
    /// validated.
    pub entries: i32,
    /// Bytes per emitted value. 1 and 2 select masking and the C
    /// `char`/`short` element types; other widths pass values through
    /// unmasked.
    pub bytes: u32,
    /// Fixed-point shift: samples are scaled by `2^shift` before truncation.
    pub shift: u32,
    /// Table-name prefix. Cleared (not literally `"0"`) when the user gives
    /// the `0` sentinel.
    pub prefix: String,
    /// Output syntax.
    pub format: OutputFormat,
    /// Starting byte address. When set, C-mode standard tables carry an
    /// `__at(0x…)` placement annotation.
    pub address: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entries: 128,
            bytes: 2,
            shift: 0,
            prefix: "g_".to_string(),
            format: OutputFormat::C,
            address: None,
        }
    }
}

impl Config {
    /// Fixed-point scale factor `2^shift`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        2.0_f64.powi(self.shift as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.entries, 128);
        assert_eq!(config.bytes, 2);
        assert_eq!(config.shift, 0);
        assert_eq!(config.prefix, "g_");
        assert_eq!(config.format, OutputFormat::C);
        assert_eq!(config.address, None);
    }

    #[test]
    fn scale_is_power_of_two() {
        let mut config = Config::default();
        assert_eq!(config.scale(), 1.0);
        config.shift = 4;
        assert_eq!(config.scale(), 16.0);
        config.shift = 15;
        assert_eq!(config.scale(), 32768.0);
    }

    #[test]
    fn comment_leaders() {
        assert_eq!(OutputFormat::C.comment_leader(), "//");
        assert_eq!(OutputFormat::Asm.comment_leader(), ";");
    }
}
