//! Error types for rhiz-tag

use thiserror::Error;

/// Main error type for rhiz-tag
#[derive(Debug, Error)]
pub enum TagError {
    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid symbol: '{0}'")]
    InvalidSymbol(char),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagError::InvalidInstant(_) => 2,
            TagError::InvalidTag(_) | TagError::InvalidSymbol(_) => 3,
            TagError::OutOfRange(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagError::InvalidSymbol(symbol) => {
                format!(
                    "Invalid symbol: '{}'\n\n\
                    Tags only use these symbols, in this order:\n\
                    abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ34689\n\n\
                    Suggestions:\n\
                    • There is no 'l', 'I', 'O', '0', '1', '2', '5' or '7'\n\
                    • Check handwritten tags for look-alike characters",
                    symbol
                )
            }
            TagError::InvalidTag(msg) => {
                format!(
                    "Invalid tag: {}\n\n\
                    A tag is three symbols, optionally followed by '-' and a\n\
                    three symbol suffix.\n\n\
                    Examples:\n\
                    rhiz-tag date aQu\n\
                    rhiz-tag date aQu-TWr",
                    msg
                )
            }
            TagError::InvalidInstant(input) => {
                format!(
                    "Invalid instant: '{}'\n\n\
                    Valid instants:\n\
                    • now\n\
                    • YYYY-MM-DD HH:MM:SS (e.g., 2024-09-25 13:30:00)\n\
                    • YYYY-MM-DDTHH:MM:SS or RFC 3339 (e.g., 2024-09-25T13:30:00Z)\n\
                    • YYYY-MM-DD (midnight)\n\
                    • @<unix seconds> (e.g., @1727271000)\n\n\
                    Examples:\n\
                    rhiz-tag tag --at 2024-09-25\n\
                    rhiz-tag tag --at @1727271000",
                    input
                )
            }
            TagError::OutOfRange(msg) => {
                format!(
                    "Out of range: {}\n\n\
                    Tags cover the years 2024 to 2077, 52 ticks per week.",
                    msg
                )
            }
            TagError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: rhiz-tag config clock local",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagError
pub type Result<T> = std::result::Result<T, TagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(TagError::InvalidInstant("x".to_string()).exit_code(), 2);
        assert_eq!(TagError::InvalidTag("x".to_string()).exit_code(), 3);
        assert_eq!(TagError::InvalidSymbol('?').exit_code(), 3);
        assert_eq!(TagError::OutOfRange("x".to_string()).exit_code(), 4);
        assert_eq!(TagError::Config("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_invalid_symbol_suggestions() {
        let err = TagError::InvalidSymbol('l');
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'l'"));
        assert!(msg.contains("abcdefghijkm"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_tag_examples() {
        let err = TagError::InvalidTag("expected 3 symbols, got 5".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("expected 3 symbols"));
        assert!(msg.contains("rhiz-tag date aQu"));
    }

    #[test]
    fn test_invalid_instant_examples() {
        let err = TagError::InvalidInstant("yesterday-ish".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("yesterday-ish"));
        assert!(msg.contains("YYYY-MM-DD HH:MM:SS"));
        assert!(msg.contains("@<unix seconds>"));
    }

    #[test]
    fn test_config_unknown_key_suggestion() {
        let err = TagError::Config("Unknown config key: 'colour'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("rhiz-tag config clock local"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TagError::InvalidAlphabet("duplicate symbol 'a'".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Invalid alphabet: duplicate symbol 'a'");
    }
}
