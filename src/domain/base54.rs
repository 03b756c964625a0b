//! Base-54 positional numerals over the tag alphabet

use crate::error::{Result, TagError};
use std::cmp::Ordering;

/// The tag alphabet in value order. Look-alike characters (l, I, O, 0, 1, 2, 5, 7)
/// are left out so tags survive being written by hand.
pub const BASE54_SYMBOLS: &str = "abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ34689";

/// An ordered set of distinct ASCII symbols; a symbol's position is its digit value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: String,
    index: [Option<u8>; 128],
}

impl Alphabet {
    /// Build an alphabet, rejecting non-ASCII, duplicate symbols and radices below 2
    pub fn new(symbols: &str) -> Result<Self> {
        if !symbols.is_ascii() {
            return Err(TagError::InvalidAlphabet(format!(
                "'{}' contains non-ASCII symbols",
                symbols
            )));
        }
        if symbols.len() < 2 {
            return Err(TagError::InvalidAlphabet(format!(
                "need at least 2 symbols, got {}",
                symbols.len()
            )));
        }

        let mut seen = [false; 128];
        for byte in symbols.bytes() {
            if seen[byte as usize] {
                return Err(TagError::InvalidAlphabet(format!(
                    "duplicate symbol '{}'",
                    byte as char
                )));
            }
            seen[byte as usize] = true;
        }

        Ok(Self::build(symbols))
    }

    fn build(symbols: &str) -> Self {
        let mut index = [None; 128];
        for (value, byte) in symbols.bytes().enumerate() {
            index[byte as usize] = Some(value as u8);
        }
        Alphabet {
            symbols: symbols.to_string(),
            index,
        }
    }

    /// Number of symbols, i.e. the radix
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn radix(&self) -> u64 {
        self.symbols.len() as u64
    }

    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    /// Symbol for a digit value. Callers keep `value < len()`.
    pub fn symbol(&self, value: usize) -> char {
        self.symbols.as_bytes()[value] as char
    }

    /// Digit value of a symbol
    pub fn index_of(&self, symbol: char) -> Result<u64> {
        if !symbol.is_ascii() {
            return Err(TagError::InvalidSymbol(symbol));
        }
        self.index[symbol as usize]
            .map(u64::from)
            .ok_or(TagError::InvalidSymbol(symbol))
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_ok()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::build(BASE54_SYMBOLS)
    }
}

/// Encodes and decodes non-negative integers as most-significant-first numerals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base54Codec {
    alphabet: Alphabet,
}

impl Base54Codec {
    pub fn new(alphabet: Alphabet) -> Self {
        Base54Codec { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encode `n` with as many symbols as it needs. Zero is the first symbol, never "".
    pub fn encode(&self, mut n: u64) -> String {
        let radix = self.alphabet.radix();
        if n == 0 {
            return self.alphabet.symbol(0).to_string();
        }

        let mut digits = Vec::new();
        while n > 0 {
            digits.push(self.alphabet.symbol((n % radix) as usize));
            n /= radix;
        }
        digits.iter().rev().collect()
    }

    /// Encode `n` left-padded with the zero symbol to exactly `width` symbols
    pub fn encode_padded(&self, n: u64, width: usize) -> Result<String> {
        let digits = self.encode(n);
        if digits.len() > width {
            return Err(TagError::OutOfRange(format!(
                "{} needs {} symbols, only {} available",
                n,
                digits.len(),
                width
            )));
        }

        let mut padded = String::with_capacity(width);
        for _ in digits.len()..width {
            padded.push(self.alphabet.symbol(0));
        }
        padded.push_str(&digits);
        Ok(padded)
    }

    /// Decode a numeral, left to right
    pub fn decode(&self, text: &str) -> Result<u64> {
        if text.is_empty() {
            return Err(TagError::InvalidTag("empty numeral".to_string()));
        }

        let radix = self.alphabet.radix();
        text.chars().try_fold(0u64, |acc, symbol| {
            let digit = self.alphabet.index_of(symbol)?;
            acc.checked_mul(radix)
                .and_then(|acc| acc.checked_add(digit))
                .ok_or_else(|| TagError::OutOfRange(format!("'{}' does not fit in 64 bits", text)))
        })
    }

    /// Compare two numerals symbol by symbol in alphabet value order.
    ///
    /// Plain `str` ordering sorts by byte value, which puts upper case and digits
    /// before lower case and so disagrees with this alphabet.
    pub fn compare(&self, a: &str, b: &str) -> Result<Ordering> {
        let mut left = a.chars();
        let mut right = b.chars();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return Ok(Ordering::Equal),
                (None, Some(_)) => return Ok(Ordering::Less),
                (Some(_), None) => return Ok(Ordering::Greater),
                (Some(x), Some(y)) => {
                    let ordering = self.alphabet.index_of(x)?.cmp(&self.alphabet.index_of(y)?);
                    if ordering != Ordering::Equal {
                        return Ok(ordering);
                    }
                }
            }
        }
    }
}
