//! Short code generation.
//!
//! Codes are random fixed-length alphanumeric strings. Uniqueness is not
//! checked here: the `links` table rejects duplicates and the link service
//! retries with a fresh code.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Shortest code length accepted by configuration (62^6 possible codes).
pub const MIN_CODE_LENGTH: usize = 6;

/// Longest code length accepted by configuration.
pub const MAX_CODE_LENGTH: usize = 32;

/// Default code length (62^8 possible codes).
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Generates URL-safe short codes from `[A-Za-z0-9]`.
#[derive(Debug, Clone, Copy)]
pub struct CodeGenerator {
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator producing codes of `length` characters.
    ///
    /// The length is clamped to [`MIN_CODE_LENGTH`]..=[`MAX_CODE_LENGTH`].
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_CODE_LENGTH, MAX_CODE_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Generates a new random code.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let code = CodeGenerator::new(8).generate();
    /// assert_eq!(code.len(), 8);
    /// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    /// ```
    pub fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_configured_length() {
        assert_eq!(CodeGenerator::new(8).generate().len(), 8);
        assert_eq!(CodeGenerator::new(12).generate().len(), 12);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        let code = CodeGenerator::default().generate();
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_length_is_clamped() {
        assert_eq!(CodeGenerator::new(2).length(), MIN_CODE_LENGTH);
        assert_eq!(CodeGenerator::new(500).length(), MAX_CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let generator = CodeGenerator::default();
        let codes: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();

        assert_eq!(codes.len(), 1000);
    }
}
