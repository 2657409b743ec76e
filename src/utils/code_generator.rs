//! Random alias and session-token generation.
//!
//! Codes are drawn from a 62-character alphanumeric alphabet using the OS
//! CSPRNG. No uniqueness check happens here: the store's unique constraint
//! is the only collision authority.

use crate::error::AppError;

/// Characters a generated code may contain. All are URL-safe.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Bytes at or above this value are discarded so that every alphabet
/// character is equally likely.
const REJECTION_THRESHOLD: u8 = (256 - 256 % ALPHABET.len()) as u8;

/// Size of each entropy batch pulled from the OS.
const ENTROPY_BATCH: usize = 64;

/// Generates a random code of exactly `length` characters from [`ALPHABET`].
///
/// # Errors
///
/// Returns [`AppError::Generation`] if the OS entropy source is unavailable.
pub fn generate_code(length: usize) -> Result<String, AppError> {
    let mut code = String::with_capacity(length);
    let mut buffer = [0u8; ENTROPY_BATCH];

    while code.len() < length {
        getrandom::fill(&mut buffer)
            .map_err(|e| AppError::generation(format!("entropy source unavailable: {e}")))?;

        for &byte in buffer.iter().filter(|&&b| b < REJECTION_THRESHOLD) {
            code.push(ALPHABET[usize::from(byte) % ALPHABET.len()] as char);
            if code.len() == length {
                break;
            }
        }
    }

    Ok(code)
}

/// Fixed-length code generator.
///
/// The alias generator and the session-token generator are separate
/// instances configured with their own lengths.
#[derive(Debug, Clone, Copy)]
pub struct CodeGenerator {
    length: usize,
}

impl CodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Produces one candidate code.
    ///
    /// # Errors
    ///
    /// See [`generate_code`].
    pub fn generate(&self) -> Result<String, AppError> {
        generate_code(self.length)
    }
}
