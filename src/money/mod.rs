// Monetary value pipeline
//
// Everything in here is pure and synchronous: formatting raw keystrokes into
// the canonical "thousands-dot, comma-decimal" display string, parsing that
// string back into a numeric amount, and spelling an amount out in words for
// the "valor por extenso" clause of a receipt.
//
// The canonical text is the only value the surrounding form stores; the
// numeric amount and the verbalized clause are always recomputed from it so
// the three can never drift apart.

pub mod formatter;
pub mod verbalizer;

use thiserror::Error;

/// Receipts never reach one trillion whole units; amounts at or above this
/// bound are rejected at parse time rather than wrapped or truncated.
pub const MAX_UNITS: u64 = 1_000_000_000_000;

/// A non-negative monetary amount with at most two fractional digits.
///
/// Stored as integer centavos so no binary floating point enters the
/// pipeline. Values produced by [`formatter::to_number`] are always below
/// [`MAX_UNITS`] whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// Create an amount from centavos
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole units and a 0-99 centavo part
    pub const fn from_units_cents(units: u64, cents: u64) -> Self {
        Self(units * 100 + cents)
    }

    /// The zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Total centavos
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Whole-unit part (reais)
    pub const fn units(&self) -> u64 {
        self.0 / 100
    }

    /// Centavo part, 0-99
    pub const fn cents_part(&self) -> u64 {
        self.0 % 100
    }

    /// The amount as a plain decimal number, for the persistence record
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// The one policy error the pipeline surfaces: an amount too large for a
/// receipt. Malformed text never errors (the formatter is lenient by
/// design), so magnitude is the only way parsing can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount has {digits} integer digits, above the receipt limit of 12")]
    MagnitudeExceeded { digits: usize },
}
