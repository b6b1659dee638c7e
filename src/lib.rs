//! recibo - receipt amount entry
//!
//! The monetary value pipeline behind a receipt form: canonical
//! "thousands-dot, comma-decimal" formatting of keystroke input
//! ([`money::formatter`]), spelling amounts out in Brazilian Portuguese for
//! the "valor por extenso" clause ([`money::verbalizer`]), and a pure
//! keystroke reducer ([`editor`]) that keeps the caret anchored while the
//! text reformats under it.
//!
//! The library surface is pure and synchronous; the binary wraps it in a
//! small terminal form and one-shot CLI commands.

pub mod cli;
pub mod config;
pub mod editor;
pub mod logging;
pub mod money;
pub mod tui;
