//! Browser utilities and the pure logic behind them.
//!
//! Pure codecs (cookie strings, handoff URLs, validation, hashing) are kept
//! separate from the `hydrate`-gated browser effects so they stay testable
//! off-browser.

pub mod browser;
pub mod cookie;
pub mod handoff;
pub mod password;
pub mod token_store;
pub mod validate;
