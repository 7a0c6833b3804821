//! Word lists for the game
//!
//! Embedded per-language answer lists compiled into the binary.

mod embedded;
pub mod loader;

use crate::config::Language;

pub use embedded::{WORDS_EN, WORDS_EN_COUNT, WORDS_FR, WORDS_FR_COUNT};

/// The embedded list for `language`
#[must_use]
pub const fn for_language(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => WORDS_EN,
        Language::Fr => WORDS_FR,
    }
}
