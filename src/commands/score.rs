//! Score command
//!
//! Scores a single guess, against a secret when one is given.

use crate::core::{Verdict, Word};
use anyhow::{Context, Result};

/// Score `guess` against `secret`, or produce the pending row when there is no secret
///
/// # Errors
///
/// Returns an error if either word is invalid.
pub fn score_guess(guess: &str, secret: Option<&str>) -> Result<Verdict> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let secret = secret
        .map(|s| Word::new(s).with_context(|| format!("invalid secret '{s}'")))
        .transpose()?;

    Ok(Verdict::score(&guess, secret.as_ref()))
}
