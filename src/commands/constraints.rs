//! Constraints command
//!
//! Rebuilds a guess history from the command line and compiles it into the solver payload.

use crate::core::{ConstraintSet, Verdict, Word};
use anyhow::{Context, Result, bail};

/// Parse one history entry
///
/// `guess:GY-GY` carries its own feedback. A bare guess is scored against `secret`.
///
/// # Errors
///
/// Returns an error if the guess or feedback is malformed, or a bare guess has no secret to be
/// scored against.
pub fn parse_entry(entry: &str, secret: Option<&Word>) -> Result<Verdict> {
    if let Some((guess, feedback)) = entry.split_once(':') {
        let guess = Word::new(guess).with_context(|| format!("invalid guess in '{entry}'"))?;
        return Verdict::from_feedback(guess, feedback)
            .with_context(|| format!("invalid feedback in '{entry}'"));
    }

    let guess = Word::new(entry).with_context(|| format!("invalid guess '{entry}'"))?;
    let Some(secret) = secret else {
        bail!("'{entry}' has no feedback; use guess:feedback or pass --secret");
    };
    Ok(Verdict::score(&guess, Some(secret)))
}

/// Parse every entry in order
///
/// # Errors
///
/// Returns the first entry error, or an error if `secret` is invalid.
pub fn build_history(entries: &[String], secret: Option<&str>) -> Result<Vec<Verdict>> {
    let secret = secret
        .map(|s| Word::new(s).with_context(|| format!("invalid secret '{s}'")))
        .transpose()?;

    entries
        .iter()
        .map(|entry| parse_entry(entry, secret.as_ref()))
        .collect()
}

/// Compile the payload for a command-line history
///
/// # Errors
///
/// Returns an error if the history cannot be parsed.
pub fn compile_entries(entries: &[String], secret: Option<&str>) -> Result<ConstraintSet> {
    let history = build_history(entries, secret)?;
    let constraints = ConstraintSet::compile(&history);
    tracing::debug!(rows = history.len(), "compiled constraints");
    Ok(constraints)
}
