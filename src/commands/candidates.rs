//! Candidates command

use crate::core::{ConstraintSet, Word};
use crate::solver::LocalSolver;

/// Admissible words, at most `limit` of them when a limit is given
///
/// Returns the listed words and the total number admitted.
#[must_use]
pub fn list_candidates(
    solver: &LocalSolver,
    constraints: &ConstraintSet,
    limit: Option<usize>,
) -> (Vec<Word>, usize) {
    let candidates = solver.candidates(constraints);
    let total = candidates.len();
    let listed = candidates
        .into_iter()
        .take(limit.unwrap_or(total))
        .cloned()
        .collect();
    (listed, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::constraints::compile_entries;
    use crate::wordlists::WORDS_EN;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn lists_admissible_words() {
        let solver = LocalSolver::new(words_from_slice(WORDS_EN));
        let constraints = compile_entries(&["roomy".to_string()], Some("robot")).unwrap();
        let (listed, total) = list_candidates(&solver, &constraints, None);

        assert_eq!(listed.len(), total);
        assert!(listed.iter().any(|w| w.text() == "robot"));
        assert!(listed.iter().all(|w| constraints.admits(w)));
    }

    #[test]
    fn limit_truncates_but_keeps_total() {
        let solver = LocalSolver::new(words_from_slice(WORDS_EN));
        let (listed, total) = list_candidates(&solver, &ConstraintSet::default(), Some(3));

        assert_eq!(listed.len(), 3);
        assert_eq!(total, WORDS_EN.len());
    }
}
