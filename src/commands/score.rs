//! Score a single guess against a known target

use crate::core::{Feedback, Word, WordError, evaluate};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub target: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target` without any word services
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn score_guess(target: &str, guess: &str) -> Result<ScoreResult, WordError> {
    let target = Word::new(target)?;
    let guess = Word::new(guess)?;
    let feedback = evaluate(&target, &guess);

    Ok(ScoreResult {
        target,
        guess,
        feedback,
    })
}
