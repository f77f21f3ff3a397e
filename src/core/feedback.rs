//! Guess scoring and per-letter feedback
//!
//! A guess is scored against the target in two passes so that repeated
//! letters are never credited more often than they occur in the target:
//! - Pass 1 marks exact matches (Correct) and consumes those target letters
//! - Pass 2 marks remaining letters Present while an unconsumed copy exists
//!   in the target (consuming the leftmost one), otherwise Absent

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    /// Letter does not contribute any further match (gray)
    Absent,
    /// Letter is in the target, but at another position (yellow)
    Present,
    /// Letter matches the target at this position (green)
    Correct,
}

impl Verdict {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Ordered verdicts for one scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is Correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count how many positions carry the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert feedback to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/⬜/⬛ for absent
impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let verdicts = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Ok(Verdict::Correct),
                'Y' | 'y' | '🟨' => Ok(Verdict::Present),
                '-' | '_' | '⬜' | '⬛' => Ok(Verdict::Absent),
                _ => Err(format!("Invalid feedback character '{ch}' in {s}")),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let verdicts: [Verdict; WORD_LENGTH] = verdicts
            .try_into()
            .map_err(|_| format!("Invalid feedback string: {s}"))?;

        Ok(Self(verdicts))
    }
}

/// Score `guess` against `target`
///
/// Pure and deterministic; the `Word` type guarantees both sides have
/// exactly [`WORD_LENGTH`] letters.
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, evaluate};
///
/// let target = Word::new("alloy").unwrap();
/// let guess = Word::new("llama").unwrap();
///
/// // L(yellow) L(green) A(yellow) M(gray) A(gray)
/// assert_eq!(evaluate(&target, &guess).to_emoji(), "🟨🟩🟨⬜⬜");
/// ```
#[must_use]
pub fn evaluate(target: &Word, guess: &Word) -> Feedback {
    let guess = guess.letters();
    let mut remaining: [Option<u8>; WORD_LENGTH] = target.letters().map(Some);
    let mut verdicts = [Verdict::Absent; WORD_LENGTH];

    // First pass: exact position matches
    for (i, &letter) in guess.iter().enumerate() {
        if remaining[i] == Some(letter) {
            verdicts[i] = Verdict::Correct;
            remaining[i] = None;
        }
    }

    // Second pass: leftmost unconsumed occurrence elsewhere
    for (i, &letter) in guess.iter().enumerate() {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
            verdicts[i] = Verdict::Present;
            *slot = None;
        }
    }

    Feedback(verdicts)
}
