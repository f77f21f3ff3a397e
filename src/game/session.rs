//! Turn-based game state machine
//!
//! ```text
//! AwaitingInput --letter--> ... --5th letter--> RowComplete
//! RowComplete | AwaitingInput with a full row --submit--> Validating
//! Validating --invalid word--> AwaitingInput (guess kept for editing)
//! Validating --scored--> AwaitingInput | Won | Lost
//! ```
//!
//! Submission is split in two so the dictionary lookup can run elsewhere:
//! [`GameSession::begin_submit`] freezes the guess and hands out a
//! [`PendingSubmission`] tagged with the session's [`Generation`];
//! [`GameSession::settle`] applies the lookup result. While validating, every
//! mutating input is ignored, and a result tagged with another generation is
//! refused.

use super::{Notification, SubmitError};
use crate::core::{Feedback, MAX_ATTEMPTS, WORD_LENGTH, Word, evaluate};
use std::fmt;
use tracing::{debug, info, trace};

/// Identity of a session, distinct for every game a controller starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    RowComplete,
    Validating,
    Won,
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of the dictionary check for a pending guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
    /// The check itself failed; the guess is accepted
    Unchecked,
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

/// A guess frozen for validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    generation: Generation,
    guess: Word,
}

impl PendingSubmission {
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Lowercase text to look up
    #[must_use]
    pub fn candidate(&self) -> &str {
        self.guess.text()
    }
}

/// State of one game, from first letter to win or loss
#[derive(Debug, Clone)]
pub struct GameSession {
    generation: Generation,
    target: Word,
    attempts: Vec<Attempt>,
    guess: String,
    phase: Phase,
}

impl GameSession {
    #[must_use]
    pub fn new(target: Word, generation: Generation) -> Self {
        Self {
            generation,
            target,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            guess: String::with_capacity(WORD_LENGTH),
            phase: Phase::AwaitingInput,
        }
    }

    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// Letters typed for the guess in progress
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.guess
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Append a letter; ignored unless the row is still being typed
    pub fn input_letter(&mut self, letter: char) -> Option<Notification> {
        if self.phase != Phase::AwaitingInput
            || self.guess.len() >= WORD_LENGTH
            || !letter.is_ascii_alphabetic()
        {
            trace!(%letter, phase = ?self.phase, "letter ignored");
            return None;
        }

        let letter = letter.to_ascii_lowercase();
        self.guess.push(letter);
        if self.guess.len() == WORD_LENGTH {
            self.phase = Phase::RowComplete;
        }

        Some(Notification::LetterAdded(letter))
    }

    /// Remove the last typed letter; ignored while validating or when empty
    pub fn delete(&mut self) -> Option<Notification> {
        if !matches!(self.phase, Phase::AwaitingInput | Phase::RowComplete) {
            trace!(phase = ?self.phase, "delete ignored");
            return None;
        }

        self.guess.pop()?;
        self.phase = Phase::AwaitingInput;
        Some(Notification::LetterRemoved)
    }

    /// Freeze the typed guess for validation
    ///
    /// # Errors
    ///
    /// - [`SubmitError::GameOver`] once the game is won or lost
    /// - [`SubmitError::InFlight`] while another guess is being checked
    /// - [`SubmitError::WrongLength`] unless exactly five letters are typed
    ///
    /// State is untouched on error.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        match self.phase {
            Phase::Won | Phase::Lost => return Err(SubmitError::GameOver),
            Phase::Validating => return Err(SubmitError::InFlight),
            Phase::AwaitingInput | Phase::RowComplete => {}
        }

        if self.guess.len() != WORD_LENGTH {
            return Err(SubmitError::wrong_length(self.guess.len()));
        }

        let guess = Word::new(self.guess.as_str())?;
        self.phase = Phase::Validating;
        debug!(generation = %self.generation, %guess, "validating guess");

        Ok(PendingSubmission {
            generation: self.generation,
            guess,
        })
    }

    /// Apply the dictionary verdict for a pending guess
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Stale`] if `pending` came from a different session
    /// - [`SubmitError::NotValidating`] if no guess is awaiting a verdict
    ///
    /// State is untouched on error.
    pub fn settle(
        &mut self,
        pending: PendingSubmission,
        validity: Validity,
    ) -> Result<Notification, SubmitError> {
        if pending.generation != self.generation {
            return Err(SubmitError::Stale {
                pending: pending.generation,
                current: self.generation,
            });
        }
        if self.phase != Phase::Validating {
            return Err(SubmitError::NotValidating);
        }

        if validity == Validity::Invalid {
            debug!(guess = %pending.guess, "guess is not a recognised word");
            self.phase = Phase::AwaitingInput;
            return Ok(Notification::InvalidWordRejected(pending.guess));
        }

        let feedback = evaluate(&self.target, &pending.guess);
        self.attempts.push(Attempt {
            guess: pending.guess,
            feedback,
        });
        self.guess.clear();

        let attempts = self.attempts.len();
        let notification = if feedback.is_perfect() {
            self.phase = Phase::Won;
            info!(generation = %self.generation, attempts, "game won");
            Notification::GameWon { attempts }
        } else if attempts >= MAX_ATTEMPTS {
            self.phase = Phase::Lost;
            info!(generation = %self.generation, target = %self.target, "game lost");
            Notification::GameLost {
                target: self.target.clone(),
            }
        } else {
            self.phase = Phase::AwaitingInput;
            Notification::GuessScored(feedback)
        };

        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(target: &str) -> GameSession {
        GameSession::new(Word::new(target).unwrap(), Generation::FIRST)
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for letter in word.chars() {
            session.input_letter(letter);
        }
    }

    fn guess(session: &mut GameSession, word: &str) -> Notification {
        type_word(session, word);
        let pending = session.begin_submit().unwrap();
        session.settle(pending, Validity::Valid).unwrap()
    }

    #[test]
    fn typing_five_letters_completes_the_row() {
        let mut s = session("crane");
        type_word(&mut s, "TRAI");
        assert_eq!(s.phase(), Phase::AwaitingInput);

        assert_eq!(s.input_letter('N'), Some(Notification::LetterAdded('n')));
        assert_eq!(s.phase(), Phase::RowComplete);
        assert_eq!(s.current_guess(), "train");
    }

    #[test]
    fn sixth_letter_and_non_letters_are_ignored() {
        let mut s = session("crane");
        assert_eq!(s.input_letter('7'), None);
        type_word(&mut s, "train");
        assert_eq!(s.input_letter('s'), None);
        assert_eq!(s.current_guess(), "train");
    }

    #[test]
    fn delete_on_empty_guess_is_a_noop() {
        let mut s = session("crane");
        assert_eq!(s.delete(), None);
        assert_eq!(s.current_guess(), "");
        assert_eq!(s.phase(), Phase::AwaitingInput);
    }

    #[test]
    fn delete_reopens_a_complete_row() {
        let mut s = session("crane");
        type_word(&mut s, "train");
        assert_eq!(s.delete(), Some(Notification::LetterRemoved));
        assert_eq!(s.current_guess(), "trai");
        assert_eq!(s.phase(), Phase::AwaitingInput);
    }

    #[test]
    fn short_submission_changes_nothing() {
        let mut s = session("crane");
        type_word(&mut s, "tra");

        assert_eq!(s.begin_submit(), Err(SubmitError::wrong_length(3)));
        assert_eq!(s.phase(), Phase::AwaitingInput);
        assert_eq!(s.current_guess(), "tra");
        assert!(s.attempts().is_empty());
    }

    #[test]
    fn inputs_are_ignored_while_validating() {
        let mut s = session("crane");
        type_word(&mut s, "train");
        let pending = s.begin_submit().unwrap();
        assert_eq!(pending.candidate(), "train");

        assert_eq!(s.delete(), None);
        assert_eq!(s.input_letter('x'), None);
        assert_eq!(s.begin_submit(), Err(SubmitError::InFlight));
        assert_eq!(s.current_guess(), "train");
        assert_eq!(s.phase(), Phase::Validating);
    }

    #[test]
    fn rejected_word_stays_editable() {
        let mut s = session("crane");
        type_word(&mut s, "xxxxx");
        let pending = s.begin_submit().unwrap();

        let notification = s.settle(pending, Validity::Invalid).unwrap();
        assert_eq!(
            notification,
            Notification::InvalidWordRejected(Word::new("xxxxx").unwrap())
        );
        assert_eq!(s.current_guess(), "xxxxx");
        assert_eq!(s.phase(), Phase::AwaitingInput);
        assert!(s.attempts().is_empty());

        // Row is still full, so only deletion or resubmission does anything
        assert_eq!(s.input_letter('y'), None);
        assert_eq!(s.delete(), Some(Notification::LetterRemoved));
        assert_eq!(s.input_letter('y'), Some(Notification::LetterAdded('y')));
    }

    #[test]
    fn unchecked_guess_is_scored() {
        let mut s = session("crane");
        type_word(&mut s, "train");
        let pending = s.begin_submit().unwrap();

        let notification = s.settle(pending, Validity::Unchecked).unwrap();
        assert!(matches!(notification, Notification::GuessScored(_)));
        assert_eq!(s.attempts().len(), 1);
    }

    #[test]
    fn crane_is_won_on_second_attempt() {
        let mut s = session("crane");

        let first = guess(&mut s, "train");
        assert_eq!(first, Notification::GuessScored("-GG-Y".parse().unwrap()));
        assert_eq!(s.phase(), Phase::AwaitingInput);
        assert_eq!(s.current_guess(), "");

        assert_eq!(guess(&mut s, "crane"), Notification::GameWon { attempts: 2 });
        assert_eq!(s.phase(), Phase::Won);
        assert_eq!(s.attempts_remaining(), 4);
    }

    #[test]
    fn won_game_accepts_no_more_input() {
        let mut s = session("crane");
        guess(&mut s, "crane");

        assert_eq!(s.input_letter('a'), None);
        assert_eq!(s.delete(), None);
        assert_eq!(s.begin_submit(), Err(SubmitError::GameOver));
        assert_eq!(s.attempts().len(), 1);
    }

    #[test]
    fn sixth_miss_loses_exactly_once() {
        let mut s = session("apple");
        let misses = ["crane", "slate", "irate", "moist", "bough", "dwarf"];

        for word in &misses[..5] {
            assert!(matches!(guess(&mut s, word), Notification::GuessScored(_)));
        }
        assert_eq!(
            guess(&mut s, misses[5]),
            Notification::GameLost {
                target: Word::new("apple").unwrap()
            }
        );
        assert_eq!(s.phase(), Phase::Lost);
        assert_eq!(s.attempts_remaining(), 0);

        // Seventh input is refused
        assert_eq!(s.input_letter('a'), None);
        assert_eq!(s.begin_submit(), Err(SubmitError::GameOver));
        assert_eq!(s.attempts().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut s = session("apple");
        for word in ["crane", "slate", "irate", "moist", "bough"] {
            guess(&mut s, word);
        }
        assert_eq!(guess(&mut s, "apple"), Notification::GameWon { attempts: 6 });
    }

    #[test]
    fn result_from_another_session_is_refused() {
        let mut old = session("crane");
        type_word(&mut old, "train");
        let pending = old.begin_submit().unwrap();

        let mut current = GameSession::new(Word::new("slate").unwrap(), Generation::FIRST.next());
        type_word(&mut current, "train");
        current.begin_submit().unwrap();

        assert_eq!(
            current.settle(pending, Validity::Valid),
            Err(SubmitError::Stale {
                pending: Generation::FIRST,
                current: Generation::FIRST.next(),
            })
        );
        assert_eq!(current.phase(), Phase::Validating);
        assert!(current.attempts().is_empty());
    }

    #[test]
    fn settle_without_pending_submission_is_refused() {
        let mut s = session("crane");
        type_word(&mut s, "train");
        let pending = s.begin_submit().unwrap();
        s.settle(pending.clone(), Validity::Valid).unwrap();

        assert_eq!(
            s.settle(pending, Validity::Valid),
            Err(SubmitError::NotValidating)
        );
        assert_eq!(s.attempts().len(), 1);
    }
}
