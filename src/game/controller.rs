//! Drives a [`GameSession`] from player input and the word services

use super::{
    GameError, GameSession, Generation, KeyInput, Notification, PendingSubmission, Phase,
    Streak, SubmitError, Validity,
};
use crate::services::{ServiceError, WordOracle, WordSource};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// What the caller has to do after pressing a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// State changed; redraw
    Notify(Notification),
    /// Input had no effect
    Ignored,
    /// Guess is frozen: look it up with the oracle, then call
    /// [`GameController::settle`]
    Validate(PendingSubmission),
}

/// Owns the running session, the win streak and both services
///
/// Input that arrives while a guess is being validated is ignored by the
/// session itself, so callers may run the oracle lookup on another task (see
/// [`Step::Validate`]) or just await [`GameController::dispatch`].
pub struct GameController<S, O> {
    source: S,
    oracle: Arc<O>,
    session: GameSession,
    streak: Streak,
}

impl<S, O> GameController<S, O> {
    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn streak(&self) -> &Streak {
        &self.streak
    }

    /// Shared handle to the oracle, for lookups on another task
    #[must_use]
    pub fn oracle(&self) -> Arc<O> {
        Arc::clone(&self.oracle)
    }
}

impl<S, O> GameController<S, O>
where
    S: WordSource,
    O: WordOracle + Send + Sync,
{
    /// Fetch a target word and start the first game
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SourceUnavailable`] if no target word can be obtained.
    #[instrument(skip_all)]
    pub async fn start(source: S, oracle: Arc<O>) -> Result<Self, GameError> {
        let target = source
            .fetch_target_word()
            .await
            .map_err(GameError::SourceUnavailable)?;
        info!(generation = %Generation::FIRST, "game started");

        Ok(Self {
            source,
            oracle,
            session: GameSession::new(target, Generation::FIRST),
            streak: Streak::default(),
        })
    }

    pub fn press(&mut self, input: KeyInput) -> Step {
        let notification = match input {
            KeyInput::Letter(letter) => self.session.input_letter(letter),
            KeyInput::Delete => self.session.delete(),
            KeyInput::Submit => match self.session.begin_submit() {
                Ok(pending) => return Step::Validate(pending),
                Err(SubmitError::WrongLength { len, .. }) => {
                    Some(Notification::GuessLengthError { len })
                }
                Err(error) => {
                    debug!(%error, "submit ignored");
                    None
                }
            },
        };

        notification.map_or(Step::Ignored, Step::Notify)
    }

    /// Feed back the oracle's answer for a pending guess
    ///
    /// A failed lookup accepts the guess. Results for a session that has
    /// since been replaced are dropped and return `None`.
    pub fn settle(
        &mut self,
        pending: PendingSubmission,
        lookup: Result<bool, ServiceError>,
    ) -> Option<Notification> {
        let validity = match lookup {
            Ok(true) => Validity::Valid,
            Ok(false) => Validity::Invalid,
            Err(error) => {
                warn!(%error, candidate = pending.candidate(), "word check failed, accepting guess");
                Validity::Unchecked
            }
        };

        match self.session.settle(pending, validity) {
            Ok(notification) => {
                self.record(&notification);
                Some(notification)
            }
            Err(error) => {
                debug!(%error, "discarding validation result");
                None
            }
        }
    }

    /// Press a key and, for a submission, wait for the oracle before returning
    pub async fn dispatch(&mut self, input: KeyInput) -> Option<Notification> {
        match self.press(input) {
            Step::Notify(notification) => Some(notification),
            Step::Ignored => None,
            Step::Validate(pending) => {
                let lookup = self.oracle.as_ref().is_valid_word(pending.candidate()).await;
                self.settle(pending, lookup)
            }
        }
    }

    /// Replace the current game with a fresh one
    ///
    /// Leaving a game that was not won counts as a loss, whether or not any
    /// guess was made.
    /// Any validation still running for the old game is discarded when it
    /// completes.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SourceUnavailable`] if no new target word can be
    /// obtained; the current game is left as it was.
    #[instrument(skip_all, fields(from = %self.session.generation()))]
    pub async fn reset(&mut self) -> Result<Notification, GameError> {
        let target = self
            .source
            .fetch_target_word()
            .await
            .map_err(GameError::SourceUnavailable)?;

        if self.session.phase() != Phase::Won {
            info!(phase = ?self.session.phase(), "game not won, streak forfeited");
            self.streak.record_loss();
        }

        let generation = self.session.generation().next();
        self.session = GameSession::new(target, generation);
        info!(%generation, "game started");

        Ok(Notification::SessionReset)
    }

    fn record(&mut self, notification: &Notification) {
        match notification {
            Notification::GameWon { .. } => self.streak.record_win(),
            Notification::GameLost { .. } => self.streak.record_loss(),
            _ => {}
        }
    }
}
