//! Game engine: session state machine, input decoding and the controller
//! that connects them to the word services

mod controller;
mod error;
mod input;
mod notification;
mod session;
mod streak;

pub use controller::{GameController, Step};
pub use error::{GameError, SubmitError};
pub use input::KeyInput;
pub use notification::Notification;
pub use session::{Attempt, GameSession, Generation, PendingSubmission, Phase, Validity};
pub use streak::Streak;
