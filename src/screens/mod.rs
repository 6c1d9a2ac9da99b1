//! One module per screen. Each runs its own draw/poll loop and returns the
//! player's choice as a plain enum for the driver in `app` to act on.

pub mod dead;
pub mod paused;
pub mod playing;
pub mod title;

pub use dead::DeadAction;
pub use paused::PauseAction;
pub use playing::RoundOutcome;
pub use title::TitleAction;
