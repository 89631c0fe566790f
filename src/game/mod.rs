//! Game session state

mod session;

pub use session::{GuessSession, MAX_ATTEMPTS, SessionState};
