//! State Management
//!
//! Session state and the stale-fetch guard shared by the pages.

pub mod fetch;
pub mod session;

pub use fetch::FetchSeq;
pub use session::{provide_session_state, SessionState};
