//! Lex platform boundary.
//!
//! Typed request/response envelopes for the conversational platform,
//! validated at the boundary instead of accessed as loose JSON.

mod event;
mod response;

pub use event::{Intent, LexEvent, SessionState, Slot, SlotValue};
pub use response::LexResponse;
