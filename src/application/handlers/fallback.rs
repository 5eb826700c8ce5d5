//! FallbackHandler - fixed help reply for unrecognized intents.

/// Help message sent for any intent this service does not recognize.
const HELP_MESSAGE: &str =
    "Sorry, I didn't get that. Try: 'student info S2023001' or 'bonafide certificate'.";

/// Handler for every intent other than `GetStudentInfo` and `FAQ`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackHandler;

impl FallbackHandler {
    pub fn new() -> Self {
        Self
    }

    /// Always returns the fixed help message.
    pub fn handle(&self) -> String {
        HELP_MESSAGE.to_string()
    }
}
