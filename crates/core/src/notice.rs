//! Short-lived, non-blocking messages shown when a fetch fails.

use std::fmt;

/// A user-visible failure notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// No transport was reachable.
    NoConnection,
    /// The server answered with a non-2xx status, or with an empty body
    /// (`status` is `None` then).
    RequestFailed { status: Option<u16> },
    /// Anything else; the message is shown verbatim.
    Unexpected { message: String },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::NoConnection => "No internet connection".to_string(),
            Notice::RequestFailed { .. } => "Error occurred".to_string(),
            Notice::Unexpected { message } => format!("Error occurred: {message}"),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
