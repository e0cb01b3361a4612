use std::error::Error;
use std::fmt;

// ---------------------------------------------
// Error Handling
// ---------------------------------------------

/// Crate-wide error type. Everything that can go wrong during a game
/// (illegal player moves, malformed input, board misuse) is reported
/// through this one string-backed error.
#[derive(Debug, Clone)]
pub struct ChessError {
    msg: String,
}

pub type ChessResult<T> = std::result::Result<T, ChessError>;

impl From<String> for ChessError {
    fn from(msg: String) -> ChessError {
        ChessError { msg }
    }
}

impl From<&str> for ChessError {
    fn from(s: &str) -> ChessError {
        ChessError { msg: s.to_string() }
    }
}

impl Error for ChessError {}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "chess error: {}", self.msg)
    }
}
