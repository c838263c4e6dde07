#![warn(clippy::pedantic)]

pub mod error;
pub mod hex;
pub mod locate;
pub mod scalar;

pub use error::WireError;
pub use locate::{Token, TokenKind, locate, non_null};
