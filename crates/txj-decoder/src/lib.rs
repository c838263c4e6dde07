#![warn(clippy::pedantic)]

pub mod builder;
pub mod config;
pub mod decoder;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod samples;

pub use builder::RecordBuilder;
pub use config::{DEFAULT_MAX_INPUT_LEN, DecoderConfig};
pub use decoder::{TxDecoder, decode_transaction};
pub use dispatch::dispatch;
pub use error::DecodeError;
pub use render::render_summary;
