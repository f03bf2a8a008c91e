//! Serial command console
//!
//! Bytes in, one line at a time, first token picks the handler.
//! Zero heap allocation - all storage is fixed capacity.

pub mod dispatcher;
pub mod error;
pub mod line_buffer;
pub mod registry;
pub mod tokenizer;

pub use dispatcher::{CommandContext, Dispatch, SerialCommand};
pub use error::{ConfigError, RegistryError};
pub use line_buffer::{Feed, LineBuffer};
pub use registry::{CommandEntry, Handler, Registry};
pub use tokenizer::TokenCursor;
