//! Contains common text reading functionality.

mod text_reader;
pub use self::text_reader::*;
