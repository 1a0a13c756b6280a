//! Contains functionality to read the formulation configuration.

mod reader;
pub use self::reader::read_formulation_config;
