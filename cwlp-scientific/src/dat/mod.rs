//! Contains functionality to read and write problems in the named section dat format.

mod reader;
pub use self::reader::{DatProblem, DatReaderMode};

mod writer;
pub use self::writer::DatInstance;
