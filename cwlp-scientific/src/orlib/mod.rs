//! Contains functionality to read problems in the OR-Library cap format.

mod reader;
pub use self::reader::OrLibProblem;
