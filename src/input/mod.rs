//! Reading one-shot messages from arguments, files and stdin.

mod reader;

pub use reader::{InputReader, MAX_INPUT_SIZE};
