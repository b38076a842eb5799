//! Source text input from files and stdin.

mod reader;

pub use reader::{ACCEPTED_EXTENSIONS, InputReader};
