pub mod command;
pub mod error;
pub mod interpreter;
pub mod jump;
pub mod lexer;

pub use command::Command;
pub use error::{BuildError, RuntimeError};
pub use interpreter::{EofPolicy, Interpreter};
