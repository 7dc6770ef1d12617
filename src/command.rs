use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveRight,
    MoveLeft,
    Increment,
    Decrement,
    Output,
    Input,
    LoopStart,
    LoopEnd,
}

/// Every word the lexer recognizes. No word is a prefix of another, so at
/// most one entry can match at a given position.
pub const VOCABULARY: [(&str, Command); 8] = [
    ("starboard", Command::MoveRight),
    ("larboard", Command::MoveLeft),
    ("arr", Command::Increment),
    ("avast", Command::Decrement),
    ("ahoy", Command::Output),
    ("plunder", Command::Input),
    ("hoist", Command::LoopStart),
    ("scuttle", Command::LoopEnd),
];

impl Command {
    /// The source word that produces this command.
    pub fn word(self) -> &'static str {
        match self {
            Command::MoveRight => "starboard",
            Command::MoveLeft => "larboard",
            Command::Increment => "arr",
            Command::Decrement => "avast",
            Command::Output => "ahoy",
            Command::Input => "plunder",
            Command::LoopStart => "hoist",
            Command::LoopEnd => "scuttle",
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.word())
    }
}
