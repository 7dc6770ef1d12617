use std::fmt::{Display, Formatter};

use crate::command::{Command, VOCABULARY};

/// 1-based line and column of the first character of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, col {}", self.line, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub command: Command,
    pub pos: Position,
}

/// Scans `source` left to right and returns a token for every vocabulary
/// word found. Everything else is skipped.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut result = vec![];
    let mut line = 1usize;
    let mut col = 1usize;
    let mut rest = source;

    while let Some(c) = rest.chars().next() {
        let matched = VOCABULARY
            .iter()
            .find(|(word, _)| rest.starts_with(word));

        match matched {
            Some((word, command)) => {
                result.push(Token {
                    command: *command,
                    pos: Position { line, col },
                });
                // words are ascii and never contain a newline
                col += word.len();
                rest = &rest[word.len()..];
            }
            None => {
                if c == '\n' {
                    line += 1;
                    col = 1;
                } else {
                    col += 1;
                }
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command::*;

    fn commands(source: &str) -> Vec<Command> {
        tokenize(source).into_iter().map(|t| t.command).collect()
    }

    #[test]
    fn test_basic() {
        let code = "starboard larboard arr avast ahoy plunder hoist scuttle";
        assert_eq!(
            vec![MoveRight, MoveLeft, Increment, Decrement, Output, Input, LoopStart, LoopEnd],
            commands(code)
        );
    }

    #[test]
    fn test_no_words() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("Yo ho ho, a bottle of rum!\n\tnothing here").is_empty());
    }

    #[test]
    fn test_words_inside_text() {
        // no separators needed, and unknown text around words is inert
        assert_eq!(vec![Increment, Increment, Output], commands("arrarr--ahoy!"));
        assert_eq!(vec![Increment], commands("arrr"));
        assert_eq!(vec![Output], commands("Sahoys"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(tokenize("ARR Ahoy HOIST").is_empty());
    }

    #[test]
    fn test_positions() {
        let code = "arr ahoy\n  hoist\népée scuttle";
        let tokens = tokenize(code);
        let pos = tokens.iter().map(|t| (t.pos.line, t.pos.col)).collect::<Vec<_>>();
        assert_eq!(vec![(1, 1), (1, 5), (2, 3), (3, 6)], pos);
    }
}
