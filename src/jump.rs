use tracing::trace;

use crate::command::Command;
use crate::error::BuildError;
use crate::lexer::Token;

/// Partner index of every loop bracket, in both directions.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct JumpTable {
    targets: Vec<Option<usize>>,
}

impl JumpTable {
    pub fn build(tokens: &[Token]) -> Result<Self, BuildError> {
        let mut targets = vec![None; tokens.len()];
        let mut jmp_stack = vec![];

        for (idx, token) in tokens.iter().enumerate() {
            match token.command {
                Command::LoopStart => jmp_stack.push(idx),
                Command::LoopEnd => match jmp_stack.pop() {
                    Some(start) => {
                        trace!(start, end = idx, "loop paired");
                        targets[start] = Some(idx);
                        targets[idx] = Some(start);
                    }
                    None => {
                        return Err(BuildError::UnmatchedLoopEnd {
                            index: idx,
                            pos: token.pos,
                        });
                    }
                },
                _ => {}
            }
        }

        if let Some(idx) = jmp_stack.pop() {
            return Err(BuildError::UnclosedLoopStart {
                index: idx,
                pos: tokens[idx].pos,
            });
        }

        Ok(Self { targets })
    }

    /// The matching bracket for the bracket at `idx`, `None` for any other
    /// command.
    pub fn target(&self, idx: usize) -> Option<usize> {
        self.targets.get(idx).copied().flatten()
    }

    /// All `(LoopStart, LoopEnd)` index pairs, ordered by start.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .filter_map(|(idx, t)| t.filter(|end| *end > idx).map(|end| (idx, end)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{tokenize, Position};

    fn build(code: &str) -> Result<JumpTable, BuildError> {
        JumpTable::build(&tokenize(code))
    }

    #[test]
    fn test_nested() {
        // 0     1     2   3       4       5
        let table = build("hoist hoist arr scuttle scuttle ahoy").unwrap();
        assert_eq!(Some(4), table.target(0));
        assert_eq!(Some(3), table.target(1));
        assert_eq!(Some(1), table.target(3));
        assert_eq!(Some(0), table.target(4));
        assert_eq!(None, table.target(2));
        assert_eq!(None, table.target(5));
        assert_eq!(None, table.target(99));
        assert_eq!(vec![(0, 4), (1, 3)], table.pairs().collect::<Vec<_>>());
    }

    #[test]
    fn test_symmetric() {
        let code = "hoist arr hoist scuttle hoist hoist scuttle scuttle scuttle hoist scuttle";
        let table = build(code).unwrap();
        let pairs = table.pairs().collect::<Vec<_>>();
        assert_eq!(5, pairs.len());
        for (start, end) in pairs {
            assert_eq!(Some(end), table.target(start));
            assert_eq!(Some(start), table.target(end));
        }
    }

    #[test]
    fn test_no_loops() {
        let table = build("arr ahoy").unwrap();
        assert_eq!(0, table.pairs().count());
        assert_eq!(JumpTable::default(), build("").unwrap());
    }

    #[test]
    fn test_not_match() {
        let code = "hoist hoist\nscuttle scuttle scuttle arr";
        let err = build(code).unwrap_err();
        assert_eq!(
            BuildError::UnmatchedLoopEnd {
                index: 4,
                pos: Position { line: 2, col: 17 },
            },
            err
        );
    }

    #[test]
    fn test_not_closed() {
        let code = "hoist hoist hoist\nscuttle scuttle arr";
        let err = build(code).unwrap_err();
        assert_eq!(
            BuildError::UnclosedLoopStart {
                index: 0,
                pos: Position { line: 1, col: 1 },
            },
            err
        );
    }

    #[test]
    fn test_innermost_unclosed_reported() {
        let code = "hoist arr hoist";
        let err = build(code).unwrap_err();
        assert_eq!(
            BuildError::UnclosedLoopStart {
                index: 2,
                pos: Position { line: 1, col: 11 },
            },
            err
        );
    }
}
