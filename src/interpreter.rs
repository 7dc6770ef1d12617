use std::io::{ErrorKind, Read, Write};

use tracing::debug;

use crate::command::Command::{
    Decrement, Increment, Input, LoopEnd, LoopStart, MoveLeft, MoveRight, Output,
};
use crate::error::{BuildError, RuntimeError};
use crate::jump::JumpTable;
use crate::lexer::{tokenize, Token};

/// What `plunder` stores once the input stream is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EofPolicy {
    /// Leave the current cell unchanged.
    #[default]
    Keep,
    /// Store 0.
    Zero,
    /// Store 255.
    Max,
}

#[derive(Debug)]
pub struct Interpreter {
    tokens: Vec<Token>,
    jumps: JumpTable,
    eof: EofPolicy,
}

impl Interpreter {
    /// Lexes `code` and resolves its loops. Unbalanced loops are rejected
    /// here, before anything is read or written.
    pub fn build(code: &str) -> Result<Self, BuildError> {
        let tokens = tokenize(code);
        let jumps = JumpTable::build(&tokens)?;
        debug!(
            commands = tokens.len(),
            loops = jumps.pairs().count(),
            "program built"
        );
        Ok(Self {
            tokens,
            jumps,
            eof: EofPolicy::default(),
        })
    }

    pub fn with_eof_policy(mut self, eof: EofPolicy) -> Self {
        self.eof = eof;
        self
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn jump_table(&self) -> &JumpTable {
        &self.jumps
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Runs the program to the end. Every call starts from a fresh tape.
    pub fn execute(
        &self,
        read: &mut dyn Read,
        write: &mut dyn Write,
    ) -> Result<(), RuntimeError> {
        let result = self.run(read, write);
        let flushed = write.flush();
        result?;
        flushed.map_err(|err| RuntimeError::Io {
            index: self.tokens.len(),
            err,
        })
    }

    fn run(&self, read: &mut dyn Read, write: &mut dyn Write) -> Result<(), RuntimeError> {
        let mut data = vec![0u8];
        let mut d_offset = 0usize;
        let mut i_offset = 0usize;
        let mut steps = 0u64;

        while i_offset < self.tokens.len() {
            let token = &self.tokens[i_offset];
            match token.command {
                MoveRight => {
                    d_offset += 1;
                    if d_offset == data.len() {
                        data.push(0);
                    }
                }
                MoveLeft => {
                    if d_offset == 0 {
                        return Err(RuntimeError::TapeUnderflow {
                            index: i_offset,
                            pos: token.pos,
                        });
                    }
                    d_offset -= 1;
                }
                Increment => data[d_offset] = data[d_offset].wrapping_add(1),
                Decrement => data[d_offset] = data[d_offset].wrapping_sub(1),
                Output => {
                    write
                        .write_all(&data[d_offset..d_offset + 1])
                        .map_err(|err| RuntimeError::Io { index: i_offset, err })?;
                }
                Input => {
                    let mut buf = [0u8];
                    match read_byte(read, &mut buf) {
                        Ok(true) => data[d_offset] = buf[0],
                        Ok(false) => match self.eof {
                            EofPolicy::Keep => {}
                            EofPolicy::Zero => data[d_offset] = 0,
                            EofPolicy::Max => data[d_offset] = u8::MAX,
                        },
                        Err(err) => return Err(RuntimeError::Io { index: i_offset, err }),
                    }
                }
                LoopStart => {
                    if data[d_offset] == 0 {
                        i_offset = self.jump(i_offset);
                    }
                }
                LoopEnd => {
                    if data[d_offset] != 0 {
                        i_offset = self.jump(i_offset);
                    }
                }
            }

            i_offset += 1;
            steps += 1;
        }

        debug!(steps, tape = data.len(), "program finished");
        Ok(())
    }

    fn jump(&self, idx: usize) -> usize {
        // every bracket was paired in build
        self.jumps.target(idx).unwrap_or(idx)
    }
}

/// Reads a single byte, retrying on interruption. `Ok(false)` means end of
/// input.
fn read_byte(read: &mut dyn Read, buf: &mut [u8; 1]) -> std::io::Result<bool> {
    loop {
        match read.read(buf) {
            Ok(0) => return Ok(false),
            Ok(_) => return Ok(true),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
}
