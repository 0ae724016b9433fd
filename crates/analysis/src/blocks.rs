//! Tree block splitting.
//!
//! A matrix-representation dump is a sequence of blocks, each closed by a line
//! starting with `End;`. Blocks appear in the order the batch file ran its
//! `matrixrep` commands.

use std::io::{self, BufRead, Lines};

/// Prefix of the line closing a tree block.
pub const BLOCK_TERMINATOR: &str = "End;";

/// Iterator over the tree blocks of a dump.
///
/// Each item holds the lines of one block without the terminator. A trailing
/// block cut off before its terminator is still yielded, unless it holds
/// nothing but whitespace.
pub struct TreeBlockReader<R> {
    lines: Lines<R>,
    done: bool,
}

impl<R: BufRead> TreeBlockReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for TreeBlockReader<R> {
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut block = Vec::new();
        for line in self.lines.by_ref() {
            match line {
                Ok(line) if line.starts_with(BLOCK_TERMINATOR) => return Some(Ok(block)),
                Ok(line) => block.push(line),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        self.done = true;
        if block.iter().all(|l| l.trim().is_empty()) {
            None
        } else {
            log::debug!("unterminated tree block of {} lines at end of input", block.len());
            Some(Ok(block))
        }
    }
}
