/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Running commands against a tree.

use std::fmt;
use std::io::{BufRead, Write};

use segment_tree::{SegmentTree, SegmentTreeError, TreeSnapshot};
use tracing::{debug, info};

use crate::{Command, ConsoleError};

const HELP: &str = "\
Commands:
  sum L R     (1)  sum of the values in [L, R]
  min L R     (2)  minimum of the values in [L, R]
  max L R     (3)  maximum of the values in [L, R]
  set I V     (4)  set the value at index I to V
  add L R D   (5)  add D to every value in [L, R]
  show             render the tree
  values           print the current values
  help             print this message
  quit             end the session";

/// The result of a successfully executed [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Sum { left: usize, right: usize, sum: i64 },
    Min { left: usize, right: usize, min: i64 },
    Max { left: usize, right: usize, max: i64 },
    Set { index: usize, value: i64 },
    Add { left: usize, right: usize, delta: i64 },
    Tree(TreeSnapshot),
    Values(Vec<i64>),
    Help,
    Quit,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sum { left, right, sum } => write!(f, "Sum [{left},{right}]: {sum}"),
            Self::Min { left, right, min } => write!(f, "Min [{left},{right}]: {min}"),
            Self::Max { left, right, max } => write!(f, "Max [{left},{right}]: {max}"),
            Self::Set { index, value } => write!(f, "After update [{index}]={value}"),
            Self::Add { left, right, delta } => {
                write!(f, "After range update [{left},{right}]+={delta}")
            }
            Self::Tree(snapshot) => fmt::Display::fmt(snapshot, f),
            Self::Values(values) => write!(f, "{values:?}"),
            Self::Help => f.write_str(HELP),
            Self::Quit => f.write_str("Bye"),
        }
    }
}

/// An interactive session over a single tree.
#[derive(Debug)]
pub struct Session {
    tree: SegmentTree,
    show_after_mutation: bool,
    prompt: bool,
}

impl Session {
    /// Creates a session that prompts for commands and renders the tree only
    /// when asked to.
    pub const fn new(tree: SegmentTree) -> Self {
        Self {
            tree,
            show_after_mutation: false,
            prompt: true,
        }
    }

    /// Render the tree after every successful `set` or `add`.
    pub fn show_after_mutation(mut self, show: bool) -> Self {
        self.show_after_mutation = show;
        self
    }

    /// Print a prompt before reading each command.
    pub fn prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Execute a single command against the tree.
    ///
    /// A rejected command leaves the tree unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Output, SegmentTreeError> {
        let output = match command {
            Command::Sum { left, right } => Output::Sum {
                left,
                right,
                sum: self.tree.range_sum(left, right)?,
            },
            Command::Min { left, right } => Output::Min {
                left,
                right,
                min: self.tree.range_min(left, right)?,
            },
            Command::Max { left, right } => Output::Max {
                left,
                right,
                max: self.tree.range_max(left, right)?,
            },
            Command::Set { index, value } => {
                self.tree.update(index, value)?;
                Output::Set { index, value }
            }
            Command::Add { left, right, delta } => {
                self.tree.range_add(left, right, delta)?;
                Output::Add { left, right, delta }
            }
            Command::Show => Output::Tree(self.tree.snapshot()),
            Command::Values => Output::Values(self.tree.to_vec()),
            Command::Help => Output::Help,
            Command::Quit => Output::Quit,
        };
        Ok(output)
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// results and errors to `output`.
    ///
    /// Malformed commands and rejected requests are reported and the session
    /// goes on. Only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), ConsoleError> {
        info!(len = self.tree.len(), "session started");
        let mut line = String::new();
        let mut executed = 0usize;

        loop {
            if self.prompt {
                write!(output, "> ")?;
                output.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                if self.prompt {
                    writeln!(output)?;
                }
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    debug!(line, %err, "malformed command");
                    writeln!(output, "error: {err}")?;
                    continue;
                }
            };

            match self.execute(command) {
                Ok(Output::Quit) => {
                    writeln!(output, "{}", Output::Quit)?;
                    break;
                }
                Ok(result) => {
                    executed += 1;
                    writeln!(output, "{result}")?;
                    if self.show_after_mutation && command.is_mutation() {
                        writeln!(output, "{}", self.tree.snapshot())?;
                    }
                }
                Err(err) => {
                    debug!(?command, %err, "command rejected");
                    writeln!(output, "error: {err}")?;
                }
            }
        }

        info!(executed, "session ended");
        Ok(())
    }
}
