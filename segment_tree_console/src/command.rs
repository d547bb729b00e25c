/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Parsing of console command lines.

use std::str::{FromStr, SplitWhitespace};

use crate::CommandError;

/// A single console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Sum { left: usize, right: usize },
    Min { left: usize, right: usize },
    Max { left: usize, right: usize },
    Set { index: usize, value: i64 },
    Add { left: usize, right: usize, delta: i64 },
    Show,
    Values,
    Help,
    Quit,
}

impl Command {
    /// Whether the command changes the values of the array.
    pub const fn is_mutation(&self) -> bool {
        matches!(self, Self::Set { .. } | Self::Add { .. })
    }
}

/// The remaining words of a command line.
struct Args<'a> {
    command: &'static str,
    words: SplitWhitespace<'a>,
}

impl Args<'_> {
    fn next<T: FromStr>(&mut self, name: &'static str) -> Result<T, CommandError> {
        let word = self.words.next().ok_or(CommandError::MissingArgument {
            command: self.command,
            name,
        })?;
        word.parse().map_err(|_| CommandError::InvalidArgument {
            name,
            value: word.to_owned(),
        })
    }

    fn finish(mut self, command: Command) -> Result<Command, CommandError> {
        match self.words.next() {
            Some(_) => Err(CommandError::TooManyArguments(self.command)),
            None => Ok(command),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse a command line. Keywords are case-insensitive, and the numeric
    /// codes `1` to `5` stand for `sum`, `min`, `max`, `set` and `add`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or_default().to_ascii_lowercase();
        let command = match keyword.as_str() {
            "sum" | "1" => "sum",
            "min" | "2" => "min",
            "max" | "3" => "max",
            "set" | "update" | "4" => "set",
            "add" | "5" => "add",
            "show" | "display" => "show",
            "values" => "values",
            "help" | "?" => "help",
            "quit" | "exit" => "quit",
            _ => return Err(CommandError::UnknownCommand(keyword)),
        };

        let mut args = Args { command, words };
        let parsed = match command {
            "sum" => Self::Sum {
                left: args.next("left")?,
                right: args.next("right")?,
            },
            "min" => Self::Min {
                left: args.next("left")?,
                right: args.next("right")?,
            },
            "max" => Self::Max {
                left: args.next("left")?,
                right: args.next("right")?,
            },
            "set" => Self::Set {
                index: args.next("index")?,
                value: args.next("value")?,
            },
            "add" => Self::Add {
                left: args.next("left")?,
                right: args.next("right")?,
                delta: args.next("delta")?,
            },
            "show" => Self::Show,
            "values" => Self::Values,
            "help" => Self::Help,
            _ => Self::Quit,
        };
        args.finish(parsed)
    }
}
