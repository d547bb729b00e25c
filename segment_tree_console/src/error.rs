/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use segment_tree::SegmentTreeError;
use thiserror::Error;

/// Errors produced while parsing a single command line.
///
/// These are reported to the user and the session continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The first word of the line is not a known command.
    #[error("unknown command `{0}`, type `help` for the list of commands")]
    UnknownCommand(String),
    /// A required argument is absent.
    #[error("`{command}` is missing its `{name}` argument")]
    MissingArgument {
        command: &'static str,
        name: &'static str,
    },
    /// An argument is not a valid number.
    #[error("invalid `{name}` argument `{value}`")]
    InvalidArgument { name: &'static str, value: String },
    /// The line has more arguments than the command takes.
    #[error("`{0}` takes fewer arguments")]
    TooManyArguments(&'static str),
}

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Options(#[from] clap::Error),
    /// The array size given on input is not a non-negative integer.
    #[error("invalid array size `{0}`")]
    InvalidSize(String),
    /// An element of the initial array is not an integer.
    #[error("invalid array element `{0}`")]
    InvalidValue(String),
    /// Input ended before the whole initial array was read.
    #[error("expected {expected} array elements, input ended after {got}")]
    UnexpectedEof { expected: usize, got: usize },
    #[error(transparent)]
    Tree(#[from] SegmentTreeError),
}
