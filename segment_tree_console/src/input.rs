/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Reading the initial array.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::ConsoleError;

/// Parse a list of integers separated by commas and/or whitespace.
///
/// An empty list is valid and describes the empty array.
pub fn parse_value_list(list: &str) -> Result<Vec<i64>, ConsoleError> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            word.parse()
                .map_err(|_| ConsoleError::InvalidValue(word.to_owned()))
        })
        .collect()
}

/// Read the initial array from `input`: first its size, then that many
/// integers, separated by any whitespace including newlines.
///
/// Unless `prompt` is `None`, prompts are written to it before each part.
/// Words left on the line holding the last element are discarded.
pub fn read_initial_values<R: BufRead, W: Write>(
    input: &mut R,
    mut prompt: Option<&mut W>,
) -> Result<Vec<i64>, ConsoleError> {
    if let Some(out) = prompt.as_deref_mut() {
        writeln!(out, "Enter array size:")?;
    }

    let mut size: Option<usize> = None;
    let mut values = Vec::new();
    let mut line = String::new();

    loop {
        if size == Some(values.len()) {
            return Ok(values);
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return match size {
                None => Err(ConsoleError::InvalidSize(String::new())),
                Some(expected) => Err(ConsoleError::UnexpectedEof {
                    expected,
                    got: values.len(),
                }),
            };
        }

        let mut words = line.split_whitespace();
        while let Some(word) = words.next() {
            match size {
                None => {
                    let parsed = word
                        .parse()
                        .map_err(|_| ConsoleError::InvalidSize(word.to_owned()))?;
                    size = Some(parsed);
                    if parsed > 0 {
                        if let Some(out) = prompt.as_deref_mut() {
                            writeln!(out, "Enter {parsed} elements:")?;
                        }
                    }
                }
                Some(expected) if values.len() < expected => {
                    let value = word
                        .parse()
                        .map_err(|_| ConsoleError::InvalidValue(word.to_owned()))?;
                    values.push(value);
                }
                Some(expected) => {
                    let ignored = 1 + words.count();
                    warn!(expected, ignored, "ignoring extra words after the initial array");
                    break;
                }
            }
        }
    }
}
