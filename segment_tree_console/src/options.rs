/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Command line options.
//! `--values {list}` or `-v` supplies the initial array instead of reading it from stdin.

use std::ffi::OsString;

use clap::{Arg, ArgAction, Command};

use crate::{ConsoleError, parse_value_list};

fn make_options_parser() -> Command {
    Command::new("segtree")
        .no_binary_name(true)
        .about("Interactive range sum, minimum and maximum queries over an integer array")
        .arg(
            Arg::new("values")
                .short('v')
                .long("values")
                .value_name("LIST")
                .allow_hyphen_values(true)
                .help("Initial array, separated by commas or spaces"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Do not print prompts"),
        )
        .arg(
            Arg::new("show")
                .short('s')
                .long("show")
                .action(ArgAction::SetTrue)
                .help("Render the tree after every update"),
        )
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    /// The initial array, when given on the command line.
    pub values: Option<Vec<i64>>,
    pub quiet: bool,
    pub show: bool,
}

impl Options {
    /// Parse options from the arguments following the binary name.
    pub fn parse_from<I, T>(args: I) -> Result<Self, ConsoleError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;
        let values = matches
            .get_one::<String>("values")
            .map(|list| parse_value_list(list))
            .transpose()?;

        Ok(Self {
            values,
            quiet: matches.get_flag("quiet"),
            show: matches.get_flag("show"),
        })
    }
}
