/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Interactive console front-end for [`segment_tree`].
//!
//! The console gathers the initial array, then reads one command per line
//! and runs it against a [`SegmentTree`](segment_tree::SegmentTree). It only
//! uses the tree's public query and update operations, plus flushed
//! snapshots for rendering.
//!
//! # Commands
//!
//! | Command     | Code | Effect                          |
//! |-------------|------|---------------------------------|
//! | `sum L R`   | `1`  | Sum of `[L, R]`                 |
//! | `min L R`   | `2`  | Minimum of `[L, R]`             |
//! | `max L R`   | `3`  | Maximum of `[L, R]`             |
//! | `set I V`   | `4`  | Set index `I` to `V`            |
//! | `add L R D` | `5`  | Add `D` to every value in `[L, R]` |
//! | `show`      |      | Render the tree                 |
//! | `values`    |      | Print the current array         |
//! | `help`      |      | List the commands               |
//! | `quit`      |      | End the session                 |

mod command;
mod error;
mod input;
mod options;
mod session;

pub use command::Command;
pub use error::{CommandError, ConsoleError};
pub use input::{parse_value_list, read_initial_values};
pub use options::Options;
pub use session::{Output, Session};
