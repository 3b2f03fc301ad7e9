//! Subcommand implementations for `nuditool`.
//!
//! Each command prints its result to stdout and exits the process with
//! status 1 on error.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod analyze_ops;
pub mod config_ops;
pub mod convert_ops;

use std::fs;
use std::io::{self, Read};

use tracing::debug;

/// Read a whole input file, or stdin when `path` is absent or `-`.
pub(crate) fn read_input(path: Option<&str>) -> String {
    let text = match path {
        None | Some("-") => {
            let mut buf = String::new();
            die!(
                io::stdin().read_to_string(&mut buf),
                "Error reading stdin: {}"
            );
            buf
        }
        Some(file) => die!(fs::read_to_string(file), "Error reading {file}: {}"),
    };
    debug!(source = path.unwrap_or("-"), bytes = text.len(), "read input");
    text
}
