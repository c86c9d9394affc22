//! A line-driven shell that inserts each line it reads into an [`OrderedTree`] and prints the
//! resulting shape.
//!
//! Reading stops at the first empty line or at the end of the input. After every insert the
//! tree is rendered in pre-order with each value prefixed by one marker per level of depth:
//!
//! ```text
//! Enter string: dog
//! Pre-order traversal:
//! dog
//! Node height values:
//! dog: 0
//! ```
//!
//! # Examples
//!
//! ```
//! use bstree::shell::{self, Settings};
//!
//! let input = "dog\ncat\n\n".as_bytes();
//! let mut output = Vec::new();
//! let settings = Settings { show_heights: false, ..Settings::default() };
//!
//! let tree = shell::run(input, &mut output, &settings).unwrap();
//!
//! assert!(tree.contains("cat"));
//! assert!(String::from_utf8(output).unwrap().ends_with("dog\n-cat\n\nEnter string: "));
//! ```

use std::borrow::Cow;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::OrderedTree;

/// Printed before each line is read.
pub const PROMPT: &str = "Enter string: ";

/// Errors raised while driving the shell.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Reading the input or writing the output failed.
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),
}

/// How the shell renders the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Repeated once per level of depth in front of each value.
    pub marker: char,
    /// Whether to print the height of every node after the pre-order rendering.
    pub show_heights: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            marker: '-',
            show_heights: true,
        }
    }
}

/// Reads lines from `input` until an empty line or the end of the stream, inserting each one
/// into a fresh tree and rendering the tree to `output` after every insert. Returns the tree
/// built along the way.
///
/// Bytes that aren't valid UTF-8 are replaced with `U+FFFD` rather than ending the session.
pub fn run<R, W>(
    mut input: R,
    mut output: W,
    settings: &Settings,
) -> Result<OrderedTree<String>, ShellError>
where
    R: BufRead,
    W: Write,
{
    let mut tree = OrderedTree::new();
    let mut line = Vec::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            debug!("end of input");
            break;
        }

        let decoded = String::from_utf8_lossy(&line);
        if let Cow::Owned(_) = decoded {
            warn!("line is not valid UTF-8, replacing invalid bytes");
        }
        let value = trim_line_ending(&decoded);
        if value.is_empty() {
            debug!("empty line");
            break;
        }

        let inserted = tree.insert(value.to_string());
        debug!(value, inserted, "read line");

        render(&tree, &mut output, settings)?;
        writeln!(output)?;
    }

    info!(len = tree.len(), height = ?tree.height(), "shell finished");
    Ok(tree)
}

/// Writes the pre-order rendering of `tree`, and its node heights if enabled.
pub fn render<T, W>(tree: &OrderedTree<T>, output: &mut W, settings: &Settings) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    writeln!(output, "Pre-order traversal:")?;
    let mut result = Ok(());
    tree.traverse_pre_order_with_depth(|value, depth| {
        if result.is_ok() {
            let indent: String = std::iter::repeat(settings.marker).take(depth).collect();
            result = writeln!(output, "{}{}", indent, value);
        }
    });
    result?;

    if settings.show_heights {
        writeln!(output, "Node height values:")?;
        let mut result = Ok(());
        tree.traverse_pre_order_with_height(|value, height| {
            if result.is_ok() {
                result = writeln!(output, "{}: {}", value, height);
            }
        });
        result?;
    }

    Ok(())
}

/// Strips a trailing `\n` or `\r\n`, keeping any other whitespace.
fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
