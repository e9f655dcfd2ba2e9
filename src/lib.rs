//! Parser for script expressions embedded in free-form text.
//!
//! A script is literal text interleaved with directives: `$name`, optionally
//! followed by a bracketed, `;`-separated argument list that may nest further
//! directives and brackets.
//!
//! ```text
//! Hello $get[data;aeee] world
//! ```

pub mod ast;
pub mod config;
pub mod cursor;
pub mod error;
pub mod grammar;
pub mod parser;
pub mod scanner;
pub mod syntax;

pub use ast::{Node, NodeKind, Position};
pub use config::Config;
pub use error::Error;
pub use parser::{ScriptParser, build};
pub use scanner::{Balanced, scan_balanced};
