use tracing::{debug, trace};

use crate::ast::{Node, NodeKind, PROGRAM_MARKER, Position};
use crate::config::Config;
use crate::cursor::{Cursor, count_newlines, read_literal};
use crate::error::Error;
use crate::grammar;
use crate::scanner::{Balanced, scan_balanced};
use crate::syntax::{ARGUMENT_CLOSE, ARGUMENT_OPEN, CharClass, MARKER, ScanMode};

/// Parses script text into a `Program` tree.
#[derive(Debug, Clone, Default)]
pub struct ScriptParser {
    config: Config,
}

impl ScriptParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse script text, honouring `Config::strict`.
    pub fn parse<'a>(&self, input: &'a str) -> Result<Node<'a>, Error> {
        if self.config.strict {
            grammar::check(input).inspect_err(|e| debug!(error = %e, "strict validation failed"))?;
        }
        Ok(self.build(input))
    }

    /// Build a best-effort tree. Never fails: unclosed groups and unnamed
    /// directives stay in the tree and show up in `Node::issues`.
    pub fn build<'a>(&self, input: &'a str) -> Node<'a> {
        trace!(len = input.len(), "building script tree");

        let mut builder = TreeBuilder {
            source: input,
            cursor: Cursor::new(),
        };
        let children = builder.sequence(input.len(), ScanMode::Text);

        let program = Node {
            kind: NodeKind::Program,
            content: PROGRAM_MARKER,
            children,
            position: Position {
                offset: 0,
                line: 1,
                length: input.len(),
                newlines: count_newlines(input),
            },
        };

        let mut nodes = 0;
        program.walk(&mut |_| nodes += 1);
        trace!(nodes, "built script tree");
        program
    }
}

struct TreeBuilder<'a> {
    source: &'a str,
    cursor: Cursor,
}

impl<'a> TreeBuilder<'a> {
    /// Builds sibling nodes until the cursor reaches `end`.
    fn sequence(&mut self, end: usize, mode: ScanMode) -> Vec<Node<'a>> {
        let mut nodes = Vec::new();

        while self.cursor.offset() < end {
            let rest = &self.source[self.cursor.offset()..end];
            let Some(c) = rest.chars().next() else { break };

            // a bare bracket only opens a nested group inside an argument
            let group = match mode {
                ScanMode::Argument => scan_balanced(rest),
                ScanMode::Text => None,
            };

            let node = match (CharClass::of(c), mode, group) {
                (CharClass::Marker, _, _) => self.directive(end),
                (_, _, Some(group)) => self.argument(group),
                (CharClass::Separator, ScanMode::Argument, _) => {
                    self.leaf(NodeKind::Separator, c.len_utf8())
                }
                // a close bracket the enclosing scan did not pair; keep it as text
                (CharClass::Close, ScanMode::Argument, _) => {
                    self.leaf(NodeKind::String, c.len_utf8())
                }
                _ => {
                    let literal = read_literal(rest, mode);
                    debug_assert!(!literal.is_empty());
                    self.leaf(NodeKind::String, literal.len())
                }
            };
            nodes.push(node);
        }

        nodes
    }

    fn leaf(&mut self, kind: NodeKind, len: usize) -> Node<'a> {
        let start = self.cursor.offset();
        let content = &self.source[start..start + len];
        Node::leaf(kind, content, self.cursor.consume(content))
    }

    /// Steps over brackets, which belong to the enclosing group node.
    fn skip(&mut self, len: usize) {
        let start = self.cursor.offset();
        self.cursor.consume(&self.source[start..start + len]);
    }

    /// `$name`, plus its argument group when a bracket follows immediately.
    fn directive(&mut self, end: usize) -> Node<'a> {
        let start = self.cursor.offset();
        let after_marker = start + MARKER.len_utf8();

        let run = read_literal(&self.source[after_marker..end], ScanMode::Argument);
        let name = match run.find(char::is_whitespace) {
            Some(space) => &run[..space],
            None => run,
        };

        let mut ident = self.leaf(NodeKind::Ident, MARKER.len_utf8() + name.len());
        if let Some(group) = scan_balanced(&self.source[self.cursor.offset()..end]) {
            ident.children.push(self.argument(group));
        }
        ident
    }

    /// Argument group at the cursor. The children cover the text between the
    /// brackets, or everything after the open bracket if it never closes.
    fn argument(&mut self, group: Balanced) -> Node<'a> {
        let start = self.cursor.offset();
        let content = &self.source[start..start + group.len];
        let position = Position::new(start, self.cursor.line(), content);

        self.skip(ARGUMENT_OPEN.len_utf8());

        let inner_end = if group.closed {
            position.end() - ARGUMENT_CLOSE.len_utf8()
        } else {
            debug!(offset = start, line = position.line, "argument group is not closed");
            position.end()
        };
        let children = self.sequence(inner_end, ScanMode::Argument);

        if group.closed {
            self.skip(ARGUMENT_CLOSE.len_utf8());
        }

        Node {
            kind: NodeKind::Argument {
                closed: group.closed,
            },
            content,
            children,
            position,
        }
    }
}

/// Build a best-effort tree with the default configuration.
pub fn build(input: &str) -> Node<'_> {
    ScriptParser::new().build(input)
}
