use crate::cursor::count_newlines;
use crate::error::Error;
use crate::syntax::{ARGUMENT_CLOSE, ARGUMENT_OPEN, MARKER};

/// Content of the root node; it does not come from the input.
pub const PROGRAM_MARKER: &str = "#program";

/// Kind of a parsed node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Literal text
    String,
    /// Marker plus identifier name: `$get`
    Ident,
    /// Bracketed argument group; `closed` is false when the input ended first
    Argument { closed: bool },
    /// `;` between two argument slots
    Separator,
    /// Root of a parsed script
    Program,
    /// Explicit end marker for streaming callers; the tree builder never emits it
    EndOfInput,
}

/// Where a node sits in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset of the first byte
    pub offset: usize,
    /// 1-based line at `offset`
    pub line: usize,
    /// Length in bytes
    pub length: usize,
    /// Newlines inside the node's text
    pub newlines: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, content: &str) -> Self {
        Self {
            offset,
            line,
            length: content.len(),
            newlines: count_newlines(content),
        }
    }

    /// Byte offset just past the node.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node<'a> {
    pub kind: NodeKind,
    pub content: &'a str,
    pub children: Vec<Node<'a>>,
    pub position: Position,
}

impl<'a> Node<'a> {
    pub fn leaf(kind: NodeKind, content: &'a str, position: Position) -> Self {
        Self {
            kind,
            content,
            children: Vec::new(),
            position,
        }
    }

    /// Identifier name without the marker. `None` for anything but `Ident`.
    pub fn name(&self) -> Option<&'a str> {
        match self.kind {
            NodeKind::Ident => self.content.get(MARKER.len_utf8()..),
            _ => None,
        }
    }

    /// Argument group following an identifier, if it has one.
    pub fn argument(&self) -> Option<&Node<'a>> {
        match self.kind {
            NodeKind::Ident => self
                .children
                .iter()
                .find(|child| matches!(child.kind, NodeKind::Argument { .. })),
            _ => None,
        }
    }

    /// Children of an argument group split at separators.
    ///
    /// `[]` has one empty slot and `[a;]` has two, the second empty.
    pub fn slots(&self) -> Vec<&[Node<'a>]> {
        match self.kind {
            NodeKind::Argument { .. } => self
                .children
                .split(|child| child.kind == NodeKind::Separator)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Visits this node and then every descendant, in source order.
    pub fn walk<F: FnMut(&Node<'a>)>(&self, f: &mut F) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// Rebuilds the source text this node was parsed from.
    pub fn to_source(&self) -> String {
        let mut out = String::with_capacity(self.position.length);
        self.write_source(&mut out);
        out
    }

    fn write_source(&self, out: &mut String) {
        match self.kind {
            NodeKind::Program => {}
            NodeKind::Argument { closed } => {
                // the group's content spans its children; only the brackets are its own
                out.push_str(&self.content[..ARGUMENT_OPEN.len_utf8()]);
                for child in &self.children {
                    child.write_source(out);
                }
                if closed {
                    let close = self.content.len() - ARGUMENT_CLOSE.len_utf8();
                    out.push_str(&self.content[close..]);
                }
                return;
            }
            _ => out.push_str(self.content),
        }
        for child in &self.children {
            child.write_source(out);
        }
    }

    /// Malformed but tolerated constructs below this node, in source order.
    pub fn issues(&self) -> Vec<Error> {
        let mut issues = Vec::new();
        self.walk(&mut |node| {
            let Position { offset, line, .. } = node.position;
            match node.kind {
                NodeKind::Argument { closed: false } => {
                    issues.push(Error::UnterminatedArgument { offset, line })
                }
                NodeKind::Ident if node.name().is_none_or(str::is_empty) => {
                    issues.push(Error::EmptyIdentifier { offset, line })
                }
                _ => {}
            }
        });
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: usize, content: &str) -> Position {
        Position::new(offset, 1, content)
    }

    #[test]
    fn test_position_counts_newlines() {
        let position = Position::new(4, 2, "a\nb\n");
        assert_eq!(position.length, 4);
        assert_eq!(position.newlines, 2);
        assert_eq!(position.end(), 8);
    }

    #[test]
    fn test_ident_name() {
        let ident = Node::leaf(NodeKind::Ident, "$get", at(0, "$get"));
        assert_eq!(ident.name(), Some("get"));

        let empty = Node::leaf(NodeKind::Ident, "$", at(0, "$"));
        assert_eq!(empty.name(), Some(""));

        let text = Node::leaf(NodeKind::String, "get", at(0, "get"));
        assert_eq!(text.name(), None);
    }

    #[test]
    fn test_slots_split_on_separator() {
        let group = Node {
            kind: NodeKind::Argument { closed: true },
            content: "[a;]",
            children: vec![
                Node::leaf(NodeKind::String, "a", at(1, "a")),
                Node::leaf(NodeKind::Separator, ";", at(2, ";")),
            ],
            position: at(0, "[a;]"),
        };

        let slots = group.slots();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].len(), 1);
        assert!(slots[1].is_empty());
    }

    #[test]
    fn test_walk_visits_nested_nodes() {
        let program = crate::parser::build("a $f[b;$g[c]] d");
        let mut kinds = Vec::new();
        program.walk(&mut |node| kinds.push(node.kind));

        assert_eq!(kinds.len(), 10);
        assert_eq!(kinds[0], NodeKind::Program);
        assert_eq!(
            kinds.iter().filter(|k| matches!(k, NodeKind::Argument { .. })).count(),
            2
        );
    }

    #[test]
    fn test_to_source_of_unclosed_group() {
        let ident = Node {
            kind: NodeKind::Ident,
            content: "$get",
            children: vec![Node {
                kind: NodeKind::Argument { closed: false },
                content: "[data",
                children: vec![Node::leaf(NodeKind::String, "data", at(5, "data"))],
                position: at(4, "[data"),
            }],
            position: at(0, "$get"),
        };

        assert_eq!(ident.to_source(), "$get[data");
        assert_eq!(ident.issues().len(), 1);
    }
}
