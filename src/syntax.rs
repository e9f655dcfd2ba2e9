/// Introduces a directive: `$name`.
pub const MARKER: char = '$';
/// Opens an argument group.
pub const ARGUMENT_OPEN: char = '[';
/// Closes an argument group.
pub const ARGUMENT_CLOSE: char = ']';
/// Separates argument slots inside a group.
pub const ARGUMENT_SEPARATOR: char = ';';

/// Syntactic class of a single input character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Marker,
    Open,
    Close,
    Separator,
    Literal,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        match c {
            MARKER => CharClass::Marker,
            ARGUMENT_OPEN => CharClass::Open,
            ARGUMENT_CLOSE => CharClass::Close,
            ARGUMENT_SEPARATOR => CharClass::Separator,
            _ => CharClass::Literal,
        }
    }
}

/// Which characters end a literal run.
///
/// Top-level text only stops at the marker; inside an argument group the
/// brackets and the separator are significant too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    #[default]
    Text,
    Argument,
}

impl ScanMode {
    pub fn is_stop(self, c: char) -> bool {
        match (self, CharClass::of(c)) {
            (_, CharClass::Marker) => true,
            (ScanMode::Argument, CharClass::Literal) => false,
            (ScanMode::Argument, _) => true,
            (ScanMode::Text, _) => false,
        }
    }
}
