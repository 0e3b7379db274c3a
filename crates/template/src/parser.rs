//! Parser for the `<...>` argument template grammar.
//!
//! A command string may contain top-level `<...>` regions. Each region is
//! repeated once per file, with recognized placeholders inside it substituted
//! from that file's path decomposition. Brackets nest, so the scanner tracks
//! depth instead of matching the first `>` it sees:
//!
//! - `<full>`: one argument per file, the file's full path
//! - `<--out=<filename>.tar.gz>`: one argument per file, scaffolding kept
//! - `<personal>`: no recognized placeholder, emitted verbatim as one token
//!
//! Parsing never fails. Text that only looks like a template degrades to
//! literal tokens; an unclosed bracket is kept as literal text.
//!
//! # Example
//!
//! ```
//! use menshen_template::parser::{Segment, Template};
//!
//! let template = Template::parse("add");
//! assert!(!template.has_region());
//!
//! let template = Template::parse("<--out=<filename>.tar.gz>");
//! assert!(template.has_region());
//! assert!(matches!(template.segments()[1], Segment::Repeat(_)));
//! ```

/// A placeholder keyword recognized inside a template region.
///
/// Keywords are matched case-sensitively. The empty placeholder `<>` stands
/// for the file's full path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `<full>` or `<>`: the input path, unchanged
    Full,
    /// `<path>`: the directory portion
    Dir,
    /// `<filename>`: the base name without extension
    Base,
    /// `<extension>`: the extension without the leading dot
    Ext,
}

impl Placeholder {
    /// Match a bracket's content against the recognized keywords.
    ///
    /// Returns `None` for anything else, including different casing or
    /// surrounding whitespace.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "" | "full" => Some(Placeholder::Full),
            "path" => Some(Placeholder::Dir),
            "filename" => Some(Placeholder::Base),
            "extension" => Some(Placeholder::Ext),
            _ => None,
        }
    }
}

/// One piece of a repeated region's per-file output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Literal scaffolding inside the region, kept verbatim
    Text(String),
    /// A recognized placeholder substituted per file
    Placeholder(Placeholder),
}

/// One top-level element of a parsed command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A literal run outside any region
    Literal(String),
    /// A `<...>` region containing at least one recognized placeholder,
    /// repeated once per file
    Repeat(Vec<Part>),
    /// A `<...>` region with no recognized placeholder; holds the raw inner
    /// text and is emitted once, brackets included
    Verbatim(String),
}

/// A parsed command template.
///
/// The segment list alternates literal runs and regions and always ends with
/// a literal run, which may be empty. That trailing literal is load-bearing:
/// expansion emits it as an empty argument token when it is empty and the
/// last region performed per-file substitution (a compatibility quirk, see
/// [`Template::expand`](crate::parser::Template::expand)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a command template into segments.
    ///
    /// Scans left to right, tracking bracket depth so nested brackets stay
    /// inside their region. A region whose content is empty or a recognized
    /// keyword, or which contains a nested bracket that is, becomes
    /// [`Segment::Repeat`]; any other region becomes [`Segment::Verbatim`].
    ///
    /// # Example
    ///
    /// ```
    /// use menshen_template::parser::{Part, Placeholder, Segment, Template};
    ///
    /// let template = Template::parse("-o <full> done");
    /// assert_eq!(
    ///     template.segments(),
    ///     &[
    ///         Segment::Literal("-o ".to_string()),
    ///         Segment::Repeat(vec![Part::Placeholder(Placeholder::Full)]),
    ///         Segment::Literal(" done".to_string()),
    ///     ]
    /// );
    /// ```
    pub fn parse(input: &str) -> Self {
        let mut segments = Vec::new();
        let mut last_emit = 0;
        let mut open = 0;
        let mut depth = 0usize;

        for (idx, ch) in input.char_indices() {
            match ch {
                '<' => {
                    if depth == 0 {
                        segments.push(Segment::Literal(input[last_emit..idx].to_string()));
                        open = idx;
                    }
                    depth += 1;
                }
                // a stray '>' outside any region is plain literal text
                '>' if depth > 0 => {
                    depth -= 1;
                    if depth == 0 {
                        segments.push(Self::parse_region(&input[open + 1..idx]));
                        last_emit = idx + 1;
                    }
                }
                _ => {}
            }
        }

        // an unclosed region falls back to literal text, bracket included
        let tail_start = if depth > 0 { open } else { last_emit };
        segments.push(Segment::Literal(input[tail_start..].to_string()));

        Template { segments }
    }

    /// Parse the inside of one top-level region.
    ///
    /// The whole content may itself be a keyword (`<full>`, `<>`); otherwise
    /// nested brackets are scanned, recognized ones become placeholders and
    /// unrecognized ones stay in the scaffolding verbatim. A region without a
    /// single recognized placeholder is not a template at all and is kept for
    /// verbatim emission.
    fn parse_region(inner: &str) -> Segment {
        if let Some(placeholder) = Placeholder::from_keyword(inner) {
            return Segment::Repeat(vec![Part::Placeholder(placeholder)]);
        }

        let mut parts = Vec::new();
        let mut recognized = false;
        let mut last_emit = 0;
        let mut open = 0;
        let mut depth = 0usize;

        for (idx, ch) in inner.char_indices() {
            match ch {
                '<' => {
                    if depth == 0 {
                        open = idx;
                    }
                    depth += 1;
                }
                '>' if depth > 0 => {
                    depth -= 1;
                    if depth == 0 {
                        if let Some(placeholder) = Placeholder::from_keyword(&inner[open + 1..idx])
                        {
                            if open > last_emit {
                                parts.push(Part::Text(inner[last_emit..open].to_string()));
                            }
                            parts.push(Part::Placeholder(placeholder));
                            recognized = true;
                            last_emit = idx + 1;
                        }
                        // unrecognized nested brackets remain scaffolding
                    }
                }
                _ => {}
            }
        }

        if !recognized {
            return Segment::Verbatim(inner.to_string());
        }
        if last_emit < inner.len() {
            parts.push(Part::Text(inner[last_emit..].to_string()));
        }
        Segment::Repeat(parts)
    }

    /// The parsed segment list.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the template contains any top-level `<...>` region.
    ///
    /// Templates without one take the non-templated path: whitespace
    /// tokenization plus a trailing file list.
    pub fn has_region(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| !matches!(segment, Segment::Literal(_)))
    }
}
