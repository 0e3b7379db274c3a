//! Template expansion against a file list.
//!
//! Turns a parsed [`Template`] plus an ordered file list into argument
//! tokens. The rules are argv-shape-exact because downstream callers (and
//! their tests) assert on the precise token sequence:
//!
//! - no region at all: whitespace-tokenize the whole template, append the
//!   file list verbatim
//! - a repeat region yields one token per file, scaffolding included,
//!   internal whitespace preserved
//! - a verbatim region yields its bracket text once; if no region in the
//!   whole template repeated, the file list is appended at the end
//! - literal runs between regions are whitespace-tokenized
//! - quirk: when the final region repeated and nothing but (at most)
//!   whitespace follows it, the always-emitted trailing literal shows up as
//!   one empty argument token; kept for compatibility

use crate::parser::{Part, Placeholder, Segment, Template};
use menshen_core::path::PathParts;

impl Template {
    /// Expand the template against `files`, producing argument tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use menshen_template::parser::Template;
    ///
    /// let files = vec!["file1.js".to_string()];
    ///
    /// let argv = Template::parse("add").expand(&files);
    /// assert_eq!(argv, ["add", "file1.js"]);
    ///
    /// let argv = Template::parse("<--out=<filename>.tar.gz>").expand(&files);
    /// assert_eq!(argv, ["--out=file1.tar.gz", ""]);
    /// ```
    pub fn expand(&self, files: &[String]) -> Vec<String> {
        if !self.has_region() {
            return self.expand_plain(files);
        }

        let mut args = Vec::new();
        let mut any_repeat = false;
        let mut after_repeat = false;
        let last = self.segments().len() - 1;

        for (idx, segment) in self.segments().iter().enumerate() {
            match segment {
                Segment::Literal(text) => {
                    let mut tokens = text.split_whitespace().peekable();
                    if tokens.peek().is_none() {
                        if idx == last && after_repeat {
                            args.push(String::new());
                        }
                    } else {
                        args.extend(tokens.map(str::to_string));
                    }
                }
                Segment::Repeat(parts) => {
                    for file in files {
                        args.push(render(parts, file));
                    }
                    any_repeat = true;
                    after_repeat = true;
                }
                Segment::Verbatim(inner) => {
                    args.push(format!("<{inner}>"));
                    after_repeat = false;
                }
            }
        }

        if !any_repeat {
            args.extend(files.iter().cloned());
        }
        args
    }

    /// The non-templated path: plain tokens plus the file list.
    fn expand_plain(&self, files: &[String]) -> Vec<String> {
        let mut args: Vec<String> = self
            .segments()
            .iter()
            .filter_map(|segment| match segment {
                Segment::Literal(text) => Some(text.split_whitespace()),
                _ => None,
            })
            .flatten()
            .map(str::to_string)
            .collect();
        args.extend(files.iter().cloned());
        args
    }
}

/// Render one region for one file, substituting placeholders from the file's
/// path decomposition.
fn render(parts: &[Part], file: &str) -> String {
    let decomposed = PathParts::decompose(file);
    let mut out = String::new();
    for part in parts {
        match part {
            Part::Text(text) => out.push_str(text),
            Part::Placeholder(placeholder) => out.push_str(match placeholder {
                Placeholder::Full => &decomposed.full,
                Placeholder::Dir => &decomposed.dir,
                Placeholder::Base => &decomposed.base,
                Placeholder::Ext => &decomposed.ext,
            }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn expand(template: &str, names: &[&str]) -> Vec<String> {
        Template::parse(template).expand(&files(names))
    }

    #[test]
    fn test_no_template_appends_files() {
        assert_eq!(expand("add", &["test.js"]), ["add", "test.js"]);
        assert_eq!(
            expand("add --verbose", &["a.js", "b.js"]),
            ["add", "--verbose", "a.js", "b.js"]
        );
    }

    #[test]
    fn test_empty_template_yields_files_only() {
        assert_eq!(expand("", &["a.js", "b.js"]), ["a.js", "b.js"]);
        assert!(expand("", &[]).is_empty());
    }

    #[test]
    fn test_full_region_repeats_per_file() {
        assert_eq!(
            expand("<full> --fix", &["src/a.js", "b.js"]),
            ["src/a.js", "b.js", "--fix"]
        );
    }

    #[test]
    fn test_empty_brackets_substitute_full() {
        assert_eq!(expand("<> --fix", &["a.js"]), ["a.js", "--fix"]);
    }

    #[test]
    fn test_component_placeholders() {
        assert_eq!(expand("<path> end", &["src/a.js"]), ["src", "end"]);
        assert_eq!(expand("<filename> end", &["src/a.js"]), ["a", "end"]);
        assert_eq!(expand("<extension> end", &["src/a.js"]), ["js", "end"]);
    }

    #[test]
    fn test_scaffolded_region_builds_one_token_per_file() {
        assert_eq!(
            expand("<--out=<filename>.tar.gz> -v", &["file1.js", "file2.js"]),
            ["--out=file1.tar.gz", "--out=file2.tar.gz", "-v"]
        );
    }

    #[test]
    fn test_trailing_expansion_emits_empty_token() {
        // the documented quirk: a final repeat region with nothing after it
        assert_eq!(
            expand("<--out=<filename>.tar.gz>", &["file1.js"]),
            ["--out=file1.tar.gz", ""]
        );
        assert_eq!(expand("<full>", &["a.js", "b.js"]), ["a.js", "b.js", ""]);
    }

    #[test]
    fn test_whitespace_only_tail_still_emits_empty_token() {
        assert_eq!(expand("<full> ", &["a.js"]), ["a.js", ""]);
    }

    #[test]
    fn test_trailing_literal_suppresses_empty_token() {
        assert_eq!(expand("<full> --fix", &["a.js"]), ["a.js", "--fix"]);
    }

    #[test]
    fn test_unrecognized_region_falls_back_to_append() {
        assert_eq!(
            expand("<personal>", &["a.js", "b.js"]),
            ["<personal>", "a.js", "b.js"]
        );
    }

    #[test]
    fn test_unrecognized_region_keeps_surrounding_tokens() {
        assert_eq!(
            expand("--before <personal> --after", &["a.js"]),
            ["--before", "<personal>", "--after", "a.js"]
        );
    }

    #[test]
    fn test_mixed_verbatim_then_repeat_does_not_append() {
        assert_eq!(
            expand("<personal> <full>", &["a.js"]),
            ["<personal>", "a.js", ""]
        );
    }

    #[test]
    fn test_region_internal_whitespace_is_one_token() {
        assert_eq!(
            expand("<--ext=<extension> <full>>!", &["lib/a.js"]),
            ["--ext=js lib/a.js", "!"]
        );
    }

    #[test]
    fn test_zero_files_expand_to_zero_tokens() {
        assert_eq!(expand("<full> --fix", &[]), ["--fix"]);
        assert_eq!(expand("<full>", &[]), [""]);
    }

    #[test]
    fn test_region_order_follows_file_order() {
        assert_eq!(
            expand("<<filename>.min>", &["a.js", "b.js", "c.js"]),
            ["a.min", "b.min", "c.min", ""]
        );
    }
}
