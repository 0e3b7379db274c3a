//! Command specification shapes
//!
//! A configured entry is either a plain string or a structured table. Plain
//! strings split into two cases at load time: a bare name (no whitespace,
//! usually a package-script name) and a full shell-command line. Structured
//! entries add a display-name override and the `trap` flag that suppresses
//! file-argument injection.
//!
//! The distinction is representational; resolution treats names and command
//! lines uniformly (the whole raw string is offered to the manifest lookup
//! first). What matters downstream is the title, the raw command line and the
//! trap flag, exposed as accessors here.

use serde::Deserialize;
use serde::de::Deserializer;

/// A single configured command entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSpec {
    /// A bare script or binary name without arguments
    Name(String),
    /// A shell-command line: binary followed by arguments and/or a template
    Command(String),
    /// A structured entry with optional title override and trap flag
    Structured(StructuredCommand),
}

/// The structured form of a command entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StructuredCommand {
    /// Display name override for reporting
    #[serde(default)]
    pub name: Option<String>,

    /// The command line to run; absence makes the entry fail at run time
    #[serde(default)]
    pub command: Option<String>,

    /// Suppress all file-argument injection for this entry
    #[serde(default)]
    pub trap: bool,
}

impl CommandSpec {
    /// Display title: the structured `name` when given, else the raw command
    /// string or name.
    pub fn title(&self) -> &str {
        match self {
            CommandSpec::Name(raw) | CommandSpec::Command(raw) => raw,
            CommandSpec::Structured(entry) => entry
                .name
                .as_deref()
                .or(entry.command.as_deref())
                .unwrap_or_default(),
        }
    }

    /// The raw command line to resolve, when the entry has a usable one.
    ///
    /// A structured entry with a missing or blank `command` returns `None`;
    /// that entry still builds a task, which reports the misconfiguration
    /// when executed.
    pub fn command_line(&self) -> Option<&str> {
        match self {
            CommandSpec::Name(raw) | CommandSpec::Command(raw) => Some(raw),
            CommandSpec::Structured(entry) => entry
                .command
                .as_deref()
                .filter(|command| !command.trim().is_empty()),
        }
    }

    /// Whether file arguments are suppressed for this entry.
    pub fn trap(&self) -> bool {
        match self {
            CommandSpec::Structured(entry) => entry.trap,
            _ => false,
        }
    }
}

// The on-disk shape: a string or a table. Strings are classified by
// whitespace into Name vs Command when loaded.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSpec {
    Line(String),
    Detailed(StructuredCommand),
}

impl<'de> Deserialize<'de> for CommandSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawSpec::deserialize(deserializer)? {
            RawSpec::Line(raw) => {
                if raw.trim().contains(char::is_whitespace) {
                    CommandSpec::Command(raw)
                } else {
                    CommandSpec::Name(raw)
                }
            }
            RawSpec::Detailed(entry) => CommandSpec::Structured(entry),
        })
    }
}

/// One command or a list of commands, as users may write either.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CommandList {
    /// A single entry
    Single(CommandSpec),
    /// An ordered list of entries
    Many(Vec<CommandSpec>),
}

impl CommandList {
    /// Flatten to an ordered vector; a single entry becomes a length-1 list.
    pub fn to_vec(&self) -> Vec<CommandSpec> {
        match self {
            CommandList::Single(spec) => vec![spec.clone()],
            CommandList::Many(specs) => specs.clone(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            CommandList::Single(_) => 1,
            CommandList::Many(specs) => specs.len(),
        }
    }

    /// Whether no entries are configured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
