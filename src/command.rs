//! Toolbar commands and their keyboard shortcuts.

use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A markdown formatting command issued from the toolbar or a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "italic")]
    Italic,
    #[serde(rename = "heading")]
    Heading,
    #[serde(rename = "quote")]
    Quote,
    #[serde(rename = "code")]
    Code,
    #[serde(rename = "link")]
    Link,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "ul")]
    UnorderedList,
    #[serde(rename = "ol")]
    OrderedList,
}

impl Command {
    /// Every command, in toolbar order.
    pub const ALL: [Self; 9] = [
        Self::Bold,
        Self::Italic,
        Self::Heading,
        Self::Quote,
        Self::Code,
        Self::Link,
        Self::Image,
        Self::UnorderedList,
        Self::OrderedList,
    ];

    /// The identifier a toolbar control carries for this command.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Heading => "heading",
            Self::Quote => "quote",
            Self::Code => "code",
            Self::Link => "link",
            Self::Image => "image",
            Self::UnorderedList => "ul",
            Self::OrderedList => "ol",
        }
    }

    /// Whether the command has to collect a URL and display text first.
    pub const fn needs_input(self) -> bool {
        matches!(self, Self::Link | Self::Image)
    }

    /// Map a key press to a command.
    ///
    /// Ctrl (or Cmd) with `b`, `i`, `k`, `h` or `q` selects bold, italic,
    /// link, heading and quote. Anything else is left to the text field.
    pub fn from_shortcut(key: KeyEvent) -> Option<Self> {
        if !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
        {
            return None;
        }
        match key.code {
            KeyCode::Char('b') => Some(Self::Bold),
            KeyCode::Char('i') => Some(Self::Italic),
            KeyCode::Char('k') => Some(Self::Link),
            KeyCode::Char('h') => Some(Self::Heading),
            KeyCode::Char('q') => Some(Self::Quote),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A toolbar identifier that names no known command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command `{0}`")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.id() == s)
            .ok_or_else(|| UnknownCommand(s.to_owned()))
    }
}
