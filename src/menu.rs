//! The nine-item main menu.

use crate::errors::ExplorerError;
use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;

pub const MENU_HEADER: &str = "==== Console File Explorer ====";
pub const MENU_FOOTER: &str = "---------------------------------";
pub const MENU_PROMPT: &str = "Enter your choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    List,
    ChangeDirectory,
    Create,
    Delete,
    Copy,
    Move,
    Search,
    Permissions,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::List,
        MenuChoice::ChangeDirectory,
        MenuChoice::Create,
        MenuChoice::Delete,
        MenuChoice::Copy,
        MenuChoice::Move,
        MenuChoice::Search,
        MenuChoice::Permissions,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::List => 1,
            MenuChoice::ChangeDirectory => 2,
            MenuChoice::Create => 3,
            MenuChoice::Delete => 4,
            MenuChoice::Copy => 5,
            MenuChoice::Move => 6,
            MenuChoice::Search => 7,
            MenuChoice::Permissions => 8,
            MenuChoice::Exit => 9,
        }
    }

    pub fn from_number(number: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| i64::from(c.number()) == number)
    }

    /// Parse a raw console line; bytes that are not UTF-8 are an `InvalidChoice`.
    pub fn parse_line(line: &OsStr) -> Result<Self, ExplorerError> {
        match line.to_str() {
            Some(text) => text.parse(),
            None => Err(ExplorerError::InvalidChoice(
                line.to_string_lossy().into_owned(),
            )),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::List => "List files in directory",
            MenuChoice::ChangeDirectory => "Change directory",
            MenuChoice::Create => "Create file",
            MenuChoice::Delete => "Delete file",
            MenuChoice::Copy => "Copy file",
            MenuChoice::Move => "Move file",
            MenuChoice::Search => "Search file",
            MenuChoice::Permissions => "File permissions",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Short name used in logs and the audit trail
    pub fn operation(self) -> &'static str {
        match self {
            MenuChoice::List => "list",
            MenuChoice::ChangeDirectory => "change_directory",
            MenuChoice::Create => "create",
            MenuChoice::Delete => "delete",
            MenuChoice::Copy => "copy",
            MenuChoice::Move => "move",
            MenuChoice::Search => "search",
            MenuChoice::Permissions => "permissions",
            MenuChoice::Exit => "exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = ExplorerError;

    /// Parse a menu line. Surrounding whitespace is ignored; anything that is
    /// not an integer between 1 and 9 is an `InvalidChoice`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| ExplorerError::InvalidChoice(s.to_string()))
    }
}

/// The full menu block, one line per entry, framed by header and footer
pub fn render_menu() -> Vec<String> {
    let mut lines = Vec::with_capacity(MenuChoice::ALL.len() + 2);
    lines.push(MENU_HEADER.to_string());
    lines.extend(MenuChoice::ALL.iter().map(|c| c.to_string()));
    lines.push(MENU_FOOTER.to_string());
    lines
}
