//! Replay scripts: one host action per line.
//!
//! ```text
//! # comment
//! click <id>
//! key <id> <key-name>
//! toggle <id>
//! expand <id>
//! collapse <id>
//! expand-all
//! collapse-all
//! clear
//! ```

use canopy::{EventResult, Key, KeyParseError, TreeEngine};
use log::debug;
use thiserror::Error;

/// A single scripted host action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Click(String),
    Key(String, Key),
    Toggle(String),
    Expand(String),
    Collapse(String),
    ExpandAll,
    CollapseAll,
    Clear,
}

/// Errors raised while parsing a script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// First word is not a known command
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    /// Wrong number of arguments
    #[error("line {line}: '{command}' expects {expected}")]
    Arguments {
        line: usize,
        command: String,
        expected: &'static str,
    },

    /// Key name could not be parsed
    #[error("line {line}: {source}")]
    Key {
        line: usize,
        #[source]
        source: KeyParseError,
    },
}

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(input: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, raw)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

fn parse_line(line: usize, raw: &str) -> Result<Option<Command>, ScriptError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let arguments = |expected: &'static str| ScriptError::Arguments {
        line,
        command: words[0].to_string(),
        expected,
    };

    let command = match words.as_slice() {
        ["click", id] => Command::Click(id.to_string()),
        ["toggle", id] => Command::Toggle(id.to_string()),
        ["expand", id] => Command::Expand(id.to_string()),
        ["collapse", id] => Command::Collapse(id.to_string()),
        ["key", id, key] => {
            let key = key
                .parse::<Key>()
                .map_err(|source| ScriptError::Key { line, source })?;
            Command::Key(id.to_string(), key)
        }
        ["expand-all"] => Command::ExpandAll,
        ["collapse-all"] => Command::CollapseAll,
        ["clear"] => Command::Clear,
        ["click" | "toggle" | "expand" | "collapse", ..] => return Err(arguments("one node id")),
        ["key", ..] => return Err(arguments("a node id and a key name")),
        ["expand-all" | "collapse-all" | "clear", ..] => return Err(arguments("no arguments")),
        [other, ..] => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
        [] => return Ok(None),
    };
    Ok(Some(command))
}

/// Run one command against the engine.
pub fn apply(tree: &mut TreeEngine, command: &Command) {
    match command {
        Command::Click(id) => tree.handle_click(id),
        Command::Key(id, key) => {
            let result = tree.on_key(id, *key);
            if result == EventResult::Ignored {
                debug!("Key {:?} on '{}' ignored", key, id);
            }
        }
        Command::Toggle(id) => tree.toggle_expand(id),
        Command::Expand(id) => tree.expand(id),
        Command::Collapse(id) => tree.collapse(id),
        Command::ExpandAll => tree.expand_all(),
        Command::CollapseAll => tree.collapse_all(),
        Command::Clear => tree.clear_selection(),
    }
}
