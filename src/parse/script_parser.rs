use crate::model::task::TaskId;
use crate::ops::task_list::Intent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{verb}'")]
    UnknownVerb { line: usize, verb: String },
    #[error("line {line}: '{verb}' needs a task id")]
    MissingId { line: usize, verb: String },
    #[error("line {line}: invalid task id '{value}'")]
    InvalidId { line: usize, value: String },
}

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// Applied as-is
    Intent(Intent),
    /// Append text to the row's current draft (keystrokes into the edit field)
    Type(TaskId, String),
}

/// Parse an intent script.
///
/// One command per line; blank lines and `#` comments are skipped. Text
/// arguments are everything after the single space that follows the verb
/// (or the id), kept verbatim.
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
            continue;
        }
        let raw = raw.trim_start();
        let (verb, rest) = split_word(raw);

        let step = match verb {
            "add" => ScriptStep::Intent(Intent::AddTask(rest.to_string())),
            "toggle" | "edit" | "save" | "discard" | "delete" | "draft" | "type" => {
                let (id_str, text) = split_word(rest);
                let id = parse_id(id_str, verb, line)?;
                let text = text.to_string();
                match verb {
                    "toggle" => ScriptStep::Intent(Intent::ToggleComplete(id)),
                    "edit" => ScriptStep::Intent(Intent::EnterEdit(id)),
                    "save" => ScriptStep::Intent(Intent::SaveEdit(id)),
                    "discard" => ScriptStep::Intent(Intent::DiscardEdit(id)),
                    "delete" => ScriptStep::Intent(Intent::DeleteTask(id)),
                    "draft" => ScriptStep::Intent(Intent::ChangeDraft(id, text)),
                    _ => ScriptStep::Type(id, text),
                }
            }
            _ => {
                return Err(ScriptError::UnknownVerb {
                    line,
                    verb: verb.to_string(),
                });
            }
        };
        steps.push(step);
    }
    Ok(steps)
}

/// Split off the first space-delimited word. The remainder loses exactly one
/// separating space.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (s, ""),
    }
}

fn parse_id(s: &str, verb: &str, line: usize) -> Result<TaskId, ScriptError> {
    if s.is_empty() {
        return Err(ScriptError::MissingId {
            line,
            verb: verb.to_string(),
        });
    }
    s.trim_start_matches('#')
        .parse::<u64>()
        .map(TaskId)
        .map_err(|_| ScriptError::InvalidId {
            line,
            value: s.to_string(),
        })
}
