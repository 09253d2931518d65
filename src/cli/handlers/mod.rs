use std::io::Read;

use tracing::{debug, info};

use crate::cli::commands::*;
use crate::cli::output::{format_list, list_to_json};
use crate::io::config_io;
use crate::io::logging::{self, LogTarget};
use crate::ops::task_list::{Intent, TaskList};
use crate::parse::{ScriptStep, parse_script};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(cli.config.as_deref())?;
    let target = match cli.command {
        None => LogTarget::File,
        Some(_) => LogTarget::Stderr,
    };
    // Logging is best-effort; a read-only data dir must not stop the app
    let _guard = match logging::init_logging(&config.log, cli.log_level.as_deref(), target) {
        Ok(guard) => Some(guard),
        Err(e) => {
            if target == LogTarget::Stderr {
                eprintln!("warning: logging disabled: {}", e);
            }
            None
        }
    };

    match cli.command {
        None => crate::tui::run(&config),
        Some(Commands::Run(args)) => cmd_run(args),
    }
}

// ---------------------------------------------------------------------------
// Script mode
// ---------------------------------------------------------------------------

fn cmd_run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("could not read {}: {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let steps = parse_script(&source)?;
    info!(steps = steps.len(), "running script");
    let list = run_script(steps);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&list_to_json(&list))?);
    } else {
        for line in format_list(&list) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Apply parsed steps to a fresh list, in order
pub fn run_script(steps: Vec<ScriptStep>) -> TaskList {
    let mut list = TaskList::new();
    for step in steps {
        let intent = match step {
            ScriptStep::Intent(intent) => intent,
            ScriptStep::Type(id, text) => match list.draft(id) {
                Some(draft) => Intent::ChangeDraft(id, format!("{}{}", draft, text)),
                None => {
                    debug!(%id, "type into a row that is not editing");
                    continue;
                }
            },
        };
        list.apply(intent);
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(source: &str) -> Vec<String> {
        format_list(&run_script(parse_script(source).unwrap()))
    }

    #[test]
    fn test_type_appends_to_draft() {
        assert_eq!(
            run("add New Task\nedit 1\ntype 1 1\nsave 1\n"),
            vec!["[ ] #1 New Task1"]
        );
    }

    #[test]
    fn test_type_without_edit_is_ignored() {
        assert_eq!(run("add New Task\ntype 1 oops\n"), vec!["[ ] #1 New Task"]);
    }

    #[test]
    fn test_discard_scenario() {
        assert_eq!(
            run("add New Task\nedit 1\ntype 1 testing\ndiscard 1\n"),
            vec!["[ ] #1 New Task"]
        );
    }

    #[test]
    fn test_blank_add_and_blank_save() {
        assert_eq!(run("add    \n"), Vec::<String>::new());
        assert_eq!(
            run("add Title\nedit 1\ndraft 1    \nsave 1\n"),
            vec!["[ ] #1    "]
        );
    }
}
