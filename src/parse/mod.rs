pub mod script_parser;

pub use script_parser::{ScriptError, ScriptStep, parse_script};
