//! REPL (Read-Eval-Print Loop) for the Monkey interpreter
//!
//! Each input is parsed; inputs with parse diagnostics are reported and not
//! evaluated. Everything else is evaluated against one environment that
//! lives as long as the session, so bindings carry over between inputs.
//! Input continues over several lines while brackets are left open.

use miette::Diagnostic;
use monkey_interpreter::{InterpreterSession, Value, builtins, eval};
use monkey_parser::{Statement, parse};
use rustyline::{DefaultEditor, error::ReadlineError};
use std::path::PathBuf;
use thiserror::Error;

const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

const MULTI_LINE_EXAMPLE: &str = r#"  let add = fn(a, b) {   # an open bracket continues the input
      a + b
  };                     # closing it evaluates everything
  An empty line submits the input as it stands."#;

/// Errors that can occur in the REPL
#[derive(Debug, Error, Diagnostic)]
pub enum ReplError {
    #[error("Readline error: {source}")]
    #[diagnostic(code(monkey::repl::readline))]
    Readline {
        #[from]
        source: ReadlineError,
    },

    #[error("REPL command error: {message}")]
    #[diagnostic(code(monkey::repl::command), help("type :help for available commands"))]
    Command { message: String },
}

/// REPL configuration options
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string for input
    pub prompt: String,

    /// Prompt shown while brackets are still open
    pub continuation_prompt: String,

    /// History file path
    pub history_file: Option<PathBuf>,

    /// Enable history persistence
    pub persist_history: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">> ".to_string(),
            continuation_prompt: ".. ".to_string(),
            history_file: Some(PathBuf::from(".monkey_history")),
            persist_history: true,
        }
    }
}

/// REPL session statistics
#[derive(Debug, Clone, Default)]
pub struct ReplStats {
    /// Number of inputs evaluated
    pub inputs_evaluated: usize,

    /// Number of inputs rejected by the parser
    pub parse_failures: usize,

    /// Number of inputs that evaluated to an error
    pub runtime_errors: usize,

    /// Total REPL commands executed
    pub commands_executed: usize,
}

/// Result of evaluating a line in the REPL
#[derive(Debug)]
pub enum ReplResult {
    /// Evaluated value, to be printed with its `Inspect` text
    Value { value: Value },

    /// The input ended with a `let`; nothing is printed
    Binding { name: String },

    /// The parser reported problems; the input was not evaluated
    ParseErrors { messages: Vec<String> },

    /// Executed a REPL command
    Command { message: String },

    /// Empty line
    Empty,

    /// Exit request
    Exit,
}

/// REPL session that maintains state across evaluations
pub struct ReplSession {
    /// Interpreter state shared by every input
    session: InterpreterSession,

    /// REPL configuration
    config: ReplConfig,

    /// Session statistics
    stats: ReplStats,
}

impl ReplSession {
    /// Create a new REPL session with default configuration
    pub fn new() -> Self {
        Self::with_config(ReplConfig::default())
    }

    /// Create a new REPL session with custom configuration
    pub fn with_config(config: ReplConfig) -> Self {
        Self {
            session: InterpreterSession::new(),
            config,
            stats: ReplStats::default(),
        }
    }

    /// Start the REPL main loop
    pub fn run(&mut self) -> Result<(), ReplError> {
        let mut editor = DefaultEditor::new()?;
        self.load_history(&mut editor);
        self.print_welcome();

        while let Some(input) = self.read_input(&mut editor)? {
            match self.evaluate_line(&input) {
                Ok(ReplResult::Exit) => break,
                Ok(result) => self.display_result(result),
                Err(error) => eprintln!("{:?}", miette::Report::new(error)),
            }
        }

        self.save_history(&mut editor)?;
        Ok(())
    }

    /// Read one complete input, spanning several lines while brackets are open
    fn read_input(&self, editor: &mut DefaultEditor) -> Result<Option<String>, ReplError> {
        let mut complete_input = String::new();

        loop {
            let prompt = if complete_input.is_empty() {
                &self.config.prompt
            } else {
                &self.config.continuation_prompt
            };

            match editor.readline(prompt) {
                Ok(line) => {
                    if complete_input.is_empty() && line.trim().is_empty() {
                        return Ok(Some(String::new()));
                    }

                    if self.accept_line(&mut complete_input, &line) {
                        editor.add_history_entry(complete_input.as_str())?;
                        return Ok(Some(complete_input));
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Abandon the current input and start over
                    println!("^C");
                    return Ok(Some(String::new()));
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(ReplError::Readline { source: err }),
            }
        }
    }

    /// Append a line to the pending input; true once it should be evaluated.
    /// An empty continuation line submits whatever has been typed so far.
    fn accept_line(&self, pending: &mut String, line: &str) -> bool {
        if !pending.is_empty() {
            if line.trim().is_empty() {
                return true;
            }
            pending.push('\n');
        }
        pending.push_str(line);
        self.is_input_complete(pending)
    }

    /// Check whether every bracket opened outside a string has been closed.
    /// An open string does not hold the input back: it runs to the end.
    fn is_input_complete(&self, input: &str) -> bool {
        let mut brace_count: i32 = 0;
        let mut bracket_count: i32 = 0;
        let mut paren_count: i32 = 0;
        let mut in_string = false;

        for ch in input.chars() {
            match ch {
                '"' => in_string = !in_string,
                '{' if !in_string => brace_count += 1,
                '}' if !in_string => brace_count -= 1,
                '[' if !in_string => bracket_count += 1,
                ']' if !in_string => bracket_count -= 1,
                '(' if !in_string => paren_count += 1,
                ')' if !in_string => paren_count -= 1,
                _ => {}
            }
        }

        // Surplus closing brackets are left for the parser to report
        brace_count <= 0 && bracket_count <= 0 && paren_count <= 0
    }

    /// Evaluate one complete input
    pub fn evaluate_line(&mut self, line: &str) -> Result<ReplResult, ReplError> {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return Ok(ReplResult::Empty);
        }

        if trimmed.starts_with(':') {
            return self.execute_command(trimmed);
        }

        let (program, errors) = parse(line);
        if !errors.is_empty() {
            self.stats.parse_failures += 1;
            return Ok(ReplResult::ParseErrors { messages: errors });
        }

        let value = eval(&program, self.session.environment());
        self.stats.inputs_evaluated += 1;

        if value.is_error() {
            self.stats.runtime_errors += 1;
            return Ok(ReplResult::Value { value });
        }

        match program.statements.last() {
            Some(Statement::Let(let_stmt)) => Ok(ReplResult::Binding {
                name: let_stmt.name.name.clone(),
            }),
            _ => Ok(ReplResult::Value { value }),
        }
    }

    /// Execute a REPL command
    fn execute_command(&mut self, command: &str) -> Result<ReplResult, ReplError> {
        self.stats.commands_executed += 1;

        let parts: Vec<&str> = command.split_whitespace().collect();
        let Some(name) = parts.first() else {
            return Ok(ReplResult::Empty);
        };

        match *name {
            ":help" | ":h" => Ok(ReplResult::Command {
                message: self.help_message(),
            }),

            ":env" | ":vars" => Ok(ReplResult::Command {
                message: self.format_environment(),
            }),

            ":reset" | ":clear" => {
                self.session.reset();
                Ok(ReplResult::Command {
                    message: "Environment reset".to_string(),
                })
            }

            ":stats" => Ok(ReplResult::Command {
                message: self.format_stats(),
            }),

            ":quit" | ":q" | ":exit" => Ok(ReplResult::Exit),

            unknown => Err(ReplError::Command {
                message: format!("Unknown command: {unknown}. Type :help for available commands."),
            }),
        }
    }

    /// Display the result of evaluation
    fn display_result(&self, result: ReplResult) {
        match result {
            ReplResult::Value { value } => println!("{value}"),

            ReplResult::ParseErrors { messages } => print!("{}", format_parse_errors(&messages)),

            ReplResult::Command { message } => println!("{message}"),

            ReplResult::Binding { .. } | ReplResult::Empty | ReplResult::Exit => {}
        }
    }

    fn print_welcome(&self) {
        println!(
            "Hello {}! This is the Monkey programming language!",
            user_name()
        );
        println!("Feel free to type in commands (:help for help, :quit to exit)");
    }

    fn load_history(&self, editor: &mut DefaultEditor) {
        if !self.config.persist_history {
            return;
        }
        if let Some(history_file) = &self.config.history_file {
            // A missing history file just means a first session
            if let Err(err) = editor.load_history(history_file) {
                log::debug!("no history loaded from {}: {}", history_file.display(), err);
            }
        }
    }

    fn save_history(&self, editor: &mut DefaultEditor) -> Result<(), ReplError> {
        if self.config.persist_history {
            if let Some(history_file) = &self.config.history_file {
                editor.save_history(history_file)?;
            }
        }
        Ok(())
    }

    fn help_message(&self) -> String {
        let builtin_names: Vec<&str> = builtins::names().collect();

        format!(
            r#"Monkey REPL Commands:
  :help, :h           Show this help message
  :env, :vars         List the bindings of this session
  :reset, :clear      Forget every binding
  :stats              Show session statistics
  :quit, :q, :exit    Exit the REPL

Built-in functions: {}

Multi-line input:
{}

Use Ctrl+C to abandon an input, Ctrl+D to exit."#,
            builtin_names.join(", "),
            MULTI_LINE_EXAMPLE
        )
    }

    fn format_environment(&self) -> String {
        let vars = self.session.environment().current_scope_vars();
        if vars.is_empty() {
            return "No bindings defined".to_string();
        }

        let mut lines = vec!["Bindings:".to_string()];
        for (name, value) in vars {
            lines.push(format!("  {name}: {} = {value}", value.type_name()));
        }
        lines.join("\n")
    }

    fn format_stats(&self) -> String {
        format!(
            r#"Session Statistics:
  Inputs evaluated: {}
  Parse failures: {}
  Runtime errors: {}
  Commands executed: {}"#,
            self.stats.inputs_evaluated,
            self.stats.parse_failures,
            self.stats.runtime_errors,
            self.stats.commands_executed
        )
    }
}

impl Default for ReplSession {
    fn default() -> Self {
        Self::new()
    }
}

/// The error block printed for input the parser rejected
pub fn format_parse_errors(messages: &[String]) -> String {
    let mut output = String::from(MONKEY_FACE);
    output.push_str("Woops! We ran into some monkey business here!\n");
    output.push_str(" parser errors:\n");
    for message in messages {
        output.push('\t');
        output.push_str(message);
        output.push('\n');
    }
    output
}

fn user_name() -> String {
    std::env::var("USER")
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "there".to_string())
}
