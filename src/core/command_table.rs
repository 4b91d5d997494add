//! Ordered command registry with prefix dispatch.
//!
//! A typed token resolves to every command owning an alias that starts with
//! it. Exactly one match dispatches; none or several are errors, and an
//! exact alias match does not win over other prefix matches.

use crate::errors::{AppError, AppResult};

/// Action run when a command is dispatched. It only receives the table
/// itself (for `help`); everything else is captured by the closure.
pub type Action<'a> = Box<dyn Fn(&CommandTable<'a>) -> AppResult<()> + 'a>;

pub struct Command<'a> {
    pub names: Vec<&'static str>,
    pub description: &'static str,
    pub usage: &'static str,
    action: Action<'a>,
}

impl Command<'_> {
    pub fn has_prefix(&self, token: &str) -> bool {
        self.names.iter().any(|n| n.starts_with(token))
    }

    pub fn display_names(&self) -> String {
        self.names.join(", ")
    }
}

#[derive(Default)]
pub struct CommandTable<'a> {
    // Vec rather than a map: registration order is the help order
    commands: Vec<Command<'a>>,
}

impl<'a> CommandTable<'a> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command under every alias in `names`.
    ///
    /// Fails with `DuplicateCommand` when an alias is already taken (or
    /// repeated in `names`), or when `names` is empty.
    pub fn register<F>(
        &mut self,
        names: &[&'static str],
        description: &'static str,
        usage: &'static str,
        action: F,
    ) -> AppResult<()>
    where
        F: Fn(&CommandTable<'a>) -> AppResult<()> + 'a,
    {
        if names.is_empty() {
            return Err(AppError::DuplicateCommand(String::new()));
        }

        for (i, name) in names.iter().enumerate() {
            if self.get_by_name(name).is_some() || names[..i].contains(name) {
                return Err(AppError::DuplicateCommand((*name).to_string()));
            }
        }

        self.commands.push(Command {
            names: names.to_vec(),
            description,
            usage,
            action: Box::new(action),
        });
        Ok(())
    }

    /// Every command with an alias starting with `token`, in registration
    /// order. The empty token matches everything.
    pub fn resolve(&self, token: &str) -> Vec<&Command<'a>> {
        self.commands.iter().filter(|c| c.has_prefix(token)).collect()
    }

    /// Resolve `token` to exactly one command.
    pub fn lookup(&self, token: &str) -> AppResult<&Command<'a>> {
        let mut found = self.resolve(token);

        match found.len() {
            0 => Err(AppError::UnknownCommand(token.to_string())),
            1 => Ok(found.remove(0)),
            _ => Err(AppError::AmbiguousCommand {
                token: token.to_string(),
                candidates: found.iter().map(|c| c.display_names()).collect(),
            }),
        }
    }

    pub fn dispatch(&self, token: &str) -> AppResult<()> {
        let cmd = self.lookup(token)?;
        (cmd.action)(self)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Command<'a>> {
        self.commands
            .iter()
            .find(|c| c.names.iter().any(|n| *n == name))
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command<'a>> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Full usage text: flags, then one line per command.
    pub fn render_usage(&self, program: &str, flags: &[(&str, &str)]) -> String {
        let mut out = format!("Usage of {}\n", program);

        out.push_str("\nflags:\n");
        for (name, description) in flags {
            out.push_str(&format!("\t--{}: {}\n", name, description));
        }

        out.push_str("\ncommands:\n");
        for cmd in &self.commands {
            out.push_str(&format!("\t{}: {}\n", cmd.display_names(), cmd.description));
        }

        out
    }

    /// Help block for a single command.
    pub fn render_command_help(cmd: &Command<'_>) -> String {
        format!(
            "{}: {}\n\t{}\n",
            cmd.display_names(),
            cmd.description,
            cmd.usage
        )
    }
}
