//! Command registry.
//!
//! Sub-commands are defined one by one during startup and kept in
//! registration order. `define` hands back a [`CommandHandle`] (an index),
//! which stays valid however much the registry grows afterwards, so a caller
//! can keep customizing the entry until the app is built.
//!
//! The registry is consumed by [`App::build`](crate::app::App::build), which
//! takes its own sorted snapshot.

use std::fmt;
use std::ops::{Index, IndexMut};

use anyhow::Result;

use crate::context::Context;

/// Callback run when the user selects a sub-command.
pub type Action = Box<dyn Fn(&Context<'_>) -> Result<()>>;

/// A single sub-command: name, one-line usage and action, plus whatever
/// extra arguments were attached through its handle.
pub struct CommandDef {
    name: String,
    usage: String,
    action: Action,
    args: Vec<clap::Arg>,
    aliases: Vec<String>,
    hidden: bool,
}

impl CommandDef {
    fn new(name: String, usage: String, action: Action) -> Self {
        Self {
            name,
            usage,
            action,
            args: Vec::new(),
            aliases: Vec::new(),
            hidden: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usage_text(&self) -> &str {
        &self.usage
    }

    pub fn args(&self) -> &[clap::Arg] {
        &self.args
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Replace the one-line usage text.
    pub fn usage(&mut self, usage: impl Into<String>) -> &mut Self {
        self.usage = usage.into();
        self
    }

    /// Attach a flag, option or positional argument.
    pub fn arg(&mut self, arg: clap::Arg) -> &mut Self {
        self.args.push(arg);
        self
    }

    /// Add an alternative invocation name.
    pub fn alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.aliases.push(alias.into());
        self
    }

    /// Keep the command invocable but out of help and completion output.
    pub fn hide(&mut self) -> &mut Self {
        self.hidden = true;
        self
    }

    /// Replace the action.
    pub fn action<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn(&Context<'_>) -> Result<()> + 'static,
    {
        self.action = Box::new(action);
        self
    }

    /// Whether the command declares a positional argument of its own.
    pub(crate) fn has_positionals(&self) -> bool {
        self.args.iter().any(|a| a.is_positional())
    }

    pub(crate) fn invoke(&self, ctx: &Context<'_>) -> Result<()> {
        (self.action)(ctx)
    }
}

impl fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDef")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field("args", &self.args.len())
            .field("aliases", &self.aliases)
            .field("hidden", &self.hidden)
            .finish_non_exhaustive()
    }
}

/// Durable reference to a registered command.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CommandHandle(usize);

impl CommandHandle {
    /// Registration index of the command.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered, append-only collection of command definitions.
#[derive(Debug, Default)]
pub struct Registry {
    commands: Vec<CommandDef>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a sub-command. The returned handle can be used to adjust the
    /// entry further before the app is built.
    ///
    /// Duplicate names are accepted; both entries end up in the app.
    pub fn define<F>(
        &mut self,
        name: impl Into<String>,
        usage: impl Into<String>,
        action: F,
    ) -> CommandHandle
    where
        F: Fn(&Context<'_>) -> Result<()> + 'static,
    {
        let handle = CommandHandle(self.commands.len());
        let cmd = CommandDef::new(name.into(), usage.into(), Box::new(action));
        tracing::trace!(name = %cmd.name, index = handle.0, "defined command");
        self.commands.push(cmd);
        handle
    }

    pub fn get(&self, handle: CommandHandle) -> Option<&CommandDef> {
        self.commands.get(handle.0)
    }

    pub fn command_mut(&mut self, handle: CommandHandle) -> Option<&mut CommandDef> {
        self.commands.get_mut(handle.0)
    }

    /// First command registered under `name`.
    pub fn find(&self, name: &str) -> Option<&CommandDef> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDef> {
        self.commands.iter()
    }

    /// Consume the registry, returning its commands sorted by name.
    /// Equal names keep registration order (`sort_by` is stable).
    pub(crate) fn into_sorted(self) -> Vec<CommandDef> {
        let mut commands = self.commands;
        commands.sort_by(|a, b| a.name.cmp(&b.name));
        commands
    }
}

/// # Panics
///
/// Panics if `handle` was not issued by this registry. [`Registry::get`] is
/// the non-panicking form.
impl Index<CommandHandle> for Registry {
    type Output = CommandDef;

    fn index(&self, handle: CommandHandle) -> &CommandDef {
        &self.commands[handle.0]
    }
}

/// # Panics
///
/// Panics if `handle` was not issued by this registry.
/// [`Registry::command_mut`] is the non-panicking form.
impl IndexMut<CommandHandle> for Registry {
    fn index_mut(&mut self, handle: CommandHandle) -> &mut CommandDef {
        &mut self.commands[handle.0]
    }
}
