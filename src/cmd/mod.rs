/*!
Built-in sub-commands of the `jet` binary.

Each module exposes a `register(&mut Registry)` function that defines its
command (plus arguments) through the registry, and an `execute_*` action
returning `anyhow::Result<()>`.

  abort.rs      (hidden: print a message, exit 1 immediately)
  commands.rs   (list the commands of the running app)
  completion.rs (print a shell completion script)
  env.rs        (print an environment variable, fatal if unset)
  format.rs     (table / color helpers for human output)
*/

pub mod abort;
pub mod commands;
pub mod completion;
pub mod env;
pub mod format;

use crate::registry::Registry;

pub use abort::execute_abort;
pub use commands::execute_commands;
pub use completion::execute_completion;
pub use env::execute_env;

/// Define every built-in command. Registration order does not matter; the
/// app sorts them.
pub fn register_builtins(registry: &mut Registry) {
    env::register(registry);
    completion::register(registry);
    commands::register(registry);
    abort::register(registry);
}
