//! Jet: define sub-commands in a [`Registry`], build an [`App`] from them and
//! run it.
//!
//! ```no_run
//! use jet::{App, Context, Registry};
//!
//! let mut registry = Registry::new();
//! registry.define("build", "build stuff", |_: &Context<'_>| Ok(()));
//! let handle = registry.define("add", "add stuff", |ctx: &Context<'_>| {
//!     if ctx.args().is_empty() {
//!         jet::fatalf!("nothing to add");
//!     }
//!     Ok(())
//! });
//! registry[handle].alias("a");
//!
//! let app = App::build(registry, "app", "an app", "1.0");
//! if let Err(err) = app.run() {
//!     jet::fatal::exit_with(err);
//! }
//! ```

pub mod app;
pub mod cmd;
pub mod completion;
pub mod context;
pub mod fatal;
pub mod registry;
pub mod utils;

pub use app::App;
pub use context::Context;
pub use fatal::Fatal;
pub use registry::{Action, CommandDef, CommandHandle, Registry};
