//! CLI commands.

mod serve;

pub(crate) use serve::ServeArgs;
