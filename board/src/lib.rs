//! Terminal frontend for the comment board.
//!
//! Each invocation mounts a `CommentBoard` against the configured API,
//! applies at most one mutation, and prints the resulting board.

pub mod app;
pub mod cli;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod render;
pub mod transport;

pub use app::{execute, execute_with, Report};
pub use cli::{Cli, Command};
pub use transport::ReqwestTransport;
