//! Opens university subject folders, and the bookmarks inside them, with the
//! operating system's default application.

pub mod cli;
pub mod config;
pub mod opener;
pub mod subject;

pub use cli::{run, Cli, Commands};
pub use config::Config;
pub use opener::{Opener, Platform, SystemOpener};
pub use subject::{Bookmark, ResolveError, SubjectResolver};
