mod directory;
mod filesystem;
mod launcher;
#[cfg(test)]
pub(crate) mod memory;
mod resolver;

pub use directory::{read_directory, sort_entries};
pub use filesystem::{FileSystem, LocalFs};
pub use launcher::{Launcher, SystemLauncher};
pub use resolver::{display_name, PathResolver};
