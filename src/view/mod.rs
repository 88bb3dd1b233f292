pub mod folder;
pub mod panels;
pub mod tree;

pub use folder::FolderView;
pub use tree::TreeView;
