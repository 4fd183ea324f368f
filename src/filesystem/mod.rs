//! In-memory filesystem the shell navigates.
//!
//! A fixed tree of directories and files, absolute locations within it, and
//! the recursive renderer behind `tree`. Nothing here touches the real disk.

pub mod fixture;
mod location;
mod node;
mod render;
mod tree;

pub use location::{Location, ROOT_MARKER};
pub use node::{Node, Protection};
pub use render::RenderedTree;
pub use tree::FileTree;
