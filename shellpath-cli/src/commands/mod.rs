//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `host`, `shell`: convert between shell and host form
//! - `basename`, `dirname`, `join`, `abspath`, `splitext`: path components
//! - `exists`: check that paths exist
//! - `mkdir`: create a directory with its parents
//! - `collect`: expand a collection pattern
//! - `copy_tree`: mirror a directory tree
//! - `remove_all`: delete a directory tree

pub mod collect;
pub mod components;
pub mod convert;
pub mod copy_tree;
pub mod exists;
pub mod mkdir;
pub mod remove_all;

pub use collect::CollectCommand;
pub use components::{
    AbspathCommand, BasenameCommand, DirnameCommand, JoinCommand, SplitextCommand,
};
pub use convert::{HostCommand, ShellCommand};
pub use copy_tree::CopyTreeCommand;
pub use exists::ExistsCommand;
pub use mkdir::MkdirCommand;
pub use remove_all::RemoveAllCommand;
