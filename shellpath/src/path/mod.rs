//! Path form conversion.
//!
//! Internally every path is kept in **shell form**: forward-slash separated,
//! no repeated separators, optionally rooted at `/`. Paths are converted to
//! **host form** only when they are handed to the operating system, so code
//! that builds or expands paths works with one syntax on every host.
//!
//! # Host families
//!
//! - **Posix**: host form equals shell form (after collapsing `//`).
//! - **Windows**: a shell path `/c/temp` is the host path `c:\temp`. Paths
//!   without a single-letter first component keep their forward slashes.
//!
//! All conversions are methods on [`PathEnv`], which carries the host family
//! explicitly.
//!
//! # Examples
//!
//! ```
//! use shellpath::path::{HostFamily, PathEnv};
//!
//! let env = PathEnv::new(HostFamily::Windows);
//!
//! let host = env.to_host("/c/build//out");
//! assert_eq!(host, "c:\\build\\out");
//! assert_eq!(env.to_shell(&host), "/c/build/out");
//!
//! assert_eq!(env.basename("/c/build/out/app.exe"), "app.exe");
//! assert_eq!(env.join("/c/build", &["out", "app.exe"]), "/c/build/out/app.exe");
//! ```

mod components;
pub mod convert;
mod join;
mod normalize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use convert::collapse_separators;
pub use types::{HostFamily, PathEnv};
