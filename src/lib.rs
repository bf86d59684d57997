//! binup - Self-updating support for release binaries.
//!
//! binup compares the running build against the latest GitHub release,
//! asks before upgrading, and swaps the new binary into place.
//!
//! # Modules
//!
//! - [`build_info`] - Version, commit and date of the running build
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Release source configuration
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Confirmation prompts and terminal output
//! - [`updates`] - Version comparison, release lookup and installation
//!
//! # Example
//!
//! ```
//! use binup::updates::{ReleaseInfo, Version};
//!
//! let release = ReleaseInfo::from_tag("v1.3.153").unwrap();
//! assert_eq!(release.tag_prefix, "v");
//! assert!(Version::parse("1.3.153-dev+build").unwrap() < release.version);
//! ```

pub mod build_info;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;
pub mod updates;

pub use error::{BinupError, Result};
