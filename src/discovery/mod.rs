//! Shared-library discovery.
//!
//! The SDK library is searched for across three tiers, strictly in this
//! order:
//!
//! 1. An environment variable naming the library explicitly
//! 2. Fixed candidate paths (known install locations, then the working
//!    directory, then configured extras)
//! 3. Wildcard patterns over alternate drives and install roots
//!
//! The first tier that yields an existing path wins. Nothing is cached, so
//! repeated calls against an unchanged filesystem give identical results.
//!
//! # Example
//!
//! ```
//! use everything_preflight::discovery::{
//!     DiscoverySource, LibraryLocator, MemoryFileSystem, SourceKind,
//! };
//!
//! let fs = MemoryFileSystem::new()
//!     .with_file("/opt/sdk/Everything64.dll")
//!     .with_file("/mnt/c/Everything/Everything64.dll");
//!
//! let locator = LibraryLocator::with_probes(
//!     vec![
//!         DiscoverySource::EnvironmentVariable("EVERYTHING_SDK_PATH".into()),
//!         DiscoverySource::FixedPath("/opt/sdk/Everything64.dll".into()),
//!         DiscoverySource::GlobPattern("/mnt/*/Everything/Everything*.dll".into()),
//!     ],
//!     fs,
//!     |_| None,
//! );
//!
//! let found = locator.locate().unwrap();
//! assert_eq!(found.kind(), SourceKind::FixedPath);
//! ```

pub mod defaults;
pub mod locator;
pub mod probe;
pub mod source;

pub use defaults::{default_sources, DEFAULT_LIBRARY_NAME, DEFAULT_SDK_ENV_VAR};
pub use locator::LibraryLocator;
pub use probe::{FileSystemProbe, MemoryFileSystem, RealFileSystem};
pub use source::{DiscoveryResult, DiscoverySource, SourceKind};
