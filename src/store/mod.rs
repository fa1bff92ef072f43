//! Property store for Hadoop-style XML configuration files
//!
//! A property file looks like:
//!
//! ```xml
//! <configuration>
//!   <property>
//!     <name>dfs.federation.router.rpc-address</name>
//!     <value>0.0.0.0:8888</value>
//!   </property>
//! </configuration>
//! ```
//!
//! # Rules
//!
//! - Documents are loaded whole, mutated in memory, written back whole
//! - Names are compared after trimming; values are never trimmed
//! - First match wins; later duplicates are left alone
//! - Upsert appends at the tail of the root element

mod document;
mod errors;
mod options;
mod writer;

pub use document::{PropertyDocument, PropertyEntry, UpsertOutcome, DEFAULT_ROOT};
pub use errors::{StoreError, StoreResult};
pub use options::{LoadOptions, SaveOptions};
pub use writer::write_file;
