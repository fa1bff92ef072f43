//! rbf-props - query and edit Hadoop-style XML property files
//!
//! Used while installing the HDFS router to read, update, or add
//! `<property>` entries in `*-site.xml` files.

pub mod cli;
pub mod observability;
pub mod store;
