//! droidres - UI-complexity metrics for decompiled Android apps
//!
//! Walks a directory of decompiled application projects, classifies their
//! XML resources and writes one CSV row of structural counters per project,
//! for downstream malicious/benign classification.
//!
//! # Architecture
//!
//! 1. **Discovery** - Each subdirectory of the input is a project; walk it
//!    depth-first for `.xml` files
//! 2. **Parsing** - Load each file into an element tree
//! 3. **Classification** - Route the file to a resource category by path and
//!    root tag, and update the project's record
//! 4. **Reporting** - Write the finished record as a CSV row

pub mod classify;
pub mod config;
pub mod discovery;
pub mod metrics;
pub mod report;
pub mod xml;

mod pipeline;

pub use classify::{classify, ResourceKind, ResourcePath};
pub use config::Config;
pub use discovery::{ProjectWalker, ResourceFile, WalkError, WalkOptions, WalkStats};
pub use metrics::{LayoutMetrics, LayoutSummary, ProjectRecord};
pub use pipeline::run;
pub use report::{CsvReporter, RunSummary};
pub use xml::{Element, XmlError};
