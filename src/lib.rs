//! # Blender Node Tree Compiler (BNTC)
//!
//! Compiler for turning node trees captured from Blender (geometry, shader
//! and compositor trees, with their nested node groups) into Python source
//! that rebuilds them through the `bpy` API.
//!
//! BNTC provides:
//! - A versioned schema of node attributes for Blender 4.2 up to 5.1
//! - Dependency-ordered emission of nested node groups
//! - Standalone scripts or installable add-on packages
//! - Linking of node groups from Blender's bundled essentials libraries
//! - Diagnostics for anything that couldn't be reproduced
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bntc::{export_document_with_options, Document, ExportOptions, Indentation};
//!
//! let document = Document::from_file("capture.json".as_ref())?;
//! let options = ExportOptions::script().with_indentation(Indentation::Spaces2);
//!
//! match export_document_with_options(&document, &options) {
//!     Ok(report) => {
//!         if let Some(code) = report.script() {
//!             std::fs::write("rebuild.py", code)?;
//!         }
//!     }
//!     Err(e) => eprintln!("Export failed: {}", e),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! BNTC follows a multi-phase pipeline:
//!
//! 1. **Preconditions** - Host version, package destination, target menu
//! 2. **Dependency Resolution** - Topological order of nested node groups
//! 3. **Code Generation** - One constructor function per node tree
//! 4. **Assembly** - Script or package layout with entry points

pub mod codegen;
pub mod compiler;
pub mod dependencies;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod options;
pub mod schema;
pub mod session;
pub mod version;

// Re-export the main export API
pub use compiler::{
    check_preconditions, export_document, export_document_with_options, ExportOutput,
    ExportReport,
};

pub use codegen::{PackageFile, PackageOutput};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{ExportError, Result};
pub use model::{Document, NodeTree, RootKind, RootObject, TreeId, TreeKind};
pub use options::{ExportMode, ExportOptions, Indentation, License, PackageOptions};
pub use version::HostVersion;
