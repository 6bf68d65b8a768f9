//! # Python Code Generation
//!
//! Turns an [`ExportPlan`](crate::dependencies::ExportPlan) into Python source
//! for the host's scripting API. One constructor function is generated per
//! node tree by [`TreeCodeGenerator`]; [`program`] and [`package`] place those
//! functions into a script or an installable package.

mod creators;
mod interface;
mod items;
mod links;
pub mod literal;
mod names;
mod node_handlers;
pub mod package;
pub mod program;
mod sockets;
mod tree_codegen;
mod writer;

pub use creators::{creator_for, CreatorContext, ObjectCreator};
pub use links::ordered_links;
pub use names::{clean_string, NameAllocator, RESERVED_NAMES};
pub use package::{PackageBuilder, PackageFile, PackageOutput};
pub use tree_codegen::{relpath_str, GeneratedTree, TreeCodeGenerator};
pub use writer::CodeWriter;
