//! # Program Assembly
//!
//! Runs the per-tree generator over the emission order and stitches the
//! constructor functions into a standalone script.

use super::tree_codegen::{write_memoized_call, GeneratedTree, TreeCodeGenerator};
use super::writer::CodeWriter;
use crate::dependencies::RootPlan;
use crate::session::ExportSession;

/// Modules every generated file imports.
pub const IMPORTS: &[&str] = &["bpy", "mathutils", "os", "typing"];

/// Generate every tree of the plan in emission order.
pub fn generate_trees(session: &mut ExportSession<'_>) -> Vec<GeneratedTree> {
    let order = session.plan.order.clone();
    let mut trees = Vec::with_capacity(order.len());
    for id in order {
        match TreeCodeGenerator::new(session, id.clone()) {
            Some(generator) => trees.push(generator.generate()),
            None => tracing::warn!("[CODEGEN] Node tree {} left the plan, skipping", id),
        }
    }
    trees
}

pub fn write_imports(w: &mut CodeWriter) {
    for module in IMPORTS {
        w.line(format!("import {module}"));
    }
}

/// The declaration of the memo table every entry point starts with.
pub const NODE_TREES_DECL: &str = "node_trees: dict[typing.Hashable, bpy.types.NodeTree] = {}";

/// Build `root`'s base tree through the memo table. `qualify` prefixes the
/// function with its module.
pub fn write_root_call(
    w: &mut CodeWriter,
    session: &ExportSession<'_>,
    root: &RootPlan,
    qualify: bool,
) {
    let Some(func) = session.plan.info(&root.base).and_then(|info| info.func.as_deref()) else {
        return;
    };
    let func = if qualify && !root.module.is_empty() {
        format!("{}.{func}", root.module)
    } else {
        func.to_string()
    };
    write_memoized_call(w, &func);
}

/// A single self-contained script.
pub fn assemble_script(session: &ExportSession<'_>, trees: &[GeneratedTree]) -> String {
    let mut w = CodeWriter::new(session.options.indentation);
    if session.options.include_imports {
        write_imports(&mut w);
        w.blank();
    }

    for tree in trees {
        w.append(&tree.code);
    }

    w.line(NODE_TREES_DECL);
    for root in &session.plan.roots {
        write_root_call(&mut w, session, root, false);
    }
    w.finish()
}
