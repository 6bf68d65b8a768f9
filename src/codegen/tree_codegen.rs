//! # Node Tree Code Generator
//!
//! Emits the constructor function for a single node tree. Stages run in a
//! fixed order so that every statement only refers to objects that already
//! exist in the host at that point of the generated program:
//!
//! 1. **Header** - function signature and docstring
//! 2. **Tree creation** - root object and base tree binding, or a fresh group
//! 3. **Tree settings** - color tag, description and kind-specific flags
//! 4. **Interface** - panels and sockets in host order
//! 5. **Nodes** - creation, schema-driven settings and socket defaults
//! 6. **Zones** - pairing, then the defaults skipped in stage 5
//! 7. **Layout** - parents, locations, dimensions
//! 8. **Links** - ordered by multi-input sort id
//! 9. **Deferred statements** - everything that needed links first

use super::creators::{creator_for, new_node_group, CreatorContext, ObjectCreator};
use super::literal::{escape_str, py_enum, py_float, py_str, py_vec};
use super::writer::CodeWriter;
use crate::model::{Node, NodeTree, RootObject, TreeId};
use crate::session::ExportSession;
use crate::version::{V4_2, V4_3};
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// The constructor function of one tree and what it needs to be placed.
#[derive(Debug, Clone)]
pub struct GeneratedTree {
    pub id: TreeId,
    /// Module the function belongs in. Empty in script mode.
    pub module: String,
    pub func: String,
    pub code: String,
    /// Sibling modules referenced by the function body.
    pub imports: IndexSet<String>,
}

/// Generator for a single node tree.
pub struct TreeCodeGenerator<'s, 'a> {
    pub(super) session: &'s mut ExportSession<'a>,
    pub(super) id: TreeId,
    pub(super) tree: &'a NodeTree,
    pub(super) creator: &'static dyn ObjectCreator,
    /// Set when this tree is the base tree of a root object.
    pub(super) root: Option<&'a RootObject>,
    pub(super) module: String,
    pub(super) w: CodeWriter,
    pub(super) tree_var: String,
    /// Constructor function name, unique among every generated identifier.
    pub(super) func: String,
    pub(super) node_vars: HashMap<&'a str, String>,
    pub(super) zone_inputs: Vec<&'a Node>,
    pub(super) zone_outputs: HashSet<&'a str>,
    pub(super) imports: IndexSet<String>,
}

impl<'s, 'a> TreeCodeGenerator<'s, 'a> {
    /// Create a generator for `id`, or `None` when the tree is not part of the plan.
    pub fn new(session: &'s mut ExportSession<'a>, id: TreeId) -> Option<Self> {
        let document = session.document;
        let tree = document.tree(&id)?;
        let info = session.plan.info(&id)?;
        let module = info.module.clone();
        let root = info
            .root
            .filter(|_| info.is_base)
            .and_then(|index| document.roots.get(index));

        let tree_var = session.names.allocate(&tree.name);
        let func = session.names.allocate(&format!("{tree_var}_node_group"));
        let w = CodeWriter::new(session.options.indentation);

        Some(Self {
            session,
            id,
            tree,
            creator: creator_for(tree.kind),
            root,
            module,
            w,
            tree_var,
            func,
            node_vars: HashMap::new(),
            zone_inputs: Vec::new(),
            zone_outputs: HashSet::new(),
            imports: IndexSet::new(),
        })
    }

    /// Run every stage and return the finished constructor function.
    pub fn generate(mut self) -> GeneratedTree {
        tracing::debug!("[CODEGEN] Generating node tree {}", self.tree.name);

        let func = self.func.clone();
        if let Some(info) = self.session.plan.info_mut(&self.id) {
            info.func = Some(func.clone());
        }

        // Stage 1: header
        self.w.line(format!(
            "def {func}(node_trees: dict[typing.Hashable, bpy.types.NodeTree]):"
        ));
        self.w.indent();
        self.w.line(format!(
            "\"\"\"Initialize {} node group\"\"\"",
            escape_str(&self.tree.name)
        ));

        self.load_essentials();

        // Stage 2: tree creation
        self.init_tree();

        // Stage 3: tree settings
        self.tree_settings();

        // Stage 4: interface
        self.interface();

        // Stage 5: nodes
        self.collect_zone_outputs();
        self.w.line(format!("# Initialize {} nodes", self.tree_var));
        self.w.blank();
        let tree = self.tree;
        for node in &tree.nodes {
            self.process_node(node);
        }

        // Stage 6: zones
        self.process_zones();

        // Stage 7: layout
        if self.session.options.emit_node_parents {
            self.set_parents();
        }
        if self.session.options.emit_node_locations {
            self.set_locations();
        }
        if self.session.options.emit_node_dimensions {
            self.set_dimensions();
        }

        // Stage 8: links
        self.init_links();

        // Stage 9: deferred statements
        let deferred = self.session.take_deferred();
        if !deferred.is_empty() {
            for statement in deferred {
                self.w.line(statement);
            }
            self.w.blank();
        }

        self.w.line(format!("return {}", self.tree_var));
        self.w.dedent();
        self.w.blank();
        self.w.blank();

        GeneratedTree {
            id: self.id,
            module: self.module,
            func,
            code: self.w.finish(),
            imports: self.imports,
        }
    }

    /// Link the essentials trees this root needs before anything is built.
    fn load_essentials(&mut self) {
        let Some(info) = self.session.plan.info(&self.id) else {
            return;
        };
        if !info.is_base || info.lib_dependencies.is_empty() {
            return;
        }
        let document = self.session.document;
        let libs = info.lib_dependencies.clone();

        self.w.line("# Link node groups from the bundled essentials libraries");
        self.w.line("datafiles_path = bpy.utils.system_resource('DATAFILES')");
        for (path, trees) in &libs {
            self.w.line(format!("lib_relpath = {}", py_str(&relpath_str(path))));
            self.w.line("lib_path = os.path.join(datafiles_path, lib_relpath)");
            self.w.line(
                "with bpy.data.libraries.load(lib_path, link=True) as (data_src, data_dst):",
            );
            self.w.nested("data_dst.node_groups = []");
            for id in trees {
                let Some(tree) = document.tree(id) else {
                    continue;
                };
                let name = py_str(&tree.name);
                self.w.nested(format!("if {name} in data_src.node_groups:"));
                self.w
                    .line_at(self.w.level() + 2, format!("data_dst.node_groups.append({name})"));
            }
            self.w.line("for item in data_dst.node_groups:");
            self.w.nested("if item is not None:");
            self.w.line_at(
                self.w.level() + 2,
                "node_trees[(lib_relpath, item.name)] = item",
            );
        }
        self.w.blank();
    }

    fn init_tree(&mut self) {
        let tree = self.tree;
        let tree_var = self.tree_var.clone();
        let mut ctx = CreatorContext {
            w: &mut self.w,
            names: &mut self.session.names,
            version: self.session.version,
        };

        let object = self.root.filter(|root| root.kind.is_object()).and_then(|root| {
            self.creator
                .create_object(&mut ctx, root)
                .map(|obj_var| (root, obj_var))
        });

        match object {
            Some((root, obj_var)) => {
                self.creator
                    .bind_object_tree(&mut ctx, root, &obj_var, tree, &tree_var);
                ctx.w.blank();
                ctx.w.line("# Start with a clean node tree");
                ctx.w.line(format!("for node in {tree_var}.nodes:"));
                ctx.w.nested(format!("{tree_var}.nodes.remove(node)"));
            }
            None => new_node_group(ctx.w, tree.kind, tree, &tree_var),
        }
        self.w.blank();
    }

    fn tree_settings(&mut self) {
        let tree = self.tree;
        let var = self.tree_var.clone();
        let version = self.session.version;
        let settings = &tree.settings;

        if version >= V4_2 {
            self.w
                .line(format!("{var}.color_tag = {}", py_enum(&settings.color_tag)));
            self.w
                .line(format!("{var}.description = {}", py_str(&settings.description)));
        }
        if version >= V4_3 {
            self.w.line(format!(
                "{var}.default_group_node_width = {}",
                py_float(settings.default_group_node_width)
            ));
        }

        let mut ctx = CreatorContext {
            w: &mut self.w,
            names: &mut self.session.names,
            version,
        };
        self.creator.tree_settings(&mut ctx, tree, &var);
        self.w.blank();
    }

    fn collect_zone_outputs(&mut self) {
        let zones = self.creator.zone_inputs(self.session.version);
        let tree = self.tree;
        for node in &tree.nodes {
            if zones.contains(&node.bl_idname.as_str()) {
                if let Some(output) = &node.paired_output {
                    self.zone_outputs.insert(output.as_str());
                }
            }
        }
    }

    pub(super) fn is_zone_input(&self, node: &Node) -> bool {
        self.creator
            .zone_inputs(self.session.version)
            .contains(&node.bl_idname.as_str())
    }

    /// Pair every zone and write the defaults that had to wait for it.
    fn process_zones(&mut self) {
        let inputs = std::mem::take(&mut self.zone_inputs);
        if inputs.is_empty() {
            return;
        }

        for input in inputs {
            let Some(input_var) = self.node_vars.get(input.name.as_str()).cloned() else {
                continue;
            };
            let output = input
                .paired_output
                .as_deref()
                .and_then(|name| self.tree.node(name));
            let Some(output) = output else {
                self.session.diagnostics.warning(format!(
                    "Zone input {} in {} has no paired output",
                    input.name, self.tree.name
                ));
                continue;
            };
            let Some(output_var) = self.node_vars.get(output.name.as_str()).cloned() else {
                continue;
            };

            self.w.line(format!("# Process zone input {}", input.name));
            self.w
                .line(format!("{input_var}.pair_with_output({output_var})"));
            self.socket_defaults(input, &input_var);
            self.socket_defaults(output, &output_var);
        }
        self.w.blank();
    }

    fn set_parents(&mut self) {
        let tree = self.tree;
        let parented: Vec<_> = tree
            .nodes
            .iter()
            .filter_map(|node| node.parent.as_deref().map(|parent| (node, parent)))
            .collect();
        if parented.is_empty() {
            return;
        }

        self.w.line("# Set parents");
        for (node, parent) in parented {
            let (Some(node_var), Some(parent_var)) = (
                self.node_vars.get(node.name.as_str()),
                self.node_vars.get(parent),
            ) else {
                self.session.diagnostics.warning(format!(
                    "Couldn't find parent {} of node {} in {}",
                    parent, node.name, tree.name
                ));
                continue;
            };
            self.w.line(format!("{node_var}.parent = {parent_var}"));
        }
        self.w.blank();
    }

    fn set_locations(&mut self) {
        let tree = self.tree;
        self.w.line("# Set locations");
        for node in &tree.nodes {
            if let Some(var) = self.node_vars.get(node.name.as_str()) {
                self.w.line(format!(
                    "{var}.location = {}",
                    py_vec(&node.location)
                ));
            }
        }
        self.w.blank();
    }

    fn set_dimensions(&mut self) {
        let tree = self.tree;
        self.w.line("# Set dimensions");
        for node in &tree.nodes {
            if let Some(var) = self.node_vars.get(node.name.as_str()) {
                self.w.line(format!(
                    "{var}.width, {var}.height = {}, {}",
                    py_float(node.width),
                    py_float(node.height)
                ));
            }
        }
        self.w.blank();
    }

    /// Reference to the constructor of `dep`, qualified by module when it
    /// lives elsewhere. Records the import.
    pub(super) fn func_ref(&mut self, dep: &TreeId) -> Option<String> {
        let info = self.session.plan.info(dep)?;
        let func = info.func.clone()?;
        if info.module.is_empty() || info.module == self.module {
            return Some(func);
        }
        let module = info.module.clone();
        let qualified = format!("{module}.{func}");
        self.imports.insert(module);
        Some(qualified)
    }
}

/// Memoized constructor call: build `func` at most once per run.
pub fn write_memoized_call(w: &mut CodeWriter, func: &str) {
    w.line(format!("if {func} not in node_trees:"));
    w.nested(format!("node_trees[{func}] = {func}(node_trees)"));
}

/// A library path rendered with forward slashes, as the host expects.
pub fn relpath_str(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
