//! # Dependency Resolver
//!
//! Walks nested node-group references from every root object and produces a
//! linear emission order in which every tree comes after the trees it uses
//! (depth-first post-order, memoized by tree identity).
//!
//! Trees linked from the host's bundled essentials libraries are not
//! reconstructed: they are collected into a per-root, path-keyed bucket and
//! loaded by reference at runtime. In package mode a tree reachable from more
//! than one root moves into a shared `{kind}_common` module; that decision
//! is computed from full per-root reachability after the traversal, so it does
//! not depend on the order in which roots are listed.

use crate::codegen::NameAllocator;
use crate::diagnostics::Diagnostics;
use crate::model::{Document, Node, NodeTree, SettingValue, TreeId, TreeKind};
use crate::options::ExportOptions;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Everything known about one node tree taking part in the export.
#[derive(Debug, Clone)]
pub struct NodeTreeInfo {
    pub id: TreeId,
    pub kind: TreeKind,
    /// Name of the generated constructor function, assigned when emission begins.
    pub func: Option<String>,
    /// Module the constructor lives in. Empty in script mode.
    pub module: String,
    /// Whether the tree is the base tree of a root object.
    pub is_base: bool,
    /// Root that owns this tree as its base tree.
    pub root: Option<usize>,
    /// Direct node-group dependencies, excluding essentials.
    pub dependencies: IndexSet<TreeId>,
    /// Roots from which this tree is reachable.
    pub dependent_roots: IndexSet<usize>,
    /// Essentials trees needed by this root, keyed by library path relative
    /// to the host's datafiles directory. Only filled on base trees.
    pub lib_dependencies: IndexMap<PathBuf, Vec<TreeId>>,
}

impl NodeTreeInfo {
    fn new(id: TreeId, kind: TreeKind) -> Self {
        Self {
            id,
            kind,
            func: None,
            module: String::new(),
            is_base: false,
            root: None,
            dependencies: IndexSet::new(),
            dependent_roots: IndexSet::new(),
            lib_dependencies: IndexMap::new(),
        }
    }

    /// Whether more than one root reaches this tree.
    pub fn is_shared(&self) -> bool {
        self.dependent_roots.len() > 1
    }
}

/// A root object that survived validation.
#[derive(Debug, Clone)]
pub struct RootPlan {
    /// Index into [`Document::roots`].
    pub index: usize,
    pub base: TreeId,
    /// Module holding the root's base tree. Empty in script mode.
    pub module: String,
}

/// Output of dependency resolution.
#[derive(Debug, Clone, Default)]
pub struct ExportPlan {
    /// Trees in emission order.
    pub order: Vec<TreeId>,
    pub trees: IndexMap<TreeId, NodeTreeInfo>,
    pub roots: Vec<RootPlan>,
    /// Essentials trees and their library path relative to the datafiles directory.
    pub essentials: IndexMap<TreeId, PathBuf>,
}

impl ExportPlan {
    pub fn info(&self, id: &TreeId) -> Option<&NodeTreeInfo> {
        self.trees.get(id)
    }

    pub fn info_mut(&mut self, id: &TreeId) -> Option<&mut NodeTreeInfo> {
        self.trees.get_mut(id)
    }

    /// Every module a package will import, root modules first.
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.roots
            .iter()
            .map(|r| r.module.as_str())
            .chain(self.trees.values().map(|info| info.module.as_str()))
            .filter(|module| !module.is_empty())
    }

    /// Root plan owning `id` as its base tree.
    pub fn root_of(&self, id: &TreeId) -> Option<&RootPlan> {
        self.roots.iter().find(|r| &r.base == id)
    }
}

/// Resolves the emission order for one export run.
pub struct DependencyResolver<'a> {
    document: &'a Document,
    options: &'a ExportOptions,
    plan: ExportPlan,
    visited: HashSet<TreeId>,
    on_stack: IndexSet<TreeId>,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(document: &'a Document, options: &'a ExportOptions) -> Self {
        Self {
            document,
            options,
            plan: ExportPlan::default(),
            visited: HashSet::new(),
            on_stack: IndexSet::new(),
        }
    }

    /// Run the resolver over every root of the document.
    pub fn resolve(mut self, diagnostics: &mut Diagnostics) -> ExportPlan {
        tracing::debug!("[DEPS] Resolving {} roots", self.document.roots.len());

        self.register_roots(diagnostics);

        let bases: Vec<TreeId> = self.plan.roots.iter().map(|r| r.base.clone()).collect();
        for base in &bases {
            self.visit(base, diagnostics);
        }

        self.compute_reachability();
        self.assign_modules();

        tracing::debug!(
            "[DEPS] Emission order: {}",
            self.plan
                .order
                .iter()
                .map(TreeId::as_str)
                .collect::<Vec<_>>()
                .join(" -> ")
        );
        self.plan
    }

    fn register_roots(&mut self, diagnostics: &mut Diagnostics) {
        for (index, root) in self.document.roots.iter().enumerate() {
            let Some(id) = &root.node_tree else {
                diagnostics.error(format!("Couldn't find base node tree of {}", root.name));
                continue;
            };
            let Some(tree) = self.document.tree(id) else {
                diagnostics.error(format!(
                    "Base node tree {} of {} is missing from the document",
                    id, root.name
                ));
                continue;
            };
            if tree.kind != root.kind.tree_kind() {
                diagnostics.error(format!(
                    "Base node tree {} of {} is a {:?} tree, expected {:?}",
                    tree.name,
                    root.name,
                    tree.kind,
                    root.kind.tree_kind()
                ));
                continue;
            }
            if let Some(existing) = self.plan.root_of(id) {
                diagnostics.warning(format!(
                    "{} shares its node tree with {}, exporting it once",
                    root.name, self.document.roots[existing.index].name
                ));
                continue;
            }

            let info = self
                .plan
                .trees
                .entry(id.clone())
                .or_insert_with(|| NodeTreeInfo::new(id.clone(), tree.kind));
            info.is_base = true;
            info.root = Some(index);

            self.plan.roots.push(RootPlan {
                index,
                base: id.clone(),
                module: String::new(),
            });
        }
    }

    /// Depth-first post-order traversal from `id`.
    fn visit(&mut self, id: &TreeId, diagnostics: &mut Diagnostics) {
        if self.visited.contains(id) {
            return;
        }
        if self.on_stack.contains(id) {
            diagnostics.error(format!("Node tree {id} references itself through its node groups"));
            return;
        }
        let document = self.document;
        let Some(tree) = document.tree(id) else {
            return;
        };

        tracing::debug!("[DEPS] Visiting {}", tree.name);
        self.on_stack.insert(id.clone());
        self.plan
            .trees
            .entry(id.clone())
            .or_insert_with(|| NodeTreeInfo::new(id.clone(), tree.kind));

        for node in tree.group_nodes() {
            let Some(dep) = self.group_reference(tree, node, diagnostics) else {
                continue;
            };
            if let Some(path) = self.essential_path(dep) {
                self.plan.essentials.entry(dep.clone()).or_insert(path);
                continue;
            }
            if let Some(info) = self.plan.trees.get_mut(id) {
                info.dependencies.insert(dep.clone());
            }
            self.visit(dep, diagnostics);
        }

        self.on_stack.shift_remove(id);
        self.visited.insert(id.clone());
        self.plan.order.push(id.clone());
        tracing::debug!("[DEPS] Added {} to the emission order", tree.name);
    }

    /// The tree a group node points at, reporting invalid references.
    fn group_reference(
        &self,
        tree: &NodeTree,
        node: &'a Node,
        diagnostics: &mut Diagnostics,
    ) -> Option<&'a TreeId> {
        let dep = match node.settings.get("node_tree") {
            Some(Some(SettingValue::NodeTree(dep))) => dep,
            _ => {
                diagnostics.error(format!(
                    "Found an invalid node tree in group node {} of {}. Are all data blocks valid?",
                    node.name, tree.name
                ));
                return None;
            }
        };
        let Some(dep_tree) = self.document.tree(dep) else {
            diagnostics.error(format!(
                "Group node {} of {} references unknown node tree {}",
                node.name, tree.name, dep
            ));
            return None;
        };
        if dep_tree.kind != tree.kind {
            diagnostics.error(format!(
                "Group node {} of {} references {:?} tree {}",
                node.name, tree.name, dep_tree.kind, dep_tree.name
            ));
            return None;
        }
        Some(dep)
    }

    /// Library path of `id` relative to the datafiles directory, when the tree
    /// should be linked from an essentials library.
    fn essential_path(&self, id: &TreeId) -> Option<PathBuf> {
        if !self.options.link_external_groups {
            return None;
        }
        let library = self.document.tree(id)?.library.as_ref()?;
        let lib_path = normalize(&library.filepath);
        let relative = self
            .document
            .host
            .datafiles_path
            .as_deref()
            .and_then(|datafiles| lib_path.strip_prefix(normalize(datafiles)).ok())
            .map(Path::to_path_buf);
        if relative.is_none() {
            tracing::info!(
                "[DEPS] Library {} didn't seem essential, copying node groups",
                lib_path.display()
            );
        }
        relative
    }

    /// Record, for every root, the full set of trees and essentials it reaches.
    fn compute_reachability(&mut self) {
        let roots: Vec<(usize, TreeId)> = self
            .plan
            .roots
            .iter()
            .map(|r| (r.index, r.base.clone()))
            .collect();

        for (root, base) in roots {
            let mut seen: IndexSet<TreeId> = IndexSet::new();
            let mut stack = vec![base.clone()];
            let mut libs: IndexMap<PathBuf, Vec<TreeId>> = IndexMap::new();

            while let Some(id) = stack.pop() {
                if !seen.insert(id.clone()) {
                    continue;
                }
                if let Some(tree) = self.document.tree(&id) {
                    for dep in tree.group_nodes().filter_map(Node::node_tree) {
                        if let Some(path) = self.plan.essentials.get(dep) {
                            let bucket = libs.entry(path.clone()).or_default();
                            if !bucket.contains(dep) {
                                bucket.push(dep.clone());
                            }
                        }
                    }
                }
                if let Some(info) = self.plan.trees.get(&id) {
                    stack.extend(info.dependencies.iter().rev().cloned());
                }
            }

            for id in &seen {
                if let Some(info) = self.plan.trees.get_mut(id) {
                    info.dependent_roots.insert(root);
                }
            }
            if let Some(info) = self.plan.trees.get_mut(&base) {
                info.lib_dependencies = libs;
            }
        }
    }

    fn assign_modules(&mut self) {
        if !self.options.is_package() {
            return;
        }

        let mut modules = NameAllocator::with_reserved([
            "__init__",
            "compositor_common",
            "geometry_common",
            "shader_common",
        ]);
        for root in &mut self.plan.roots {
            let name = &self.document.roots[root.index].name;
            root.module = modules.allocate(name);
        }

        let root_modules: IndexMap<usize, String> = self
            .plan
            .roots
            .iter()
            .map(|r| (r.index, r.module.clone()))
            .collect();

        for info in self.plan.trees.values_mut() {
            let owner = if info.is_base { info.root } else { None };
            info.module = match owner {
                Some(root) => root_modules.get(&root).cloned().unwrap_or_default(),
                None if info.is_shared() => info.kind.common_module().to_string(),
                None => info
                    .dependent_roots
                    .first()
                    .and_then(|root| root_modules.get(root))
                    .cloned()
                    .unwrap_or_else(|| info.kind.common_module().to_string()),
            };
        }
    }
}

/// Lexically normalize a path, resolving `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Library, RootKind, RootObject};

    fn group_node(name: &str, kind: TreeKind, target: &str) -> Node {
        Node::new(name, kind.group_node_idname())
            .with_setting("node_tree", SettingValue::NodeTree(TreeId::from(target)))
    }

    fn tree(name: &str, kind: TreeKind, deps: &[&str]) -> NodeTree {
        let mut tree = NodeTree::new(name, kind);
        for (i, dep) in deps.iter().enumerate() {
            tree.nodes.push(group_node(&format!("Group.{i:03}"), kind, dep));
        }
        tree
    }

    fn root(name: &str, kind: RootKind, tree: &str) -> RootObject {
        RootObject {
            name: name.into(),
            kind,
            node_tree: Some(TreeId::from(tree)),
            light_type: None,
        }
    }

    fn document(trees: Vec<NodeTree>, roots: Vec<RootObject>) -> Document {
        let mut doc = Document {
            roots,
            ..Document::default()
        };
        for t in trees {
            doc.node_trees.insert(TreeId::new(t.name.clone()), t);
        }
        doc
    }

    fn order(plan: &ExportPlan) -> Vec<&str> {
        plan.order.iter().map(TreeId::as_str).collect()
    }

    #[test]
    fn diamond_emits_shared_dependency_once_and_first() {
        let g = TreeKind::Geometry;
        let doc = document(
            vec![
                tree("A", g, &["B", "C"]),
                tree("B", g, &["D"]),
                tree("C", g, &["D"]),
                tree("D", g, &[]),
            ],
            vec![root("A", RootKind::GeometryNodeGroup, "A")],
        );
        let options = ExportOptions::default();
        let mut diags = Diagnostics::new();
        let plan = DependencyResolver::new(&doc, &options).resolve(&mut diags);

        assert_eq!(order(&plan), ["D", "B", "C", "A"]);
        assert!(diags.is_empty());
    }

    #[test]
    fn null_reference_is_reported_and_skipped() {
        let g = TreeKind::Geometry;
        let mut a = tree("A", g, &["B"]);
        let mut broken = Node::new("Broken", "GeometryNodeGroup");
        broken.settings.insert("node_tree".into(), None);
        a.nodes.push(broken);
        let doc = document(
            vec![a, tree("B", g, &[])],
            vec![root("A", RootKind::GeometryNodeGroup, "A")],
        );
        let options = ExportOptions::default();
        let mut diags = Diagnostics::new();
        let plan = DependencyResolver::new(&doc, &options).resolve(&mut diags);

        assert_eq!(order(&plan), ["B", "A"]);
        assert_eq!(diags.error_count(), 1);
    }

    #[test]
    fn cycles_do_not_recurse_forever() {
        let g = TreeKind::Geometry;
        let doc = document(
            vec![tree("A", g, &["B"]), tree("B", g, &["A"])],
            vec![root("A", RootKind::GeometryNodeGroup, "A")],
        );
        let options = ExportOptions::default();
        let mut diags = Diagnostics::new();
        let plan = DependencyResolver::new(&doc, &options).resolve(&mut diags);

        assert_eq!(order(&plan), ["B", "A"]);
        assert!(diags.has_errors());
    }

    #[test]
    fn essentials_are_bucketed_on_the_root() {
        let g = TreeKind::Geometry;
        let mut hair = tree("Smooth Hair Curves", g, &[]);
        hair.library = Some(Library {
            filepath: "/opt/blender/datafiles/assets/geometry_nodes/../geometry_nodes/smooth_curves.blend".into(),
        });
        let mut doc = document(
            vec![tree("A", g, &["Smooth Hair Curves"]), hair],
            vec![root("A", RootKind::GeometryNodeGroup, "A")],
        );
        doc.host.datafiles_path = Some("/opt/blender/datafiles".into());

        let options = ExportOptions::default();
        let mut diags = Diagnostics::new();
        let plan = DependencyResolver::new(&doc, &options).resolve(&mut diags);

        assert_eq!(order(&plan), ["A"]);
        let base = plan.info(&TreeId::from("A")).unwrap();
        let bucket = base
            .lib_dependencies
            .get(Path::new("assets/geometry_nodes/smooth_curves.blend"))
            .unwrap();
        assert_eq!(bucket, &[TreeId::from("Smooth Hair Curves")]);

        let options = ExportOptions::default().with_external_groups(false);
        let plan = DependencyResolver::new(&doc, &options).resolve(&mut diags);
        assert_eq!(order(&plan), ["Smooth Hair Curves", "A"]);
    }

    #[test]
    fn shared_module_promotion_ignores_root_order() {
        let g = TreeKind::Geometry;
        let trees = vec![
            tree("First", g, &["Shared", "OnlyFirst"]),
            tree("Second", g, &["Shared"]),
            tree("Shared", g, &[]),
            tree("OnlyFirst", g, &[]),
        ];
        let forward = vec![
            root("First", RootKind::GeometryNodeGroup, "First"),
            root("Second", RootKind::GeometryNodeGroup, "Second"),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let options = ExportOptions::package("/tmp/out");
        for roots in [forward, backward] {
            let doc = document(trees.clone(), roots);
            let mut diags = Diagnostics::new();
            let plan = DependencyResolver::new(&doc, &options).resolve(&mut diags);

            let module = |id: &str| plan.info(&TreeId::from(id)).unwrap().module.clone();
            assert_eq!(module("Shared"), "geometry_common");
            assert_eq!(module("OnlyFirst"), "first");
            assert_eq!(module("First"), "first");
            assert_eq!(module("Second"), "second");
        }
    }

    #[test]
    fn base_tree_used_by_another_root_keeps_its_module() {
        let g = TreeKind::Geometry;
        let doc = document(
            vec![tree("Outer", g, &["Inner"]), tree("Inner", g, &[])],
            vec![
                root("Outer", RootKind::GeometryNodeGroup, "Outer"),
                root("Inner", RootKind::GeometryNodeGroup, "Inner"),
            ],
        );
        let options = ExportOptions::package("/tmp/out");
        let mut diags = Diagnostics::new();
        let plan = DependencyResolver::new(&doc, &options).resolve(&mut diags);

        assert_eq!(order(&plan), ["Inner", "Outer"]);
        assert_eq!(plan.info(&TreeId::from("Inner")).unwrap().module, "inner");
    }

    #[test]
    fn mismatched_root_is_skipped() {
        let doc = document(
            vec![tree("Geo", TreeKind::Geometry, &[])],
            vec![root("Rock", RootKind::Material, "Geo")],
        );
        let options = ExportOptions::default();
        let mut diags = Diagnostics::new();
        let plan = DependencyResolver::new(&doc, &options).resolve(&mut diags);

        assert!(plan.order.is_empty());
        assert_eq!(diags.error_count(), 1);
    }
}
