//! # Export Driver
//!
//! Main entry points for exporting a captured node-tree document.

use crate::codegen::{program, PackageBuilder, PackageOutput};
use crate::dependencies::DependencyResolver;
use crate::diagnostics::Diagnostics;
use crate::error::{ExportError, Result};
use crate::model::Document;
use crate::options::ExportOptions;
use crate::session::ExportSession;
use crate::version::{MAX_SUPPORTED, MIN_SUPPORTED};

/// What an export run produced.
#[derive(Debug, Clone)]
pub enum ExportOutput {
    /// A single script, ready to paste into the host's text editor.
    Script(String),
    /// A package that still has to be written with [`PackageOutput::write`].
    Package(PackageOutput),
}

/// Output of a run together with everything reported along the way.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub output: ExportOutput,
    pub diagnostics: Diagnostics,
}

impl ExportReport {
    pub fn script(&self) -> Option<&str> {
        match &self.output {
            ExportOutput::Script(code) => Some(code),
            ExportOutput::Package(_) => None,
        }
    }

    pub fn package(&self) -> Option<&PackageOutput> {
        match &self.output {
            ExportOutput::Package(package) => Some(package),
            ExportOutput::Script(_) => None,
        }
    }
}

/// Export a document as a script with default options.
///
/// # Examples
///
/// ```rust,no_run
/// use bntc::{export_document, Document};
///
/// let document = Document::from_file("capture.json".as_ref())?;
/// let report = export_document(&document)?;
/// if let Some(code) = report.script() {
///     std::fs::write("node_trees.py", code)?;
/// }
/// for diagnostic in &report.diagnostics {
///     eprintln!("{diagnostic}");
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn export_document(document: &Document) -> Result<ExportReport> {
    export_document_with_options(document, &ExportOptions::script())
}

/// Export a document.
///
/// Precondition failures cancel the run and return an error. Any other
/// problem is recorded in the report's diagnostics and the run continues with
/// the remaining trees, nodes and attributes.
///
/// # Arguments
///
/// * `document` - The captured node trees and root objects
/// * `options` - Output mode and emission toggles
///
/// # Returns
///
/// * `Ok(ExportReport)` - The generated script or package plus diagnostics
/// * `Err(ExportError)` - A precondition failed; nothing was generated
pub fn export_document_with_options(
    document: &Document,
    options: &ExportOptions,
) -> Result<ExportReport> {
    tracing::info!("[BNTC] Starting export");
    tracing::info!(
        "[BNTC] Document: {} roots, {} node trees, host {}",
        document.roots.len(),
        document.node_trees.len(),
        document.host.version
    );

    // Phase 1: Preconditions
    tracing::info!("[BNTC] Phase 1: Checking preconditions...");
    check_preconditions(document, options)?;

    let mut session = ExportSession::new(document, options);

    // Phase 2: Dependency resolution
    tracing::info!("[BNTC] Phase 2: Resolving node group dependencies...");
    session.plan = DependencyResolver::new(document, options).resolve(&mut session.diagnostics);
    tracing::info!(
        "[BNTC]   - {} node trees in emission order, {} linked from essentials",
        session.plan.order.len(),
        session.plan.essentials.len()
    );
    session.reserve_module_names();

    // Phase 3: Per-tree code generation
    tracing::info!("[BNTC] Phase 3: Generating node tree constructors...");
    let trees = program::generate_trees(&mut session);
    session.diagnostics.info(format!(
        "Generated {} node trees for {} roots",
        trees.len(),
        session.plan.roots.len()
    ));

    // Phase 4: Assembly
    tracing::info!("[BNTC] Phase 4: Assembling output...");
    let output = if options.is_package() {
        ExportOutput::Package(PackageBuilder::new(&mut session).build(trees)?)
    } else {
        ExportOutput::Script(program::assemble_script(&session, &trees))
    };

    tracing::info!(
        "[BNTC] Export finished with {} errors and {} warnings",
        session.diagnostics.error_count(),
        session.diagnostics.warning_count()
    );

    Ok(ExportReport {
        output,
        diagnostics: session.diagnostics,
    })
}

/// Checks that must pass before any code is generated.
pub fn check_preconditions(document: &Document, options: &ExportOptions) -> Result<()> {
    let version = document.host.version;
    if !version.is_supported() {
        return Err(ExportError::UnsupportedVersion {
            version,
            min: MIN_SUPPORTED,
            max: MAX_SUPPORTED,
        });
    }

    if options.is_package() {
        let package = &options.package;
        if package.destination.is_none() {
            return Err(ExportError::MissingDestination);
        }
        let known_menus = &document.host.menus;
        if !package.menu_id_is_well_formed()
            || (!known_menus.is_empty() && !known_menus.contains(&package.menu_id))
        {
            return Err(ExportError::InvalidMenu(package.menu_id.clone()));
        }
    }

    if document.roots.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::model::{
        CollectionItem, InOut, InterfaceItem, InterfaceItemKind, InterfaceSocket, Library, Link,
        Node, NodeTree, RootKind, RootObject, SettingValue, Socket, SocketValue, TreeId, TreeKind,
    };
    use crate::options::ExportMode;
    use crate::version::{HostVersion, V4_2, V4_3, V5_0};

    fn geometry_socket(identifier: &str) -> Socket {
        Socket::new(identifier, "NodeSocketGeometry")
    }

    fn group_node(name: &str, tree: &str) -> Node {
        Node::new(name, "GeometryNodeGroup")
            .with_setting("node_tree", SettingValue::NodeTree(TreeId::from(tree)))
            .with_input(geometry_socket("Socket_0"))
            .with_output(geometry_socket("Socket_1"))
    }

    /// `Rocks` joins its input with the output of the `Scatter` group.
    fn rocks_document(version: HostVersion) -> Document {
        let mut rocks = NodeTree::new("Rocks", TreeKind::Geometry);
        rocks.nodes = vec![
            Node::new("Group Input", "NodeGroupInput").with_output(geometry_socket("Socket_0")),
            group_node("Scatter", "Scatter"),
            Node::new("Join Geometry", "GeometryNodeJoinGeometry")
                .with_input(geometry_socket("Geometry"))
                .with_output(geometry_socket("Geometry")),
            Node::new("Group Output", "NodeGroupOutput")
                .with_setting("is_active_output", SettingValue::Bool(true))
                .with_input(geometry_socket("Socket_1")),
        ];
        rocks.links = vec![
            Link::new("Group Input", "Socket_0", "Join Geometry", "Geometry").with_sort_id(2),
            Link::new("Scatter", "Socket_1", "Join Geometry", "Geometry").with_sort_id(0),
            Link::new("Group Input", "Socket_0", "Scatter", "Socket_0"),
            Link::new("Join Geometry", "Geometry", "Group Output", "Socket_1"),
        ];

        let mut doc = Document::default();
        doc.host.version = version;
        doc.roots.push(RootObject {
            name: String::from("Rocks"),
            kind: RootKind::GeometryNodeGroup,
            node_tree: Some(TreeId::from("Rocks")),
            light_type: None,
        });
        doc.node_trees.insert(TreeId::from("Rocks"), rocks);
        doc.node_trees.insert(
            TreeId::from("Scatter"),
            NodeTree::new("Scatter", TreeKind::Geometry),
        );
        doc
    }

    fn script(doc: &Document) -> (String, Diagnostics) {
        let report = export_document(doc).unwrap();
        let code = report.script().unwrap().to_string();
        (code, report.diagnostics)
    }

    fn position(code: &str, needle: &str) -> usize {
        code.find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not found in:\n{code}"))
    }

    #[test]
    fn script_builds_groups_before_their_users() {
        let (code, diagnostics) = script(&rocks_document(V4_2));

        assert!(code.starts_with("import bpy\nimport mathutils\nimport os\nimport typing\n"));
        let scatter = position(
            &code,
            "def scatter_node_group(node_trees: dict[typing.Hashable, bpy.types.NodeTree]):",
        );
        let rocks = position(
            &code,
            "def rocks_node_group(node_trees: dict[typing.Hashable, bpy.types.NodeTree]):",
        );
        assert!(scatter < rocks);

        assert!(code.contains(
            "    rocks = bpy.data.node_groups.new(type='GeometryNodeTree', name=\"Rocks\")\n"
        ));
        assert!(code.contains("    \"\"\"Initialize Rocks node group\"\"\"\n"));
        assert!(code.contains(
            "    if scatter_node_group not in node_trees:\n        node_trees[scatter_node_group] = scatter_node_group(node_trees)\n    scatter_1.node_tree = node_trees[scatter_node_group]\n"
        ));
        assert!(code.contains("    group_output.is_active_output = True\n"));
        assert!(code.contains("    return rocks\n"));
        assert!(code.ends_with(
            "node_trees: dict[typing.Hashable, bpy.types.NodeTree] = {}\nif rocks_node_group not in node_trees:\n    node_trees[rocks_node_group] = rocks_node_group(node_trees)\n"
        ));
        assert!(!diagnostics.has_warnings(), "{diagnostics:?}");
    }

    #[test]
    fn links_follow_multi_input_order() {
        let (code, _) = script(&rocks_document(V4_2));

        let scatter_join = position(&code, "# scatter_1.Socket_1 -> join_geometry.Geometry");
        let input_scatter = position(&code, "# group_input.Socket_0 -> scatter_1.Socket_0");
        let join_output = position(&code, "# join_geometry.Geometry -> group_output.Socket_1");
        let input_join = position(&code, "# group_input.Socket_0 -> join_geometry.Geometry");
        assert!(scatter_join < input_scatter);
        assert!(input_scatter < join_output);
        assert!(join_output < input_join);

        assert!(code.contains(
            "    rocks.links.new(\n        rocks.nodes[\"Scatter\"].outputs[0],\n        rocks.nodes[\"Join Geometry\"].inputs[0]\n    )\n"
        ));
    }

    #[test]
    fn tree_settings_are_version_gated() {
        let (old, _) = script(&rocks_document(V4_2));
        assert!(old.contains("    rocks.color_tag = 'NONE'\n"));
        assert!(!old.contains("default_group_node_width"));

        let (new, _) = script(&rocks_document(V4_3));
        assert!(new.contains("    rocks.default_group_node_width = 140.0\n"));
    }

    #[test]
    fn unknown_node_category_is_reported_and_skipped() {
        let mut doc = rocks_document(V4_2);
        let rocks = doc.node_trees.get_mut(&TreeId::from("Rocks")).unwrap();
        rocks
            .nodes
            .push(Node::new("Mystery", "GeometryNodeFromTheFuture"));
        rocks.links.extend([
            Link::new("Group Input", "Socket_0", "Mystery", "Geometry"),
            Link::new("Mystery", "Geometry", "Join Geometry", "Geometry"),
            Link::new("Ghost", "Geometry", "Group Output", "Socket_1"),
        ]);

        let (code, diagnostics) = script(&doc);
        assert!(code.contains("    mystery = rocks.nodes.new(\"GeometryNodeFromTheFuture\")\n"));
        assert!(code.contains("    mystery.location = (0.0, 0.0)\n"));

        // Every link between known sockets is still emitted.
        for survivor in [
            "# scatter_1.Socket_1 -> join_geometry.Geometry",
            "# group_input.Socket_0 -> scatter_1.Socket_0",
            "# join_geometry.Geometry -> group_output.Socket_1",
            "# group_input.Socket_0 -> join_geometry.Geometry",
        ] {
            position(&code, survivor);
        }
        assert_eq!(code.matches("    rocks.links.new(\n").count(), 4);
        assert!(!code.contains("rocks.nodes[\"Mystery\"]"));
        assert!(!code.contains("Ghost"));

        let warnings: Vec<_> = diagnostics.messages(Severity::Warning).collect();
        assert_eq!(
            warnings,
            [
                "Couldn't find GeometryNodeFromTheFuture in settings. Your Blender version may not be supported",
                "Link in Rocks references missing socket Geometry on node Mystery",
                "Link in Rocks references missing socket Geometry on node Mystery",
                "Link in Rocks references missing node Ghost",
            ]
        );
    }

    #[test]
    fn node_categories_newer_than_the_host_are_skipped() {
        let mut doc = rocks_document(V4_2);
        let rocks = doc.node_trees.get_mut(&TreeId::from("Rocks")).unwrap();
        rocks.nodes.push(
            Node::new("List", "GeometryNodeList")
                .with_setting("data_type", SettingValue::Enum(String::from("FLOAT"))),
        );

        let (code, diagnostics) = script(&doc);
        assert!(code.contains("    list = rocks.nodes.new(\"GeometryNodeList\")\n"));
        assert!(!code.contains("list.data_type"));
        let warnings: Vec<_> = diagnostics.messages(Severity::Warning).collect();
        assert_eq!(warnings, ["GeometryNodeList is not available in Blender 4.2.0"]);
    }

    #[test]
    fn run_summary_is_reported_as_info() {
        let (_, diagnostics) = script(&rocks_document(V4_2));
        let info: Vec<_> = diagnostics.messages(Severity::Info).collect();
        assert_eq!(info, ["Generated 2 node trees for 1 roots"]);
    }

    #[test]
    fn menu_defaults_and_viewer_items_wait_for_links() {
        let mut doc = rocks_document(V5_0);
        let rocks = doc.node_trees.get_mut(&TreeId::from("Rocks")).unwrap();
        let mut mode = InterfaceSocket::new("Mode", InOut::Input, "NodeSocketMenu");
        mode.default_value = Some(SocketValue::Menu(String::from("Smooth")));
        rocks.interface.push(InterfaceItem {
            index: 0,
            parent: None,
            kind: InterfaceItemKind::Socket(mode),
        });
        let mut item = CollectionItem::new("GEOMETRY", "Geometry");
        item.auto_remove = Some(false);
        rocks.nodes.push(
            Node::new("Viewer", "GeometryNodeViewer")
                .with_setting("active_index", SettingValue::Int(0))
                .with_setting("domain", SettingValue::Enum(String::from("AUTO")))
                .with_setting("ui_shortcut", SettingValue::Int(0))
                .with_setting("viewer_items", SettingValue::Items(vec![item])),
        );

        let (code, _) = script(&doc);
        let socket = position(&code, "    mode_socket = rocks.interface.new_socket(name=\"Mode\"");
        let items = position(&code, "    viewer.viewer_items.new('GEOMETRY', \"Geometry\")\n");
        let last_link = code.rfind("    rocks.links.new(\n").unwrap();
        let menu_default = position(&code, "    mode_socket.default_value = 'Smooth'\n");
        let auto_remove = position(&code, "    viewer.viewer_items[0].auto_remove = False\n");
        let done = position(&code, "    return rocks\n");

        assert!(socket < last_link);
        assert!(items < last_link);
        assert!(last_link < menu_default);
        assert!(last_link < auto_remove);
        assert!(menu_default < done && auto_remove < done);
    }

    #[test]
    fn docstrings_escape_tree_names() {
        let mut doc = rocks_document(V4_2);
        let scatter = doc.node_trees.get_mut(&TreeId::from("Scatter")).unwrap();
        scatter.name = String::from(r#"C:\New "x""#);

        let (code, _) = script(&doc);
        assert!(code.contains(r#"    """Initialize C:\\New \"x\" node group""""#));
    }

    #[test]
    fn constructor_names_never_collide_with_node_variables() {
        let mut doc = rocks_document(V4_2);
        let rocks = doc.node_trees.get_mut(&TreeId::from("Rocks")).unwrap();
        rocks.nodes.push(
            Node::new("Scatter Node Group", "GeometryNodeJoinGeometry")
                .with_input(geometry_socket("Geometry"))
                .with_output(geometry_socket("Geometry")),
        );

        let (code, _) = script(&doc);
        assert!(code.contains(
            "    scatter_node_group_1 = rocks.nodes.new(\"GeometryNodeJoinGeometry\")\n"
        ));
        assert!(!code.contains("    scatter_node_group = "));
        assert!(code.contains(
            "        node_trees[scatter_node_group] = scatter_node_group(node_trees)\n"
        ));
    }

    #[test]
    fn zone_defaults_wait_for_pairing() {
        let mut doc = rocks_document(V4_2);
        let rocks = doc.node_trees.get_mut(&TreeId::from("Rocks")).unwrap();
        let mut repeat_input = Node::new("Repeat Input", "GeometryNodeRepeatInput").with_input(
            Socket::new("Iterations", "NodeSocketInt").with_default(SocketValue::Int(3)),
        );
        repeat_input.paired_output = Some(String::from("Repeat Output"));
        let repeat_output = Node::new("Repeat Output", "GeometryNodeRepeatOutput")
            .with_setting("active_index", SettingValue::Int(0))
            .with_setting("inspection_index", SettingValue::Int(0))
            .with_setting(
                "repeat_items",
                SettingValue::Items(vec![CollectionItem::new("GEOMETRY", "Geometry")]),
            );
        rocks.nodes.push(repeat_input);
        rocks.nodes.push(repeat_output);

        let (code, _) = script(&doc);
        let created = position(&code, "repeat_output = rocks.nodes.new(\"GeometryNodeRepeatOutput\")");
        let paired = position(&code, "    repeat_input.pair_with_output(repeat_output)\n");
        let iterations = position(&code, "    repeat_input.inputs[0].default_value = 3\n");
        assert!(created < paired);
        assert!(paired < iterations);
        assert!(position(&code, "# Process zone input Repeat Input") < paired);
    }

    #[test]
    fn essentials_are_linked_instead_of_rebuilt() {
        let mut doc = rocks_document(V4_2);
        doc.host.datafiles_path = Some("/opt/blender/datafiles".into());
        let mut hair = NodeTree::new("Smooth Hair Curves", TreeKind::Geometry);
        hair.library = Some(Library {
            filepath: "/opt/blender/datafiles/assets/geometry_nodes/smooth_curves.blend".into(),
        });
        doc.node_trees.insert(TreeId::from("Smooth Hair Curves"), hair);
        let rocks = doc.node_trees.get_mut(&TreeId::from("Rocks")).unwrap();
        rocks.nodes.push(group_node("Smooth", "Smooth Hair Curves"));

        let (code, _) = script(&doc);
        assert!(!code.contains("def smooth_hair_curves_node_group"));
        assert!(code.contains("    lib_relpath = \"assets/geometry_nodes/smooth_curves.blend\"\n"));
        assert!(code.contains("            data_dst.node_groups.append(\"Smooth Hair Curves\")\n"));
        assert!(code.contains(
            "    smooth.node_tree = node_trees.get((\"assets/geometry_nodes/smooth_curves.blend\", \"Smooth Hair Curves\"))\n"
        ));
        let loaded = position(&code, "datafiles_path = bpy.utils.system_resource('DATAFILES')");
        assert!(loaded < position(&code, "rocks = bpy.data.node_groups.new("));

        let options = ExportOptions::script().with_external_groups(false);
        let report = export_document_with_options(&doc, &options).unwrap();
        let code = report.script().unwrap();
        assert!(code.contains("def smooth_hair_curves_node_group"));
        assert!(!code.contains("datafiles_path"));
    }

    #[test]
    fn layout_toggles_skip_their_stages() {
        let doc = rocks_document(V4_2);
        let options = ExportOptions::script()
            .with_node_locations(false)
            .with_node_dimensions(false);
        let report = export_document_with_options(&doc, &options).unwrap();
        let code = report.script().unwrap();
        assert!(!code.contains("# Set locations"));
        assert!(!code.contains(".width, "));

        let (code, _) = script(&doc);
        assert!(code.contains("    join_geometry.width, join_geometry.height = 140.0, 100.0\n"));
    }

    #[test]
    fn preconditions_cancel_the_run() {
        let doc = rocks_document(HostVersion::new(4, 1, 0));
        assert!(matches!(
            export_document(&doc),
            Err(ExportError::UnsupportedVersion { .. })
        ));
        let doc = rocks_document(HostVersion::new(5, 1, 0));
        assert!(matches!(
            export_document(&doc),
            Err(ExportError::UnsupportedVersion { .. })
        ));

        let doc = rocks_document(V4_2);
        let mut options = ExportOptions::script();
        options.mode = ExportMode::Package;
        assert!(matches!(
            export_document_with_options(&doc, &options),
            Err(ExportError::MissingDestination)
        ));

        let mut options = ExportOptions::package("/tmp/unused");
        options.package.menu_id = String::from("not a menu");
        assert!(matches!(
            export_document_with_options(&doc, &options),
            Err(ExportError::InvalidMenu(_))
        ));

        let mut with_menus = doc.clone();
        with_menus.host.menus = vec![String::from("NODE_MT_add")];
        let options = ExportOptions::package("/tmp/unused");
        assert!(matches!(
            export_document_with_options(&with_menus, &options),
            Err(ExportError::InvalidMenu(menu)) if menu == "VIEW3D_MT_object"
        ));

        let mut empty = doc;
        empty.roots.clear();
        assert!(matches!(
            export_document(&empty),
            Err(ExportError::NothingToExport)
        ));
    }

    #[test]
    fn package_export_writes_an_installable_layout() {
        let dir = tempfile::tempdir().unwrap();
        let doc = rocks_document(V4_2);
        let options = ExportOptions::package(dir.path());

        let report = export_document_with_options(&doc, &options).unwrap();
        let package = report.package().unwrap();
        assert_eq!(package.dir, dir.path().join("rocks"));

        let init = &package.file("__init__.py").unwrap().contents;
        assert!(init.starts_with("bl_info = {\n    \"name\" : \"Rocks\",\n"));
        assert!(init.contains("    \"blender\" : (4, 2, 0),\n"));
        assert!(init.contains("from . import rocks\n"));
        assert!(init.contains("class ROCKS_OT_rocks(bpy.types.Operator):\n"));
        assert!(init.contains("    bl_idname = \"rocks.rocks\"\n"));
        assert!(init.contains(
            "        if rocks.rocks_1_node_group not in node_trees:\n            node_trees[rocks.rocks_1_node_group] = rocks.rocks_1_node_group(node_trees)\n        return {'FINISHED'}\n"
        ));
        assert!(init.contains("    self.layout.operator(ROCKS_OT_rocks.bl_idname)\n"));
        assert!(init.contains("classes = [ROCKS_OT_rocks]\n"));
        assert!(init.contains("    bpy.types.VIEW3D_MT_object.append(menu_func)\n"));

        let module = &package.file("rocks.py").unwrap().contents;
        assert!(module.contains("def scatter_node_group("));
        assert!(module.contains("def rocks_1_node_group("));
        assert!(module.contains("    rocks_1 = bpy.data.node_groups.new("));
        assert!(package.file("geometry_common.py").is_none());

        let manifest = &package.file("blender_manifest.toml").unwrap().contents;
        assert!(manifest.contains("id = \"rocks\"\n"));
        assert!(manifest.contains("blender_version_min = \"4.2.0\"\n"));
        assert!(manifest.contains("license = [\"SPDX:GPL-3.0-or-later\"]\n"));
        assert!(package.file("LICENSE").is_some());

        let written = package.write().unwrap();
        assert!(written.join("__init__.py").is_file());
        assert!(written.join("rocks.py").is_file());
        assert!(written.join("blender_manifest.toml").is_file());
    }

    #[test]
    fn package_module_names_stay_free_for_imports() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = Document::default();
        doc.host.version = V4_2;
        for name in ["First", "Second"] {
            let mut tree = NodeTree::new(name, TreeKind::Geometry);
            tree.nodes.push(group_node("Shared", "Shared"));
            doc.node_trees.insert(TreeId::from(name), tree);
            doc.roots.push(RootObject {
                name: String::from(name),
                kind: RootKind::GeometryNodeGroup,
                node_tree: Some(TreeId::from(name)),
                light_type: None,
            });
        }
        let second = doc.node_trees.get_mut(&TreeId::from("Second")).unwrap();
        second
            .nodes
            .push(Node::new("Geometry Common", "GeometryNodeJoinGeometry"));
        doc.node_trees.insert(
            TreeId::from("Shared"),
            NodeTree::new("Shared", TreeKind::Geometry),
        );

        let report = export_document_with_options(&doc, &ExportOptions::package(dir.path())).unwrap();
        let package = report.package().unwrap();
        assert!(package.file("geometry_common.py").is_some());

        let module = &package.file("second.py").unwrap().contents;
        assert!(module.contains("from . import geometry_common\n"));
        assert!(module.contains("    second_1 = bpy.data.node_groups.new("));
        assert!(module.contains(
            "    geometry_common_1 = second_1.nodes.new(\"GeometryNodeJoinGeometry\")\n"
        ));
        assert!(!module.contains("    geometry_common = "));
        assert!(module.contains(
            "        node_trees[geometry_common.shared_node_group] = geometry_common.shared_node_group(node_trees)\n"
        ));

        let init = &package.file("__init__.py").unwrap().contents;
        assert!(init.contains("from . import first\n"));
        assert!(init.contains("first.first_1_node_group(node_trees)"));
        assert!(init.contains("second.second_1_node_group(node_trees)"));
    }
}
