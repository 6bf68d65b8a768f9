//! Group interface emission: panels and sockets in the host's flattened
//! `items_tree` order, each panel followed by its children.

use super::literal::{py_double, py_enum, py_int, py_str};
use super::tree_codegen::TreeCodeGenerator;
use super::sockets::encode_socket_value;
use crate::model::{InterfaceItem, InterfaceItemKind, InterfacePanel, InterfaceSocket, Scalar, SocketValue};
use crate::version::{V4_4, V4_5, V5_0};
use std::collections::{HashMap, HashSet, VecDeque};

/// Interface socket types that carry no default value.
const NO_DEFAULT_SOCKETS: &[&str] = &[
    "NodeSocketClosure",
    "NodeSocketCollection",
    "NodeSocketGeometry",
    "NodeSocketImage",
    "NodeSocketMaterial",
    "NodeSocketObject",
    "NodeSocketShader",
    "NodeSocketTexture",
];

/// `new_socket` only accepts base socket types.
fn base_socket_type(idname: &str) -> &str {
    if idname.contains("Float") {
        "NodeSocketFloat"
    } else if idname.contains("Int") {
        "NodeSocketInt"
    } else if idname.contains("Vector") {
        "NodeSocketVector"
    } else {
        idname
    }
}

fn py_scalar(value: Scalar) -> String {
    match value {
        Scalar::Int(i) => py_int(i),
        Scalar::Float(f) => py_double(f),
    }
}

impl<'s, 'a> TreeCodeGenerator<'s, 'a> {
    pub(super) fn interface(&mut self) {
        let tree = self.tree;
        if tree.interface.is_empty() {
            return;
        }
        self.w.line(format!("# {} interface", self.tree_var));
        self.w.blank();

        let known: HashSet<usize> = tree.interface.iter().map(|item| item.index).collect();
        let mut panel_vars: HashMap<usize, String> = HashMap::new();
        let mut processed: HashSet<usize> = HashSet::new();
        let mut queue: VecDeque<&'a InterfaceItem> = tree.interface.iter().collect();
        let mut stalled = 0;

        while let Some(item) = queue.pop_front() {
            if processed.contains(&item.index) {
                continue;
            }

            let parent_var = match item.parent {
                None => None,
                Some(parent) if !known.contains(&parent) => {
                    self.session.diagnostics.warning(format!(
                        "Interface item {} of {} has an unknown parent panel",
                        item.name(),
                        tree.name
                    ));
                    processed.insert(item.index);
                    continue;
                }
                Some(parent) => match panel_vars.get(&parent) {
                    Some(var) => Some(var.clone()),
                    None => {
                        // Parent panel not emitted yet.
                        queue.push_back(item);
                        stalled += 1;
                        if stalled > queue.len() {
                            for item in queue.drain(..) {
                                self.session.diagnostics.warning(format!(
                                    "Couldn't place interface item {} of {}",
                                    item.name(),
                                    tree.name
                                ));
                            }
                        }
                        continue;
                    }
                },
            };
            stalled = 0;
            processed.insert(item.index);

            match &item.kind {
                InterfaceItemKind::Socket(socket) => {
                    self.interface_socket(socket, parent_var.as_deref());
                }
                InterfaceItemKind::Panel(panel) => {
                    let var = self.interface_panel(item, panel, parent_var.as_deref());
                    panel_vars.insert(item.index, var);
                    let children: Vec<_> = tree
                        .interface
                        .iter()
                        .filter(|child| child.parent == Some(item.index))
                        .collect();
                    for child in children.into_iter().rev() {
                        queue.push_front(child);
                    }
                }
            }
        }
        self.w.blank();
    }

    fn interface_panel(
        &mut self,
        item: &InterfaceItem,
        panel: &InterfacePanel,
        parent_var: Option<&str>,
    ) -> String {
        let tree_var = self.tree_var.clone();
        let var = self.session.names.allocate(&format!("{}_panel", panel.name));

        self.w.line(format!("# Panel {}", panel.name));
        let closed = if panel.default_closed {
            ", default_closed=True"
        } else {
            ""
        };
        self.w.line(format!(
            "{var} = {tree_var}.interface.new_panel({}{closed})",
            py_str(&panel.name)
        ));
        if !panel.description.is_empty() {
            self.w
                .line(format!("{var}.description = {}", py_str(&panel.description)));
        }

        if let Some(parent_var) = parent_var {
            if self.session.version >= V4_4 {
                self.w.line(format!(
                    "{tree_var}.interface.move_to_parent({var}, {parent_var}, {})",
                    item.index
                ));
            } else {
                tracing::debug!(
                    "[CODEGEN] Panel {} can't be nested before 4.4, keeping it top-level",
                    panel.name
                );
            }
        }
        self.w.blank();
        var
    }

    fn interface_socket(&mut self, socket: &InterfaceSocket, parent_var: Option<&str>) {
        let tree_var = self.tree_var.clone();
        let version = self.session.version;
        let var = self.session.names.allocate(&format!("{}_socket", socket.name));

        self.w.line(format!("# Socket {}", socket.name));
        let parent = parent_var
            .map(|p| format!(", parent = {p}"))
            .unwrap_or_default();
        self.w.line(format!(
            "{var} = {tree_var}.interface.new_socket(name={}, in_out={}, socket_type={}{parent})",
            py_str(&socket.name),
            py_enum(socket.in_out.as_enum()),
            py_enum(base_socket_type(&socket.bl_socket_idname))
        ));

        if let Some(dimensions) = socket.dimensions.filter(|d| *d != 3) {
            self.w.line(format!("{var}.dimensions = {dimensions}"));
            self.w
                .line("# Get the socket again, as its default value may have been updated");
            self.w
                .line(format!("{var} = {tree_var}.interface.items_tree[{var}.index]"));
        }

        if self.session.options.embed_default_socket_values {
            self.interface_socket_defaults(socket, &var);
        }

        if let Some(subtype) = socket.subtype.as_deref().filter(|s| !s.is_empty()) {
            self.w.line(format!("{var}.subtype = {}", py_enum(subtype)));
        }
        if !socket.default_attribute_name.is_empty() {
            self.w.line(format!(
                "{var}.default_attribute_name = {}",
                py_str(&socket.default_attribute_name)
            ));
        }
        self.w.line(format!(
            "{var}.attribute_domain = {}",
            py_enum(&socket.attribute_domain)
        ));

        let flags = [
            ("hide_value", socket.hide_value),
            ("hide_in_modifier", socket.hide_in_modifier),
            ("force_non_field", socket.force_non_field),
        ];
        for (flag, set) in flags {
            if set {
                self.w.line(format!("{var}.{flag} = True"));
            }
        }
        if !socket.description.is_empty() {
            self.w
                .line(format!("{var}.description = {}", py_str(&socket.description)));
        }
        if socket.layer_selection_field {
            self.w.line(format!("{var}.layer_selection_field = True"));
        }
        if socket.is_inspect_output {
            self.w.line(format!("{var}.is_inspect_output = True"));
        }

        if version >= V4_5 {
            let default_input = socket.default_input.as_deref().unwrap_or("VALUE");
            self.w
                .line(format!("{var}.default_input = {}", py_enum(default_input)));
            if socket.is_panel_toggle {
                self.w.line(format!("{var}.is_panel_toggle = True"));
            }
            if socket.menu_expanded {
                self.w.line(format!("{var}.menu_expanded = True"));
            }
            let structure_type = socket.structure_type.as_deref().unwrap_or("AUTO");
            self.w
                .line(format!("{var}.structure_type = {}", py_enum(structure_type)));
        }
        if version >= V5_0 && socket.optional_label {
            self.w.line(format!("{var}.optional_label = True"));
        }
        self.w.blank();
    }

    fn interface_socket_defaults(&mut self, socket: &InterfaceSocket, var: &str) {
        if NO_DEFAULT_SOCKETS.contains(&socket.bl_socket_idname.as_str()) {
            return;
        }

        match &socket.default_value {
            Some(SocketValue::Menu(item)) => {
                if item.is_empty() {
                    self.session
                        .diagnostics
                        .warning(format!("No menu found for socket {}", socket.name));
                    return;
                }
                // Menu items only exist once the menu switch is linked.
                self.session
                    .defer(format!("{var}.default_value = {}", py_enum(item)));
                return;
            }
            Some(value) => {
                if let Some(literal) = encode_socket_value(&socket.bl_socket_idname, value) {
                    self.w.line(format!("{var}.default_value = {literal}"));
                }
            }
            None => {}
        }

        if let Some(min) = socket.min_value {
            self.w.line(format!("{var}.min_value = {}", py_scalar(min)));
        }
        if let Some(max) = socket.max_value {
            self.w.line(format!("{var}.max_value = {}", py_scalar(max)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::export_document;
    use crate::diagnostics::Severity;
    use crate::model::{Document, InOut, NodeTree, RootKind, RootObject, TreeId, TreeKind};
    use crate::version::{HostVersion, V4_2, V4_4};

    fn socket(index: usize, parent: Option<usize>, name: &str) -> InterfaceItem {
        InterfaceItem {
            index,
            parent,
            kind: InterfaceItemKind::Socket(InterfaceSocket::new(
                name,
                InOut::Input,
                "NodeSocketFloat",
            )),
        }
    }

    fn panel(index: usize, parent: Option<usize>, name: &str) -> InterfaceItem {
        InterfaceItem {
            index,
            parent,
            kind: InterfaceItemKind::Panel(InterfacePanel {
                name: name.into(),
                default_closed: false,
                description: String::new(),
            }),
        }
    }

    fn export(version: HostVersion, interface: Vec<InterfaceItem>) -> (String, Vec<String>) {
        let mut rocks = NodeTree::new("Rocks", TreeKind::Geometry);
        rocks.interface = interface;
        let mut doc = Document::default();
        doc.host.version = version;
        doc.roots.push(RootObject {
            name: String::from("Rocks"),
            kind: RootKind::GeometryNodeGroup,
            node_tree: Some(TreeId::from("Rocks")),
            light_type: None,
        });
        doc.node_trees.insert(TreeId::from("Rocks"), rocks);

        let report = export_document(&doc).unwrap();
        let warnings = report
            .diagnostics
            .messages(Severity::Warning)
            .map(str::to_string)
            .collect();
        (report.script().unwrap().to_string(), warnings)
    }

    #[test]
    fn socket_types_collapse_to_base_types() {
        assert_eq!(base_socket_type("NodeSocketFloatDistance"), "NodeSocketFloat");
        assert_eq!(base_socket_type("NodeSocketIntUnsigned"), "NodeSocketInt");
        assert_eq!(base_socket_type("NodeSocketVectorTranslation"), "NodeSocketVector");
        assert_eq!(base_socket_type("NodeSocketGeometry"), "NodeSocketGeometry");
    }

    #[test]
    fn scalars_keep_their_numeric_kind() {
        assert_eq!(py_scalar(Scalar::Int(-3)), "-3");
        assert_eq!(py_scalar(Scalar::Float(0.5)), "0.5");
    }

    #[test]
    fn children_listed_before_their_panel_are_requeued() {
        let (code, warnings) = export(
            V4_2,
            vec![socket(1, Some(0), "Scale"), panel(0, None, "Settings")],
        );

        let panel_line = code
            .find("    settings_panel = rocks.interface.new_panel(\"Settings\")\n")
            .unwrap();
        let socket_line = code
            .find("    scale_socket = rocks.interface.new_socket(name=\"Scale\", in_out='INPUT', socket_type='NodeSocketFloat', parent = settings_panel)\n")
            .unwrap();
        assert!(panel_line < socket_line);
        assert_eq!(code.matches("# Socket Scale").count(), 1);
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn repeated_items_are_emitted_once() {
        let (code, _) = export(
            V4_2,
            vec![
                panel(0, None, "Settings"),
                socket(1, Some(0), "Scale"),
                socket(1, Some(0), "Scale"),
            ],
        );
        assert_eq!(code.matches("# Panel Settings").count(), 1);
        assert_eq!(code.matches("# Socket Scale").count(), 1);
        assert!(!code.contains("scale_socket_1"));
    }

    #[test]
    fn nested_panels_are_moved_only_where_supported() {
        let items = vec![panel(0, None, "Outer"), panel(1, Some(0), "Inner")];

        let (new, _) = export(V4_4, items.clone());
        let outer = new.find("    outer_panel = rocks.interface.new_panel(\"Outer\")\n").unwrap();
        let inner = new.find("    inner_panel = rocks.interface.new_panel(\"Inner\")\n").unwrap();
        assert!(outer < inner);
        assert!(new.contains("    rocks.interface.move_to_parent(inner_panel, outer_panel, 1)\n"));

        let (old, warnings) = export(V4_2, items);
        assert!(old.contains("    inner_panel = rocks.interface.new_panel(\"Inner\")\n"));
        assert!(!old.contains("move_to_parent"));
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn items_under_a_socket_are_reported_instead_of_looping() {
        let (code, warnings) = export(
            V4_2,
            vec![socket(0, None, "Count"), socket(1, Some(0), "Size")],
        );
        assert!(code.contains("# Socket Count"));
        assert!(!code.contains("# Socket Size"));
        assert_eq!(warnings, ["Couldn't place interface item Size of Rocks"]);
    }

    #[test]
    fn unknown_parents_are_reported() {
        let (code, warnings) = export(
            V4_2,
            vec![socket(0, None, "Count"), socket(1, Some(7), "Size")],
        );
        assert!(code.contains("# Socket Count"));
        assert!(!code.contains("# Socket Size"));
        assert_eq!(warnings, ["Interface item Size of Rocks has an unknown parent panel"]);
    }
}
