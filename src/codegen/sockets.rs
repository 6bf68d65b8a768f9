//! Node socket defaults, hidden sockets and datablock lookups.

use super::literal::{py_bool, py_color, py_enum, py_float, py_int, py_str, py_vec};
use super::tree_codegen::TreeCodeGenerator;
use crate::model::{ImageRef, Node, SocketValue};

/// Input socket types whose defaults are never written.
const DONT_SET_DEFAULTS: &[&str] = &[
    "NodeSocketBundle",
    "NodeSocketClosure",
    "NodeSocketGeometry",
    "NodeSocketMatrix",
    "NodeSocketShader",
    "NodeSocketVirtual",
];

/// Nodes whose value lives on their first output socket.
const OUTPUT_DEFAULT_NODES: &[&str] = &[
    "CompositorNodeNormal",
    "CompositorNodeRGB",
    "CompositorNodeValue",
    "ShaderNodeNormal",
    "ShaderNodeRGB",
    "ShaderNodeValue",
];

/// Literal for a plain socket value. Datablock values have no literal form.
pub(super) fn encode_socket_value(socket_idname: &str, value: &SocketValue) -> Option<String> {
    match value {
        SocketValue::Bool(b) => Some(py_bool(*b).to_string()),
        SocketValue::Int(i) => Some(py_int(*i)),
        SocketValue::Float(f) => Some(py_float(*f)),
        SocketValue::Vector(v) if socket_idname == "NodeSocketColor" => py_color(v),
        SocketValue::Vector(v) => Some(py_vec(v)),
        SocketValue::String(s) => Some(py_str(s)),
        SocketValue::Menu(item) => Some(py_enum(item)),
        SocketValue::Id(_) | SocketValue::Image(_) => None,
    }
}

/// `bpy.data` collection holding datablocks for an ID socket type.
fn socket_data_collection(socket_idname: &str) -> Option<&'static str> {
    match socket_idname {
        "NodeSocketCollection" => Some("collections"),
        "NodeSocketImage" => Some("images"),
        "NodeSocketMaterial" => Some("materials"),
        "NodeSocketObject" => Some("objects"),
        "NodeSocketTexture" => Some("textures"),
        _ => None,
    }
}

impl<'s, 'a> TreeCodeGenerator<'s, 'a> {
    pub(super) fn hide_hidden_sockets(&mut self, node: &Node, var: &str) {
        for (i, socket) in node.inputs.iter().enumerate() {
            if socket.hide {
                self.w.line(format!("{var}.inputs[{i}].hide = True"));
            }
        }
        for (i, socket) in node.outputs.iter().enumerate() {
            if socket.hide {
                self.w.line(format!("{var}.outputs[{i}].hide = True"));
            }
        }
    }

    pub(super) fn socket_defaults(&mut self, node: &Node, var: &str) {
        self.input_defaults(node, var);
        self.output_defaults(node, var);
    }

    fn input_defaults(&mut self, node: &Node, var: &str) {
        if node.bl_idname == "NodeReroute" {
            return;
        }
        let tree = self.tree;
        let with_unavailable = self.session.options.emit_defaults_for_unavailable_sockets;

        for (i, input) in node.inputs.iter().enumerate() {
            if DONT_SET_DEFAULTS.contains(&input.bl_idname.as_str()) {
                continue;
            }
            if input.is_linked || tree.has_link_into(&node.name, &input.identifier) {
                continue;
            }
            if input.is_unavailable && !with_unavailable {
                continue;
            }
            let Some(value) = &input.default_value else {
                continue;
            };

            let target = format!("{var}.inputs[{i}].default_value");
            match value {
                SocketValue::Menu(item) if item.is_empty() => {}
                SocketValue::Image(image) => self.image_value(image, &target),
                SocketValue::Id(name) => match socket_data_collection(&input.bl_idname) {
                    Some(collection) => self.set_if_in_blend_file(name, &target, collection),
                    None => self.session.diagnostics.warning(format!(
                        "Socket {} of node {} holds a datablock but is a {}",
                        input.identifier, node.name, input.bl_idname
                    )),
                },
                value => {
                    if let Some(literal) = encode_socket_value(&input.bl_idname, value) {
                        self.w.line(format!("# {}", input.identifier));
                        self.w.line(format!("{target} = {literal}"));
                    }
                }
            }
        }
    }

    fn output_defaults(&mut self, node: &Node, var: &str) {
        if !OUTPUT_DEFAULT_NODES.contains(&node.bl_idname.as_str()) {
            return;
        }
        let Some(value) = node.outputs.first().and_then(|o| o.default_value.as_ref()) else {
            return;
        };
        let literal = match value {
            SocketValue::Vector(v) if node.bl_idname.ends_with("RGB") => py_color(v),
            value => encode_socket_value("", value),
        };
        if let Some(literal) = literal {
            self.w.line(format!("{var}.outputs[0].default_value = {literal}"));
        }
    }

    /// Assign a datablock by name if the host file has one.
    pub(super) fn set_if_in_blend_file(&mut self, name: &str, target: &str, collection: &str) {
        let name = py_str(name);
        self.w.line(format!("if {name} in bpy.data.{collection}:"));
        self.w
            .nested(format!("{target} = bpy.data.{collection}[{name}]"));
    }

    /// Assign an image, loading it from the package when images are packed.
    pub(super) fn image_value(&mut self, image: &ImageRef, target: &str) {
        if self.session.packs_images() && image.is_saveable() {
            if let Some(file_name) = self.session.save_image(image) {
                self.load_image(image, &file_name, target);
            }
            return;
        }
        self.set_if_in_blend_file(&image.name, target, "images");
    }

    fn load_image(&mut self, image: &ImageRef, file_name: &str, target: &str) {
        self.w.line(format!("# Load image {file_name}"));
        self.w
            .line("base_dir = os.path.dirname(os.path.abspath(__file__))");
        self.w.line(format!(
            "image_path = os.path.join(base_dir, \"imgs\", {})",
            py_str(file_name)
        ));
        self.w.line(format!(
            "{target} = bpy.data.images.load(image_path, check_existing = True)"
        ));
        self.w.line("# Set image settings");
        self.w
            .line(format!("{target}.source = {}", py_enum(&image.source)));
        self.w.line(format!(
            "{target}.colorspace_settings.name = {}",
            py_str(&image.colorspace)
        ));
        self.w
            .line(format!("{target}.alpha_mode = {}", py_enum(&image.alpha_mode)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_padded_to_four_components() {
        let value = SocketValue::Vector(vec![1.0, 0.5, 0.0]);
        assert_eq!(
            encode_socket_value("NodeSocketColor", &value).as_deref(),
            Some("(1.0, 0.5, 0.0, 1.0)")
        );
        assert_eq!(
            encode_socket_value("NodeSocketVector", &value).as_deref(),
            Some("(1.0, 0.5, 0.0)")
        );
    }

    #[test]
    fn datablocks_have_no_literal() {
        let value = SocketValue::Id("Cube".into());
        assert!(encode_socket_value("NodeSocketObject", &value).is_none());
        assert_eq!(socket_data_collection("NodeSocketObject"), Some("objects"));
        assert_eq!(socket_data_collection("NodeSocketFloat"), None);
    }

    #[test]
    fn menus_use_enum_quotes() {
        let value = SocketValue::Menu("Smooth".into());
        assert_eq!(encode_socket_value("NodeSocketMenu", &value).as_deref(), Some("'Smooth'"));
    }
}
