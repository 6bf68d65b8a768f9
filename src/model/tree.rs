use super::{InterfaceItem, Link, Node};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeKind {
    Compositor,
    Geometry,
    Shader,
}

impl TreeKind {
    /// Host type name passed to `bpy.data.node_groups.new`.
    pub fn bl_idname(self) -> &'static str {
        match self {
            TreeKind::Compositor => "CompositorNodeTree",
            TreeKind::Geometry => "GeometryNodeTree",
            TreeKind::Shader => "ShaderNodeTree",
        }
    }

    /// Node category that instantiates another tree of this kind.
    pub fn group_node_idname(self) -> &'static str {
        match self {
            TreeKind::Compositor => "CompositorNodeGroup",
            TreeKind::Geometry => "GeometryNodeGroup",
            TreeKind::Shader => "ShaderNodeGroup",
        }
    }

    /// Module holding trees shared by several roots in package mode.
    pub fn common_module(self) -> &'static str {
        match self {
            TreeKind::Compositor => "compositor_common",
            TreeKind::Geometry => "geometry_common",
            TreeKind::Shader => "shader_common",
        }
    }
}

/// The library file a linked tree lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub filepath: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryTreeSettings {
    pub is_modifier: bool,
    pub is_tool: bool,
    pub is_mode_object: Option<bool>,
    pub is_mode_edit: Option<bool>,
    pub is_mode_sculpt: Option<bool>,
    pub is_type_curve: Option<bool>,
    pub is_type_mesh: Option<bool>,
    pub is_type_point_cloud: Option<bool>,
    pub use_wait_for_click: bool,
    pub show_modifier_manage_panel: bool,
}

impl GeometryTreeSettings {
    /// Tool flags that were captured, in emission order.
    pub fn tool_flags(&self) -> impl Iterator<Item = (&'static str, bool)> {
        [
            ("is_mode_object", self.is_mode_object),
            ("is_mode_edit", self.is_mode_edit),
            ("is_mode_sculpt", self.is_mode_sculpt),
            ("is_type_curve", self.is_type_curve),
            ("is_type_mesh", self.is_type_mesh),
            ("is_type_point_cloud", self.is_type_point_cloud),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositorTreeSettings {
    pub chunk_size: Option<String>,
    pub edit_quality: Option<String>,
    pub execution_mode: Option<String>,
    pub precision: Option<String>,
    pub render_quality: Option<String>,
    pub use_groupnode_buffer: Option<bool>,
    pub use_opencl: Option<bool>,
    pub use_two_pass: Option<bool>,
    pub use_viewer_border: Option<bool>,
}

impl CompositorTreeSettings {
    pub fn enums(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("chunk_size", &self.chunk_size),
            ("edit_quality", &self.edit_quality),
            ("execution_mode", &self.execution_mode),
            ("precision", &self.precision),
            ("render_quality", &self.render_quality),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().filter(|v| !v.is_empty()).map(|v| (name, v)))
    }

    /// Boolean settings that are switched on.
    pub fn enabled_flags(&self) -> impl Iterator<Item = &'static str> {
        [
            ("use_groupnode_buffer", self.use_groupnode_buffer),
            ("use_opencl", self.use_opencl),
            ("use_two_pass", self.use_two_pass),
            ("use_viewer_border", self.use_viewer_border),
        ]
        .into_iter()
        .filter(|(_, value)| *value == Some(true))
        .map(|(name, _)| name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeSettings {
    pub color_tag: String,
    pub description: String,
    pub default_group_node_width: f32,
    pub geometry: GeometryTreeSettings,
    pub compositor: CompositorTreeSettings,
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            color_tag: String::from("NONE"),
            description: String::new(),
            default_group_node_width: 140.0,
            geometry: GeometryTreeSettings::default(),
            compositor: CompositorTreeSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTree {
    pub name: String,
    pub kind: TreeKind,
    /// Set when the tree is linked from another file.
    #[serde(default)]
    pub library: Option<Library>,
    #[serde(default)]
    pub settings: TreeSettings,
    /// Interface items in the host's `items_tree` order.
    #[serde(default)]
    pub interface: Vec<InterfaceItem>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl NodeTree {
    pub fn new(name: impl Into<String>, kind: TreeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            library: None,
            settings: TreeSettings::default(),
            interface: Vec::new(),
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Whether any link ends at the given input socket.
    pub fn has_link_into(&self, node: &str, socket: &str) -> bool {
        self.links
            .iter()
            .any(|l| l.to_node.as_deref() == Some(node) && l.to_socket == socket)
    }

    /// Group nodes of this tree's kind.
    pub fn group_nodes(&self) -> impl Iterator<Item = &Node> {
        let idname = self.kind.group_node_idname();
        self.nodes.iter().filter(move |n| n.bl_idname == idname)
    }
}
