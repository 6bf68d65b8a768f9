use super::{Socket, TreeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single node of a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    /// Category identifier, the key into the attribute schema.
    pub bl_idname: String,
    #[serde(default)]
    pub label: String,
    /// Custom color; `Some` means `use_custom_color` is on.
    #[serde(default)]
    pub color: Option<[f32; 3]>,
    #[serde(default)]
    pub mute: bool,
    #[serde(default)]
    pub hide: bool,
    #[serde(default = "default_warning_propagation")]
    pub warning_propagation: String,
    /// Name of the frame node containing this node.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub location: [f32; 2],
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default)]
    pub inputs: Vec<Socket>,
    #[serde(default)]
    pub outputs: Vec<Socket>,
    /// Captured attribute values keyed by attribute name. A `null` value means
    /// the host reported the attribute as unset.
    #[serde(default)]
    pub settings: IndexMap<String, Option<SettingValue>>,
    /// For zone inputs, the name of the paired zone output node.
    #[serde(default)]
    pub paired_output: Option<String>,
}

fn default_warning_propagation() -> String {
    String::from("ALL")
}

fn default_width() -> f32 {
    140.0
}

fn default_height() -> f32 {
    100.0
}

impl Node {
    pub fn new(name: impl Into<String>, bl_idname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bl_idname: bl_idname.into(),
            label: String::new(),
            color: None,
            mute: false,
            hide: false,
            warning_propagation: default_warning_propagation(),
            parent: None,
            location: [0.0, 0.0],
            width: default_width(),
            height: default_height(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            settings: IndexMap::new(),
            paired_output: None,
        }
    }

    pub fn with_setting(mut self, name: impl Into<String>, value: SettingValue) -> Self {
        self.settings.insert(name.into(), Some(value));
        self
    }

    pub fn with_input(mut self, socket: Socket) -> Self {
        self.inputs.push(socket);
        self
    }

    pub fn with_output(mut self, socket: Socket) -> Self {
        self.outputs.push(socket);
        self
    }

    /// The tree referenced through the `node_tree` attribute, if any.
    pub fn node_tree(&self) -> Option<&TreeId> {
        match self.settings.get("node_tree") {
            Some(Some(SettingValue::NodeTree(id))) => Some(id),
            _ => None,
        }
    }

    /// Position of the output socket with `identifier`.
    pub fn output_index(&self, identifier: &str) -> Option<usize> {
        self.outputs.iter().position(|s| s.identifier == identifier)
    }

    /// Position of the input socket with `identifier`.
    pub fn input_index(&self, identifier: &str) -> Option<usize> {
        self.inputs.iter().position(|s| s.identifier == identifier)
    }
}

/// A captured attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f32),
    String(String),
    Enum(String),
    EnumSet(Vec<String>),
    Vector(Vec<f32>),
    /// Reference to a datablock by name.
    Id(String),
    Image(ImageRef),
    ImageUser(ImageUser),
    ColorRamp(ColorRamp),
    CurveMapping(CurveMapping),
    NodeTree(TreeId),
    Items(Vec<CollectionItem>),
    ColorManagedDisplay(DisplaySettings),
    ColorManagedView(ViewSettings),
    /// Plain nested struct such as image format settings.
    Struct(IndexMap<String, SettingValue>),
}

impl SettingValue {
    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Int(_) => "int",
            SettingValue::Float(_) => "float",
            SettingValue::String(_) => "string",
            SettingValue::Enum(_) => "enum",
            SettingValue::EnumSet(_) => "enum set",
            SettingValue::Vector(_) => "vector",
            SettingValue::Id(_) => "datablock",
            SettingValue::Image(_) => "image",
            SettingValue::ImageUser(_) => "image user",
            SettingValue::ColorRamp(_) => "color ramp",
            SettingValue::CurveMapping(_) => "curve mapping",
            SettingValue::NodeTree(_) => "node tree",
            SettingValue::Items(_) => "items",
            SettingValue::ColorManagedDisplay(_) => "display settings",
            SettingValue::ColorManagedView(_) => "view settings",
            SettingValue::Struct(_) => "struct",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub name: String,
    #[serde(default = "default_image_source")]
    pub source: String,
    /// Absolute path of the image data on disk.
    #[serde(default)]
    pub filepath: Option<PathBuf>,
    #[serde(default = "default_colorspace")]
    pub colorspace: String,
    #[serde(default = "default_alpha_mode")]
    pub alpha_mode: String,
    #[serde(default = "default_true")]
    pub has_data: bool,
}

fn default_image_source() -> String {
    String::from("FILE")
}

fn default_colorspace() -> String {
    String::from("sRGB")
}

fn default_alpha_mode() -> String {
    String::from("STRAIGHT")
}

fn default_true() -> bool {
    true
}

impl ImageRef {
    /// File name the image is stored under inside a package.
    pub fn file_name(&self) -> String {
        self.filepath
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}.png", self.name))
    }

    /// Whether the image can be written to the package.
    pub fn is_saveable(&self) -> bool {
        matches!(self.source.as_str(), "FILE" | "GENERATED" | "TILED")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageUser {
    pub frame_current: i64,
    pub frame_duration: i64,
    pub frame_offset: i64,
    pub frame_start: i64,
    pub tile: i64,
    pub use_auto_refresh: bool,
    pub use_cyclic: bool,
}

impl ImageUser {
    /// Attribute assignments in emission order.
    pub fn fields(&self) -> [(&'static str, String); 7] {
        let py_bool = |b: bool| if b { "True" } else { "False" }.to_string();
        [
            ("frame_current", self.frame_current.to_string()),
            ("frame_duration", self.frame_duration.to_string()),
            ("frame_offset", self.frame_offset.to_string()),
            ("frame_start", self.frame_start.to_string()),
            ("tile", self.tile.to_string()),
            ("use_auto_refresh", py_bool(self.use_auto_refresh)),
            ("use_cyclic", py_bool(self.use_cyclic)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRamp {
    pub color_mode: String,
    pub hue_interpolation: String,
    pub interpolation: String,
    pub elements: Vec<ColorRampElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRampElement {
    pub position: f32,
    pub alpha: f32,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveMapping {
    pub extend: String,
    pub tone: String,
    pub black_level: [f32; 3],
    pub white_level: [f32; 3],
    pub clip_min_x: f32,
    pub clip_min_y: f32,
    pub clip_max_x: f32,
    pub clip_max_y: f32,
    pub use_clip: bool,
    pub curves: Vec<CurveMap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveMap {
    pub points: Vec<CurveMapPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveMapPoint {
    pub location: [f32; 2],
    pub handle_type: String,
}

/// One entry of a growable item collection (bake items, switch items, …).
/// Only the fields relevant to the collection's kind are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionItem {
    pub name: String,
    pub socket_type: Option<String>,
    pub data_type: Option<String>,
    pub attribute_domain: Option<String>,
    pub domain: Option<String>,
    pub is_attribute: bool,
    pub description: String,
    pub structure_type: Option<String>,
    pub auto_remove: Option<bool>,
    pub override_node_format: Option<bool>,
    pub save_as_render: Option<bool>,
    pub vector_socket_dimensions: Option<u8>,
}

impl CollectionItem {
    pub fn new(socket_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            socket_type: Some(socket_type.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub display_device: String,
    #[serde(default)]
    pub emulation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub view_transform: String,
    pub look: String,
}
