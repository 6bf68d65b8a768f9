use super::{Scalar, SocketValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InOut {
    Input,
    Output,
}

impl InOut {
    pub fn as_enum(self) -> &'static str {
        match self {
            InOut::Input => "INPUT",
            InOut::Output => "OUTPUT",
        }
    }
}

/// One entry of a tree's public interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceItem {
    /// Position in the host's flattened `items_tree`.
    pub index: usize,
    /// Index of the containing panel, `None` for top-level items.
    #[serde(default)]
    pub parent: Option<usize>,
    #[serde(flatten)]
    pub kind: InterfaceItemKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "item_type", rename_all = "snake_case")]
pub enum InterfaceItemKind {
    Socket(InterfaceSocket),
    Panel(InterfacePanel),
}

impl InterfaceItem {
    pub fn name(&self) -> &str {
        match &self.kind {
            InterfaceItemKind::Socket(s) => &s.name,
            InterfaceItemKind::Panel(p) => &p.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceSocket {
    pub name: String,
    pub in_out: InOut,
    /// Full socket type including subtype, e.g. `NodeSocketFloatDistance`.
    pub bl_socket_idname: String,
    #[serde(default)]
    pub dimensions: Option<u8>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub default_value: Option<SocketValue>,
    #[serde(default)]
    pub min_value: Option<Scalar>,
    #[serde(default)]
    pub max_value: Option<Scalar>,
    #[serde(default)]
    pub default_attribute_name: String,
    #[serde(default = "default_domain")]
    pub attribute_domain: String,
    #[serde(default)]
    pub hide_value: bool,
    #[serde(default)]
    pub hide_in_modifier: bool,
    #[serde(default)]
    pub force_non_field: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub layer_selection_field: bool,
    #[serde(default)]
    pub is_inspect_output: bool,
    #[serde(default)]
    pub default_input: Option<String>,
    #[serde(default)]
    pub is_panel_toggle: bool,
    #[serde(default)]
    pub menu_expanded: bool,
    #[serde(default)]
    pub structure_type: Option<String>,
    #[serde(default)]
    pub optional_label: bool,
}

fn default_domain() -> String {
    String::from("POINT")
}

impl InterfaceSocket {
    pub fn new(name: impl Into<String>, in_out: InOut, bl_socket_idname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            in_out,
            bl_socket_idname: bl_socket_idname.into(),
            dimensions: None,
            subtype: None,
            default_value: None,
            min_value: None,
            max_value: None,
            default_attribute_name: String::new(),
            attribute_domain: default_domain(),
            hide_value: false,
            hide_in_modifier: false,
            force_non_field: false,
            description: String::new(),
            layer_selection_field: false,
            is_inspect_output: false,
            default_input: None,
            is_panel_toggle: false,
            menu_expanded: false,
            structure_type: None,
            optional_label: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfacePanel {
    pub name: String,
    #[serde(default)]
    pub default_closed: bool,
    #[serde(default)]
    pub description: String,
}
