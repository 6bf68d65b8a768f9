use super::ImageRef;
use serde::{Deserialize, Serialize};

/// An input or output socket of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Socket {
    pub identifier: String,
    pub name: String,
    /// Socket type tag, e.g. `NodeSocketFloatFactor`.
    pub bl_idname: String,
    #[serde(default)]
    pub is_linked: bool,
    #[serde(default)]
    pub hide: bool,
    #[serde(default)]
    pub is_unavailable: bool,
    #[serde(default)]
    pub default_value: Option<SocketValue>,
}

impl Socket {
    pub fn new(identifier: impl Into<String>, bl_idname: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            name: identifier.clone(),
            identifier,
            bl_idname: bl_idname.into(),
            is_linked: false,
            hide: false,
            is_unavailable: false,
            default_value: None,
        }
    }

    pub fn with_default(mut self, value: SocketValue) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// A socket default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocketValue {
    Bool(bool),
    Int(i64),
    Float(f32),
    /// Vectors, rotations and colors.
    Vector(Vec<f32>),
    String(String),
    /// Selected menu item.
    Menu(String),
    /// Name of a referenced datablock (object, material, collection, texture).
    Id(String),
    Image(ImageRef),
}

/// A numeric bound that may be integral or floating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}
