//! # Node Graph Model
//!
//! Read-only snapshot of the host's node graphs, captured for one export run.
//! The snapshot is plain data deserialized from JSON; the generator never
//! mutates it.

mod interface;
mod link;
mod node;
mod socket;
mod tree;

pub use interface::{InOut, InterfaceItem, InterfaceItemKind, InterfacePanel, InterfaceSocket};
pub use link::Link;
pub use node::{
    CollectionItem, ColorRamp, ColorRampElement, CurveMap, CurveMapPoint, CurveMapping,
    DisplaySettings, ImageRef, ImageUser, Node, SettingValue, ViewSettings,
};
pub use socket::{Scalar, Socket, SocketValue};
pub use tree::{CompositorTreeSettings, GeometryTreeSettings, Library, NodeTree, TreeKind, TreeSettings};

use crate::error::{ExportError, Result};
use crate::version::HostVersion;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Identity of a node tree within a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreeId(pub String);

impl TreeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TreeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Facts about the host application the snapshot was taken from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostInfo {
    pub version: HostVersion,
    /// The host's bundled `datafiles` directory, used to recognise
    /// essentials libraries.
    pub datafiles_path: Option<PathBuf>,
    /// Menu classes known to the host. Empty means "don't check".
    pub menus: Vec<String>,
}

/// Category of an exported root object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootKind {
    CompositorNodeGroup,
    Scene,
    GeometryNodeGroup,
    Light,
    LineStyle,
    Material,
    ShaderNodeGroup,
    World,
}

impl RootKind {
    /// The kind of node tree this root owns.
    pub fn tree_kind(self) -> TreeKind {
        match self {
            RootKind::CompositorNodeGroup | RootKind::Scene => TreeKind::Compositor,
            RootKind::GeometryNodeGroup => TreeKind::Geometry,
            RootKind::Light
            | RootKind::LineStyle
            | RootKind::Material
            | RootKind::ShaderNodeGroup
            | RootKind::World => TreeKind::Shader,
        }
    }

    /// Whether the root is a concrete host object rather than a bare node group.
    pub fn is_object(self) -> bool {
        !matches!(
            self,
            RootKind::CompositorNodeGroup | RootKind::GeometryNodeGroup | RootKind::ShaderNodeGroup
        )
    }
}

/// One object selected for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootObject {
    pub name: String,
    pub kind: RootKind,
    /// The object's base node tree.
    pub node_tree: Option<TreeId>,
    /// Light type for [`RootKind::Light`] roots, e.g. `POINT`.
    #[serde(default)]
    pub light_type: Option<String>,
}

/// A complete export input: the roots to export plus every node tree they
/// can reach.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub host: HostInfo,
    pub roots: Vec<RootObject>,
    pub node_trees: IndexMap<TreeId, NodeTree>,
}

impl Document {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let document: Document = serde_json::from_str(text)?;
        tracing::debug!(
            "[BNTC] Parsed document: {} roots, {} node trees",
            document.roots.len(),
            document.node_trees.len()
        );
        Ok(document)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ExportError::read_file(path, e))?;
        Self::from_json_str(&text)
    }

    pub fn tree(&self, id: &TreeId) -> Option<&NodeTree> {
        self.node_trees.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn parses_minimal_document() {
        let doc = Document::from_json_str(indoc! {r#"
            {
                "host": { "version": "4.4", "datafiles_path": "/opt/blender/datafiles" },
                "roots": [
                    { "name": "Rock", "kind": "material", "node_tree": "Shader Nodetree" }
                ],
                "node_trees": {
                    "Shader Nodetree": {
                        "name": "Shader Nodetree",
                        "kind": "shader",
                        "nodes": [
                            {
                                "name": "Principled BSDF",
                                "bl_idname": "ShaderNodeBsdfPrincipled",
                                "location": [10.0, 300.0],
                                "settings": {
                                    "distribution": { "enum": "MULTI_GGX" },
                                    "subsurface_method": null
                                }
                            }
                        ]
                    }
                }
            }
        "#})
        .unwrap();

        assert_eq!(doc.host.version, crate::version::V4_4);
        assert_eq!(doc.roots[0].kind.tree_kind(), TreeKind::Shader);
        let tree = doc.tree(&TreeId::from("Shader Nodetree")).unwrap();
        let node = &tree.nodes[0];
        assert_eq!(
            node.settings.get("distribution"),
            Some(&Some(SettingValue::Enum("MULTI_GGX".into())))
        );
        assert_eq!(node.settings.get("subsurface_method"), Some(&None));
        assert!(node.settings.get("missing").is_none());
    }

    #[test]
    fn object_roots() {
        assert!(RootKind::Material.is_object());
        assert!(RootKind::Scene.is_object());
        assert!(!RootKind::GeometryNodeGroup.is_object());
    }
}
