//! # Attribute Schema
//!
//! Static description of every node category the generator understands: which
//! attributes a node of that category carries, how each attribute value is
//! encoded, and the host-version window in which the attribute exists.
//!
//! An attribute is emitted for a target version `v` only when
//! `v ∈ [max(attr.min, node.min), min(attr.max, node.max))`.

mod common;
mod compositor;
mod function;
mod geometry;
mod shader;

use crate::version::{HostVersion, MAX_SUPPORTED, MIN_SUPPORTED};
use std::collections::HashMap;
use std::sync::LazyLock;

/// How an attribute value is encoded into the generated program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    Bool,
    Color,
    Enum,
    EnumSet,
    Euler,
    Float,
    Int,
    String,
    Vec1,
    Vec2,
    Vec3,
    Vec4,
    BakeItems,
    CaptureAttributeItems,
    ClosureInputItems,
    ClosureOutputItems,
    ColorManagedDisplaySettings,
    ColorManagedViewSettings,
    ColorRamp,
    CombineBundleItems,
    CompositorFileOutputItems,
    CurveMapping,
    EnumDefinition,
    EnumItem,
    EvaluateClosureInputItems,
    EvaluateClosureOutputItems,
    FieldToGridItems,
    ForeachGeoElementGenerationItems,
    ForeachGeoElementInputItems,
    ForeachGeoElementMainItems,
    FormatStringItems,
    GeometryViewerItems,
    IndexSwitchItems,
    MenuSwitchItems,
    NodeTree,
    RepeatOutputItems,
    SeparateBundleItems,
    SimOutputItems,
    Image,
    ImageUser,
    Collection,
    CryptomatteEntries,
    FileSlots,
    Font,
    ImageFormatSettings,
    LayerSlots,
    Mask,
    Material,
    MovieClip,
    Object,
    ParticleSystem,
    Scene,
    Text,
    Texture,
}

impl SettingKind {
    /// Number of components for fixed-size vector kinds.
    pub fn vector_len(self) -> Option<usize> {
        match self {
            SettingKind::Vec1 => Some(1),
            SettingKind::Vec2 => Some(2),
            SettingKind::Vec3 | SettingKind::Euler => Some(3),
            SettingKind::Vec4 => Some(4),
            _ => None,
        }
    }

    /// The `bpy.data` collection that stores datablocks of this kind.
    pub fn data_collection(self) -> Option<&'static str> {
        match self {
            SettingKind::Collection => Some("collections"),
            SettingKind::Font => Some("fonts"),
            SettingKind::Image => Some("images"),
            SettingKind::Mask => Some("masks"),
            SettingKind::Material => Some("materials"),
            SettingKind::MovieClip => Some("movieclips"),
            SettingKind::Object => Some("objects"),
            SettingKind::Scene => Some("scenes"),
            SettingKind::Text => Some("texts"),
            SettingKind::Texture => Some("textures"),
            _ => None,
        }
    }

    /// Growable item collections that are cleared and repopulated.
    pub fn is_item_collection(self) -> bool {
        matches!(
            self,
            SettingKind::BakeItems
                | SettingKind::CaptureAttributeItems
                | SettingKind::ClosureInputItems
                | SettingKind::ClosureOutputItems
                | SettingKind::CombineBundleItems
                | SettingKind::CompositorFileOutputItems
                | SettingKind::EnumDefinition
                | SettingKind::EvaluateClosureInputItems
                | SettingKind::EvaluateClosureOutputItems
                | SettingKind::FieldToGridItems
                | SettingKind::ForeachGeoElementGenerationItems
                | SettingKind::ForeachGeoElementInputItems
                | SettingKind::ForeachGeoElementMainItems
                | SettingKind::FormatStringItems
                | SettingKind::GeometryViewerItems
                | SettingKind::IndexSwitchItems
                | SettingKind::MenuSwitchItems
                | SettingKind::RepeatOutputItems
                | SettingKind::SeparateBundleItems
                | SettingKind::SimOutputItems
        )
    }
}

/// One attribute of a node category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrSpec {
    pub name: &'static str,
    pub kind: SettingKind,
    pub min: HostVersion,
    pub max: HostVersion,
}

/// Shorthand used by the tables: an attribute valid for every supported version.
pub const fn attr(name: &'static str, kind: SettingKind) -> AttrSpec {
    AttrSpec {
        name,
        kind,
        min: MIN_SUPPORTED,
        max: MAX_SUPPORTED,
    }
}

impl AttrSpec {
    /// First version in which the attribute exists.
    pub const fn since(self, min: HostVersion) -> Self {
        AttrSpec { min, ..self }
    }

    /// First version in which the attribute no longer exists.
    pub const fn until(self, max: HostVersion) -> Self {
        AttrSpec { max, ..self }
    }
}

/// The schema of a node category.
#[derive(Debug, Clone, Copy)]
pub struct NodeSpec {
    pub idname: &'static str,
    pub attributes: &'static [AttrSpec],
    pub min: HostVersion,
    pub max: HostVersion,
}

impl NodeSpec {
    pub const fn new(idname: &'static str, attributes: &'static [AttrSpec]) -> Self {
        NodeSpec {
            idname,
            attributes,
            min: MIN_SUPPORTED,
            max: MAX_SUPPORTED,
        }
    }

    pub const fn since(self, min: HostVersion) -> Self {
        NodeSpec { min, ..self }
    }

    pub const fn until(self, max: HostVersion) -> Self {
        NodeSpec { max, ..self }
    }

    /// Whether the node category itself exists in `version`.
    pub fn exists_in(&self, version: HostVersion) -> bool {
        version >= self.min && version < self.max
    }

    /// Whether `attr` is valid for `version`, intersecting the attribute window
    /// with this node's window.
    pub fn is_valid(&self, attr: &AttrSpec, version: HostVersion) -> bool {
        let min = attr.min.max(self.min);
        let max = attr.max.min(self.max);
        version >= min && version < max
    }

    /// Attributes valid for `version`, in declaration order.
    pub fn attributes_for(&self, version: HostVersion) -> impl Iterator<Item = &'static AttrSpec> + '_ {
        self.attributes
            .iter()
            .filter(move |attr| self.is_valid(attr, version))
    }
}

static INDEX: LazyLock<HashMap<&'static str, &'static NodeSpec>> = LazyLock::new(|| {
    let tables = [
        common::NODES,
        compositor::NODES,
        function::NODES,
        geometry::NODES,
        shader::NODES,
    ];
    let mut index = HashMap::new();
    for spec in tables.into_iter().flatten() {
        index.insert(spec.idname, spec);
    }
    tracing::debug!("[SCHEMA] Indexed {} node categories", index.len());
    index
});

/// Look up the schema of a node category.
pub fn lookup(idname: &str) -> Option<&'static NodeSpec> {
    INDEX.get(idname).copied()
}

/// Number of node categories described by the tables.
pub fn len() -> usize {
    INDEX.len()
}

/// Attributes of `idname` valid for `version`, or `None` for an unknown category.
pub fn attributes(idname: &str, version: HostVersion) -> Option<Vec<&'static AttrSpec>> {
    lookup(idname).map(|spec| spec.attributes_for(version).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::{V4_3, V4_5, V5_0};

    static WINDOWED: NodeSpec = NodeSpec::new(
        "TestNode",
        &[
            attr("always", SettingKind::Bool),
            attr("legacy", SettingKind::Float).until(V4_5),
            attr("modern", SettingKind::Enum).since(V4_5),
        ],
    );

    static NARROW_NODE: NodeSpec =
        NodeSpec::new("NarrowNode", &[attr("wide", SettingKind::Int).until(V5_0)]).since(V4_3);

    fn names(spec: &NodeSpec, version: HostVersion) -> Vec<&'static str> {
        spec.attributes_for(version).map(|a| a.name).collect()
    }

    #[test]
    fn attribute_window_excludes_upper_bound() {
        assert_eq!(names(&WINDOWED, HostVersion::new(4, 6, 0)), ["always", "modern"]);
        assert_eq!(names(&WINDOWED, V4_3), ["always", "legacy"]);
        assert_eq!(names(&WINDOWED, V4_5), ["always", "modern"]);
    }

    #[test]
    fn node_window_intersects_attribute_window() {
        assert!(names(&NARROW_NODE, HostVersion::new(4, 2, 0)).is_empty());
        assert_eq!(names(&NARROW_NODE, HostVersion::new(4, 4, 0)), ["wide"]);
        assert!(names(&NARROW_NODE, V5_0).is_empty());
    }

    #[test]
    fn tables_are_indexed() {
        assert!(len() > 500);
        let mix = lookup("ShaderNodeMix").expect("mix node is described");
        assert!(mix.attributes.iter().any(|a| a.name == "data_type"));
        assert!(lookup("NotARealNode").is_none());
    }

    #[test]
    fn idnames_are_unique_across_tables() {
        let total = common::NODES.len()
            + compositor::NODES.len()
            + function::NODES.len()
            + geometry::NODES.len()
            + shader::NODES.len();
        assert_eq!(total, len());
    }

    #[test]
    fn versioned_attribute_from_tables() {
        let attrs = attributes("CompositorNodeColorBalance", V4_3).unwrap();
        assert!(attrs.iter().any(|a| a.name == "lift"));
        let attrs = attributes("CompositorNodeColorBalance", V5_0).unwrap();
        assert!(!attrs.iter().any(|a| a.name == "lift"));
        assert!(!attrs.iter().any(|a| a.name == "correction_method"));
    }
}
