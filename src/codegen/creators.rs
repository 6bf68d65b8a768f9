//! # Category-Specific Object Creators
//!
//! The compositor, geometry and shader generators differ only in how the root
//! container object is created before its base tree is populated, in a few
//! tree-level settings and in which nodes open a zone.

use super::literal::{py_bool, py_enum, py_str};
use super::writer::CodeWriter;
use super::NameAllocator;
use crate::model::{Node, NodeTree, RootKind, RootObject, SettingValue, TreeKind};
use crate::schema::{attr, NodeSpec, SettingKind};
use crate::version::{HostVersion, V4_3, V4_5, V5_0};

/// What a creator needs to write code.
pub struct CreatorContext<'w> {
    pub w: &'w mut CodeWriter,
    pub names: &'w mut NameAllocator,
    pub version: HostVersion,
}

pub trait ObjectCreator: Sync {
    /// Create the host object owning the base tree, returning the variable
    /// holding it. Bare node-group roots create nothing.
    fn create_object(&self, _ctx: &mut CreatorContext<'_>, _root: &RootObject) -> Option<String> {
        None
    }

    /// Bind `tree_var` to the node tree owned by the object in `obj_var`.
    fn bind_object_tree(
        &self,
        ctx: &mut CreatorContext<'_>,
        _root: &RootObject,
        obj_var: &str,
        _tree: &NodeTree,
        tree_var: &str,
    ) {
        ctx.w.line(format!("{tree_var} = {obj_var}.node_tree"));
    }

    /// Emit settings specific to this tree kind.
    fn tree_settings(&self, _ctx: &mut CreatorContext<'_>, _tree: &NodeTree, _tree_var: &str) {}

    /// Node categories that open a zone and must be paired with their output.
    fn zone_inputs(&self, version: HostVersion) -> Vec<&'static str>;

    /// A schema that replaces the table entry for `node`, if this kind
    /// handles the node specially.
    fn spec_override(&self, _node: &Node, _version: HostVersion) -> Option<&'static NodeSpec> {
        None
    }
}

/// Emit a fresh node group of the creator's kind bound to `tree_var`.
pub fn new_node_group(w: &mut CodeWriter, kind: TreeKind, tree: &NodeTree, tree_var: &str) {
    w.line(format!(
        "{tree_var} = bpy.data.node_groups.new(type={}, name={})",
        py_enum(kind.bl_idname()),
        py_str(&tree.name)
    ));
}

pub fn creator_for(kind: TreeKind) -> &'static dyn ObjectCreator {
    match kind {
        TreeKind::Compositor => &CompositorCreator,
        TreeKind::Geometry => &GeometryCreator,
        TreeKind::Shader => &ShaderCreator,
    }
}

pub struct CompositorCreator;

static COLOR_BALANCE_LGG: NodeSpec = NodeSpec::new(
    "CompositorNodeColorBalance",
    &[
        attr("correction_method", SettingKind::Enum),
        attr("gain", SettingKind::Color),
        attr("gamma", SettingKind::Color),
        attr("lift", SettingKind::Color),
    ],
);

static COLOR_BALANCE_OPS: NodeSpec = NodeSpec::new(
    "CompositorNodeColorBalance",
    &[
        attr("correction_method", SettingKind::Enum),
        attr("offset", SettingKind::Color),
        attr("offset_basis", SettingKind::Float),
        attr("power", SettingKind::Color),
        attr("slope", SettingKind::Color),
    ],
);

static COLOR_BALANCE_WHITEPOINT: NodeSpec = NodeSpec::new(
    "CompositorNodeColorBalance",
    &[
        attr("correction_method", SettingKind::Enum),
        attr("input_temperature", SettingKind::Float).since(V4_3),
        attr("input_tint", SettingKind::Float).since(V4_3),
        attr("output_temperature", SettingKind::Float).since(V4_3),
        attr("output_tint", SettingKind::Float).since(V4_3),
    ],
);

impl ObjectCreator for CompositorCreator {
    fn create_object(&self, ctx: &mut CreatorContext<'_>, root: &RootObject) -> Option<String> {
        if root.kind != RootKind::Scene {
            return None;
        }
        let w = &mut *ctx.w;
        w.line("# Generate unique scene name");
        w.line(format!("base_name = {}", py_str(&root.name)));
        w.line("end_name = base_name");
        w.line("if bpy.data.scenes.get(end_name) is not None:");
        w.nested("i = 1");
        w.nested("end_name = base_name + f\".{i:03d}\"");
        w.nested("while bpy.data.scenes.get(end_name) is not None:");
        w.line_at(w.level() + 2, "i += 1");
        w.line_at(w.level() + 2, "end_name = base_name + f\".{i:03d}\"");
        w.blank();
        w.line("bpy.ops.scene.new(type='NEW')");
        w.line("scene = bpy.context.scene");
        w.line("scene.name = end_name");
        w.line("scene.use_fake_user = True");
        w.line("bpy.context.window.scene = scene");
        w.blank();
        Some(String::from("scene"))
    }

    fn bind_object_tree(
        &self,
        ctx: &mut CreatorContext<'_>,
        _root: &RootObject,
        obj_var: &str,
        tree: &NodeTree,
        tree_var: &str,
    ) {
        if ctx.version >= V5_0 {
            ctx.w.line(format!(
                "{obj_var}.compositing_node_group = bpy.data.node_groups.new(type={}, name={})",
                py_enum(TreeKind::Compositor.bl_idname()),
                py_str(&tree.name)
            ));
            ctx.w.line(format!("{tree_var} = {obj_var}.compositing_node_group"));
        } else {
            ctx.w.line(format!("{obj_var}.use_nodes = True"));
            ctx.w.line(format!("{tree_var} = {obj_var}.node_tree"));
        }
    }

    fn tree_settings(&self, ctx: &mut CreatorContext<'_>, tree: &NodeTree, tree_var: &str) {
        let settings = &tree.settings.compositor;
        for (name, value) in settings.enums() {
            ctx.w.line(format!("{tree_var}.{name} = {}", py_enum(value)));
        }
        for name in settings.enabled_flags() {
            ctx.w.line(format!("{tree_var}.{name} = True"));
        }
    }

    fn zone_inputs(&self, _version: HostVersion) -> Vec<&'static str> {
        Vec::new()
    }

    /// Before 4.5 the color balance node exposes every correction method's
    /// inputs at once; only the active method's values are written so they
    /// don't overwrite each other.
    fn spec_override(&self, node: &Node, version: HostVersion) -> Option<&'static NodeSpec> {
        if node.bl_idname != "CompositorNodeColorBalance" || version >= V4_5 {
            return None;
        }
        match node.settings.get("correction_method") {
            Some(Some(SettingValue::Enum(method))) => match method.as_str() {
                "LIFT_GAMMA_GAIN" => Some(&COLOR_BALANCE_LGG),
                "OFFSET_POWER_SLOPE" => Some(&COLOR_BALANCE_OPS),
                "WHITEPOINT" => Some(&COLOR_BALANCE_WHITEPOINT),
                _ => None,
            },
            _ => None,
        }
    }
}

pub struct GeometryCreator;

impl ObjectCreator for GeometryCreator {
    fn tree_settings(&self, ctx: &mut CreatorContext<'_>, tree: &NodeTree, tree_var: &str) {
        let settings = &tree.settings.geometry;
        if settings.is_modifier {
            ctx.w.line(format!("{tree_var}.is_modifier = True"));
        }
        if settings.is_tool {
            ctx.w.line(format!("{tree_var}.is_tool = True"));
            for (flag, value) in settings.tool_flags() {
                ctx.w.line(format!("{tree_var}.{flag} = {}", py_bool(value)));
            }
        }
        if settings.use_wait_for_click {
            ctx.w.line(format!("{tree_var}.use_wait_for_click = True"));
        }
        if ctx.version >= V5_0 && settings.show_modifier_manage_panel {
            ctx.w.line(format!("{tree_var}.show_modifier_manage_panel = True"));
        }
    }

    fn zone_inputs(&self, version: HostVersion) -> Vec<&'static str> {
        let mut zones = vec!["GeometryNodeSimulationInput", "GeometryNodeRepeatInput"];
        if version >= V4_3 {
            zones.push("GeometryNodeForeachGeometryElementInput");
        }
        if version >= V5_0 {
            zones.push("NodeClosureInput");
        }
        zones
    }
}

pub struct ShaderCreator;

impl ObjectCreator for ShaderCreator {
    fn create_object(&self, ctx: &mut CreatorContext<'_>, root: &RootObject) -> Option<String> {
        let collection = match root.kind {
            RootKind::Material => "materials",
            RootKind::Light => "lights",
            RootKind::LineStyle => "linestyles",
            RootKind::World => "worlds",
            _ => return None,
        };
        let obj_var = ctx.names.allocate(&root.name);
        let name = py_str(&root.name);
        let w = &mut *ctx.w;

        if root.kind == RootKind::Light {
            let light_type = root.light_type.as_deref().unwrap_or("POINT");
            w.line(format!(
                "{obj_var} = bpy.data.lights.new(name={name}, type={})",
                py_enum(light_type)
            ));
        } else {
            w.line(format!("{obj_var} = bpy.data.{collection}.new(name={name})"));
        }

        let always_uses_nodes = matches!(root.kind, RootKind::Light | RootKind::LineStyle);
        if always_uses_nodes || ctx.version < V5_0 {
            w.line(format!("{obj_var}.use_nodes = True"));
        }

        if root.kind == RootKind::Light {
            w.line(format!(
                "light_obj = bpy.data.objects.new(name={name}, object_data={obj_var})"
            ));
            w.line("bpy.context.collection.objects.link(light_obj)");
        }
        w.blank();
        Some(obj_var)
    }

    fn zone_inputs(&self, version: HostVersion) -> Vec<&'static str> {
        if version >= V5_0 {
            vec!["GeometryNodeRepeatInput", "NodeClosureInput"]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Indentation;
    use crate::version::V4_2;

    fn run(version: HostVersion, f: impl FnOnce(&mut CreatorContext<'_>)) -> String {
        let mut w = CodeWriter::new(Indentation::Spaces4);
        let mut names = NameAllocator::new();
        let mut ctx = CreatorContext {
            w: &mut w,
            names: &mut names,
            version,
        };
        f(&mut ctx);
        w.finish()
    }

    fn root(name: &str, kind: RootKind) -> RootObject {
        RootObject {
            name: name.into(),
            kind,
            node_tree: None,
            light_type: None,
        }
    }

    #[test]
    fn material_uses_nodes_only_before_5_0() {
        let old = run(V4_2, |ctx| {
            ShaderCreator.create_object(ctx, &root("Rock", RootKind::Material));
        });
        assert!(old.contains("rock = bpy.data.materials.new(name=\"Rock\")"));
        assert!(old.contains("rock.use_nodes = True"));

        let new = run(V5_0, |ctx| {
            ShaderCreator.create_object(ctx, &root("Rock", RootKind::Material));
        });
        assert!(!new.contains("use_nodes"));
    }

    #[test]
    fn light_is_linked_into_the_scene() {
        let mut light = root("Key", RootKind::Light);
        light.light_type = Some("AREA".into());
        let code = run(V4_2, |ctx| {
            assert_eq!(ShaderCreator.create_object(ctx, &light).as_deref(), Some("key"));
        });
        assert!(code.contains("key = bpy.data.lights.new(name=\"Key\", type='AREA')"));
        assert!(code.contains("bpy.context.collection.objects.link(light_obj)"));
    }

    #[test]
    fn scene_tree_binding_depends_on_version() {
        let tree = NodeTree::new("Compositing", TreeKind::Compositor);
        let scene = root("Shot", RootKind::Scene);
        let old = run(V4_2, |ctx| {
            CompositorCreator.bind_object_tree(ctx, &scene, "scene", &tree, "compositing")
        });
        assert_eq!(old, "scene.use_nodes = True\ncompositing = scene.node_tree\n");

        let new = run(V5_0, |ctx| {
            CompositorCreator.bind_object_tree(ctx, &scene, "scene", &tree, "compositing")
        });
        assert!(new.starts_with("scene.compositing_node_group = bpy.data.node_groups.new("));
    }

    #[test]
    fn color_balance_override_follows_correction_method() {
        let node = Node::new("Color Balance", "CompositorNodeColorBalance")
            .with_setting("correction_method", SettingValue::Enum("OFFSET_POWER_SLOPE".into()));
        let spec = CompositorCreator.spec_override(&node, V4_3).unwrap();
        let names: Vec<_> = spec.attributes_for(V4_3).map(|a| a.name).collect();
        assert_eq!(names, ["correction_method", "offset", "offset_basis", "power", "slope"]);
        assert!(CompositorCreator.spec_override(&node, V4_5).is_none());
    }

    #[test]
    fn geometry_zones_grow_with_version() {
        assert_eq!(GeometryCreator.zone_inputs(V4_2).len(), 2);
        assert!(GeometryCreator.zone_inputs(V5_0).contains(&"NodeClosureInput"));
        assert!(ShaderCreator.zone_inputs(V4_2).is_empty());
    }
}
