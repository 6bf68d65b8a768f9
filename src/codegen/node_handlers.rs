//! # Node Handlers
//!
//! Node creation and schema-driven attribute emission. Every attribute the
//! schema lists for a node category at the target version is looked up in the
//! captured settings and written with the encoder its [`SettingKind`] calls
//! for.
//!
//! Lookup outcomes:
//! - unknown category: warning, no settings are written
//! - attribute missing from the capture: warning, attribute skipped
//! - attribute captured as null: skipped silently
//! - value shape doesn't match the kind: warning, attribute skipped

use super::literal::{
    py_bool, py_color, py_enum, py_enum_set, py_float, py_int, py_str, py_vec, py_vec_n,
};
use super::tree_codegen::{relpath_str, write_memoized_call, TreeCodeGenerator};
use crate::model::{
    ColorRamp, CurveMapping, DisplaySettings, Node, SettingValue, TreeId, ViewSettings,
};
use crate::schema::{self, AttrSpec, SettingKind};
use crate::version::{V4_3, V4_5};
use indexmap::IndexMap;

impl<'s, 'a> TreeCodeGenerator<'s, 'a> {
    /// Create `node`, write its settings and the defaults that don't depend
    /// on zone pairing.
    pub(super) fn process_node(&mut self, node: &'a Node) {
        let var = self.create_node(node);
        self.node_settings(node, &var);

        let is_zone_input = self.is_zone_input(node);
        if is_zone_input {
            self.zone_inputs.push(node);
        }
        self.hide_hidden_sockets(node, &var);

        // Zone defaults are only valid once the zone is paired.
        if !is_zone_input && !self.zone_outputs.contains(node.name.as_str()) {
            self.socket_defaults(node, &var);
        }
        self.w.blank();
    }

    fn create_node(&mut self, node: &'a Node) -> String {
        let var = self.session.names.allocate(&node.name);
        self.node_vars.insert(node.name.as_str(), var.clone());

        self.w.line(format!("# Node {}", node.name));
        self.w.line(format!(
            "{var} = {}.nodes.new({})",
            self.tree_var,
            py_str(&node.bl_idname)
        ));
        if !node.label.is_empty() {
            self.w.line(format!("{var}.label = {}", py_str(&node.label)));
        }
        self.w.line(format!("{var}.name = {}", py_str(&node.name)));
        if let Some(color) = node.color {
            self.w.line(format!("{var}.use_custom_color = True"));
            self.w.line(format!("{var}.color = {}", py_vec(&color)));
        }
        if node.mute {
            self.w.line(format!("{var}.mute = True"));
        }
        if node.hide {
            self.w.line(format!("{var}.hide = True"));
        }
        if self.session.version >= V4_3 && node.warning_propagation != "ALL" {
            self.w.line(format!(
                "{var}.warning_propagation = {}",
                py_enum(&node.warning_propagation)
            ));
        }
        var
    }

    fn node_settings(&mut self, node: &'a Node, var: &str) {
        let version = self.session.version;
        let spec = match self.creator.spec_override(node, version) {
            Some(spec) => spec,
            None => match schema::lookup(&node.bl_idname) {
                Some(spec) => spec,
                None => {
                    self.session.diagnostics.warning(format!(
                        "Couldn't find {} in settings. Your Blender version may not be supported",
                        node.bl_idname
                    ));
                    return;
                }
            },
        };
        if !spec.exists_in(version) {
            self.session.diagnostics.warning(format!(
                "{} is not available in Blender {version}",
                node.bl_idname
            ));
            return;
        }

        if node.bl_idname == "CompositorNodeColorBalance" && version < V4_5 {
            if let Some(Some(SettingValue::Enum(method))) = node.settings.get("correction_method") {
                if !matches!(
                    method.as_str(),
                    "LIFT_GAMMA_GAIN" | "OFFSET_POWER_SLOPE" | "WHITEPOINT"
                ) {
                    self.session.diagnostics.error(format!(
                        "Unknown color balance correction method {method} on node {}",
                        node.name
                    ));
                }
            }
        }

        for attr in spec.attributes_for(version) {
            match node.settings.get(attr.name) {
                None => self.session.diagnostics.warning(format!(
                    "Couldn't find attribute \"{}\" for node {} of type {}",
                    attr.name, node.name, node.bl_idname
                )),
                Some(None) => {}
                Some(Some(value)) => self.setting(node, var, attr, value),
            }
        }
    }

    fn setting(&mut self, node: &Node, var: &str, attr: &AttrSpec, value: &SettingValue) {
        use SettingKind as K;
        use SettingValue as V;

        let target = format!("{var}.{}", attr.name);
        match (attr.kind, value) {
            (K::Enum, V::Enum(item)) => {
                if !item.is_empty() {
                    self.w.line(format!("{target} = {}", py_enum(item)));
                }
            }
            (K::EnumSet, V::EnumSet(items)) => {
                self.w.line(format!("{target} = {}", py_enum_set(items)));
            }
            (K::String, V::String(s)) => self.w.line(format!("{target} = {}", py_str(s))),
            (K::Bool, V::Bool(b)) => self.w.line(format!("{target} = {}", py_bool(*b))),
            (K::Int, V::Int(i)) => self.w.line(format!("{target} = {}", py_int(*i))),
            (K::Float, V::Float(f)) => self.w.line(format!("{target} = {}", py_float(*f))),
            (K::Float, V::Int(i)) => {
                self.w.line(format!("{target} = {}", py_float(*i as f32)));
            }
            (kind, V::Vector(values)) if kind.vector_len().is_some() => {
                let len = kind.vector_len().unwrap_or_default();
                match py_vec_n(values, len) {
                    Some(literal) => self.w.line(format!("{target} = {literal}")),
                    None => self.mismatch(node, attr, value),
                }
            }
            (K::Color, V::Vector(values)) => match py_color(values) {
                Some(literal) => self.w.line(format!("{target} = {literal}")),
                None => self.mismatch(node, attr, value),
            },
            (K::Image, V::Image(image)) => self.image_value(image, &target),
            (kind, V::Id(name)) => match kind.data_collection() {
                Some(collection) => self.set_if_in_blend_file(name, &target, collection),
                None => self.mismatch(node, attr, value),
            },
            (K::ImageUser, V::ImageUser(user)) => {
                for (field, literal) in user.fields() {
                    self.w.line(format!("{target}.{field} = {literal}"));
                }
            }
            (K::ColorRamp, V::ColorRamp(ramp)) => self.color_ramp(var, &target, ramp),
            (K::CurveMapping, V::CurveMapping(mapping)) => {
                self.curve_mapping(node, var, &target, mapping)
            }
            (K::NodeTree, V::NodeTree(id)) => self.node_tree_setting(node, &target, id),
            (kind, V::Items(items)) if kind.is_item_collection() => {
                self.item_collection(kind, &target, items)
            }
            (K::ColorManagedDisplaySettings, V::ColorManagedDisplay(display)) => {
                self.display_settings(&target, display)
            }
            (K::ColorManagedViewSettings, V::ColorManagedView(view)) => {
                self.view_settings(&target, view)
            }
            (K::ImageFormatSettings, V::Struct(fields)) => self.struct_setting(&target, fields),
            (
                K::EnumItem
                | K::EnumDefinition
                | K::ParticleSystem
                | K::CryptomatteEntries
                | K::FileSlots
                | K::LayerSlots,
                _,
            ) => {
                tracing::debug!(
                    "[CODEGEN] {:?} attribute {} of {} is not reproduced",
                    attr.kind,
                    attr.name,
                    node.name
                );
            }
            _ => self.mismatch(node, attr, value),
        }
    }

    fn mismatch(&mut self, node: &Node, attr: &AttrSpec, value: &SettingValue) {
        self.session.diagnostics.warning(format!(
            "Attribute \"{}\" of node {} holds a {} value, expected {:?}",
            attr.name,
            node.name,
            value.type_name(),
            attr.kind
        ));
    }

    fn color_ramp(&mut self, node_var: &str, target: &str, ramp: &ColorRamp) {
        self.w
            .line(format!("{target}.color_mode = {}", py_enum(&ramp.color_mode)));
        self.w.line(format!(
            "{target}.hue_interpolation = {}",
            py_enum(&ramp.hue_interpolation)
        ));
        self.w.line(format!(
            "{target}.interpolation = {}",
            py_enum(&ramp.interpolation)
        ));
        self.w.blank();

        if ramp.elements.is_empty() {
            return;
        }
        self.w.line("# Initialize color ramp elements");
        self.w
            .line(format!("{target}.elements.remove({target}.elements[0])"));
        for (i, element) in ramp.elements.iter().enumerate() {
            let element_var = self.session.names.allocate(&format!("{node_var}_cre_{i}"));
            if i == 0 {
                self.w.line(format!("{element_var} = {target}.elements[0]"));
                self.w.line(format!(
                    "{element_var}.position = {}",
                    py_float(element.position)
                ));
            } else {
                self.w.line(format!(
                    "{element_var} = {target}.elements.new({})",
                    py_float(element.position)
                ));
            }
            self.w
                .line(format!("{element_var}.alpha = {}", py_float(element.alpha)));
            self.w
                .line(format!("{element_var}.color = {}", py_vec(&element.color)));
            self.w.blank();
        }
    }

    fn curve_mapping(&mut self, node: &Node, node_var: &str, target: &str, mapping: &CurveMapping) {
        self.w.line("# Mapping settings");
        self.w
            .line(format!("{target}.extend = {}", py_enum(&mapping.extend)));
        self.w
            .line(format!("{target}.tone = {}", py_enum(&mapping.tone)));
        self.w.line(format!(
            "{target}.black_level = {}",
            py_vec(&mapping.black_level)
        ));
        self.w.line(format!(
            "{target}.white_level = {}",
            py_vec(&mapping.white_level)
        ));
        let clips = [
            ("clip_min_x", mapping.clip_min_x),
            ("clip_min_y", mapping.clip_min_y),
            ("clip_max_x", mapping.clip_max_x),
            ("clip_max_y", mapping.clip_max_y),
        ];
        for (name, value) in clips {
            self.w.line(format!("{target}.{name} = {}", py_float(value)));
        }
        self.w
            .line(format!("{target}.use_clip = {}", py_bool(mapping.use_clip)));

        for (i, curve) in mapping.curves.iter().enumerate() {
            self.w.line(format!("# Curve {i}"));
            let curve_var = self.session.names.allocate(&format!("{node_var}_curve_{i}"));
            self.w
                .line(format!("{curve_var} = {target}.curves[{i}]"));

            // Hue correct curves start with more than two points.
            if node.bl_idname == "CompositorNodeHueCorrect" {
                self.w.line(format!(
                    "for i in range(len({curve_var}.points.values()) - 1, 1, -1):"
                ));
                self.w
                    .nested(format!("{curve_var}.points.remove({curve_var}.points[i])"));
            }

            for (j, point) in curve.points.iter().enumerate() {
                let point_var = self
                    .session
                    .names
                    .allocate(&format!("{curve_var}_point_{j}"));
                let [x, y] = point.location;
                if j < 2 {
                    self.w
                        .line(format!("{point_var} = {curve_var}.points[{j}]"));
                    self.w.line(format!(
                        "{point_var}.location = ({}, {})",
                        py_float(x),
                        py_float(y)
                    ));
                } else {
                    self.w.line(format!(
                        "{point_var} = {curve_var}.points.new({}, {})",
                        py_float(x),
                        py_float(y)
                    ));
                }
                self.w.line(format!(
                    "{point_var}.handle_type = {}",
                    py_enum(&point.handle_type)
                ));
            }
        }

        self.w.line("# Update curve after changes");
        self.w.line(format!("{target}.update()"));
    }

    /// Point a group node at its tree, building the tree on first use.
    fn node_tree_setting(&mut self, node: &Node, target: &str, id: &TreeId) {
        let document = self.session.document;
        if let Some(path) = self.session.plan.essentials.get(id) {
            let name = document
                .tree(id)
                .map(|t| t.name.as_str())
                .unwrap_or(id.as_str());
            let key = format!("({}, {})", py_str(&relpath_str(path)), py_str(name));
            self.w.line(format!("{target} = node_trees.get({key})"));
            return;
        }

        let Some(func) = self.func_ref(id) else {
            self.session.diagnostics.warning(format!(
                "Node tree dependency graph wasn't properly initialized! Couldn't find node tree {} used by {}",
                id, node.name
            ));
            return;
        };
        write_memoized_call(&mut self.w, &func);
        self.w.line(format!("{target} = node_trees[{func}]"));
    }

    fn display_settings(&mut self, target: &str, display: &DisplaySettings) {
        self.w.line(format!(
            "{target}.display_device = {}",
            py_enum(&display.display_device)
        ));
        if let Some(emulation) = &display.emulation {
            self.w
                .line(format!("{target}.emulation = {}", py_enum(emulation)));
        }
    }

    fn view_settings(&mut self, target: &str, view: &ViewSettings) {
        // The view transform restricts which looks are valid.
        self.w.line(format!(
            "{target}.view_transform = {}",
            py_enum(&view.view_transform)
        ));
        self.w.line(format!("{target}.look = {}", py_enum(&view.look)));
    }

    fn struct_setting(&mut self, target: &str, fields: &IndexMap<String, SettingValue>) {
        for (key, value) in fields {
            let literal = match value {
                SettingValue::Bool(b) => py_bool(*b).to_string(),
                SettingValue::Int(i) => py_int(*i),
                SettingValue::Float(f) => py_float(*f),
                SettingValue::String(s) => py_str(s),
                SettingValue::Enum(e) => py_enum(e),
                SettingValue::Vector(v) => py_vec(v),
                other => {
                    tracing::debug!(
                        "[CODEGEN] Skipping nested {} field {}.{}",
                        other.type_name(),
                        target,
                        key
                    );
                    continue;
                }
            };
            self.w.line(format!("{target}.{key} = {literal}"));
        }
    }
}
