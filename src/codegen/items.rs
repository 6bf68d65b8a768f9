//! Growable item collections. Each collection is cleared and rebuilt item by
//! item, then the per-item fields its kind supports are written.

use super::literal::{py_bool, py_enum, py_str};
use super::tree_codegen::TreeCodeGenerator;
use crate::model::CollectionItem;
use crate::schema::SettingKind;

/// Fields written after an item is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemExtras {
    None,
    AttributeDomain,
    Bake,
    Domain,
    StructureType,
    Description,
    ViewerAutoRemove,
    FileOutput,
}

/// How an item is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemCtor {
    /// `new(socket_type, name)`
    Typed,
    /// `new(data_type, name)`
    DataTyped,
    /// `new(name)`
    Named,
    /// `new()`
    Bare,
    /// `new('FLOAT', name)` followed by a data type fix-up.
    Capture,
}

fn layout(kind: SettingKind) -> Option<(ItemCtor, ItemExtras)> {
    use SettingKind::*;
    let layout = match kind {
        SimOutputItems => (ItemCtor::Typed, ItemExtras::AttributeDomain),
        RepeatOutputItems => (ItemCtor::Typed, ItemExtras::None),
        IndexSwitchItems => (ItemCtor::Bare, ItemExtras::None),
        BakeItems => (ItemCtor::Typed, ItemExtras::Bake),
        CaptureAttributeItems => (ItemCtor::Capture, ItemExtras::None),
        MenuSwitchItems => (ItemCtor::Named, ItemExtras::Description),
        ForeachGeoElementGenerationItems => (ItemCtor::Typed, ItemExtras::Domain),
        ForeachGeoElementInputItems | ForeachGeoElementMainItems | FormatStringItems => {
            (ItemCtor::Typed, ItemExtras::None)
        }
        ClosureInputItems
        | ClosureOutputItems
        | EvaluateClosureInputItems
        | EvaluateClosureOutputItems
        | CombineBundleItems
        | SeparateBundleItems => (ItemCtor::Typed, ItemExtras::StructureType),
        FieldToGridItems => (ItemCtor::DataTyped, ItemExtras::None),
        GeometryViewerItems => (ItemCtor::Typed, ItemExtras::ViewerAutoRemove),
        CompositorFileOutputItems => (ItemCtor::Typed, ItemExtras::FileOutput),
        _ => return None,
    };
    Some(layout)
}

impl<'s, 'a> TreeCodeGenerator<'s, 'a> {
    pub(super) fn item_collection(
        &mut self,
        kind: SettingKind,
        target: &str,
        items: &[CollectionItem],
    ) {
        let Some((ctor, extras)) = layout(kind) else {
            tracing::debug!("[CODEGEN] No item layout for {:?}, skipping {}", kind, target);
            return;
        };

        self.w.line(format!("{target}.clear()"));
        for (i, item) in items.iter().enumerate() {
            let name = py_str(&item.name);
            let socket_type = py_enum(item.socket_type.as_deref().unwrap_or("FLOAT"));
            let data_type = py_enum(item.data_type.as_deref().unwrap_or("FLOAT"));

            match ctor {
                ItemCtor::Typed => {
                    self.w.line(format!("# Create item {name}"));
                    self.w.line(format!("{target}.new({socket_type}, {name})"));
                }
                ItemCtor::DataTyped => {
                    self.w.line(format!("{target}.new({data_type}, {name})"));
                }
                ItemCtor::Named => self.w.line(format!("{target}.new({name})")),
                ItemCtor::Bare => self.w.line(format!("{target}.new()")),
                ItemCtor::Capture => {
                    self.w.line(format!("{target}.new('FLOAT', {name})"));
                    self.w
                        .line(format!("{target}[{name}].data_type = {data_type}"));
                }
            }

            let item_var = format!("{target}[{i}]");
            match extras {
                ItemExtras::None => {}
                ItemExtras::AttributeDomain => {
                    let domain = item.attribute_domain.as_deref().unwrap_or("POINT");
                    self.w
                        .line(format!("{item_var}.attribute_domain = {}", py_enum(domain)));
                }
                ItemExtras::Bake => {
                    let domain = item.attribute_domain.as_deref().unwrap_or("POINT");
                    self.w
                        .line(format!("{item_var}.attribute_domain = {}", py_enum(domain)));
                    if item.is_attribute {
                        self.w.line(format!("{item_var}.is_attribute = True"));
                    }
                }
                ItemExtras::Domain => {
                    let domain = item.domain.as_deref().unwrap_or("POINT");
                    self.w
                        .line(format!("{item_var}.domain = {}", py_enum(domain)));
                }
                ItemExtras::StructureType => {
                    let structure = item.structure_type.as_deref().unwrap_or("AUTO");
                    self.w
                        .line(format!("{item_var}.structure_type = {}", py_enum(structure)));
                }
                ItemExtras::Description => {
                    self.w.line(format!(
                        "{item_var}.description = {}",
                        py_str(&item.description)
                    ));
                }
                ItemExtras::ViewerAutoRemove => {
                    // Unlinked inputs vanish while auto remove is on.
                    let auto_remove = item.auto_remove.unwrap_or(true);
                    self.session
                        .defer(format!("{item_var}.auto_remove = {}", py_bool(auto_remove)));
                }
                ItemExtras::FileOutput => {
                    self.w.line(format!(
                        "{item_var}.override_node_format = {}",
                        py_bool(item.override_node_format.unwrap_or(false))
                    ));
                    self.w.line(format!(
                        "{item_var}.save_as_render = {}",
                        py_bool(item.save_as_render.unwrap_or(true))
                    ));
                    if item.socket_type.as_deref() == Some("VECTOR") {
                        let dimensions = item.vector_socket_dimensions.unwrap_or(3);
                        self.w.line(format!(
                            "{item_var}.vector_socket_dimensions = {dimensions}"
                        ));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_item_collection_except_enum_definitions_has_a_layout() {
        use SettingKind::*;
        let kinds = [
            BakeItems,
            CaptureAttributeItems,
            ClosureInputItems,
            ClosureOutputItems,
            CombineBundleItems,
            CompositorFileOutputItems,
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
            RepeatOutputItems,
            SeparateBundleItems,
            SimOutputItems,
        ];
        for kind in kinds {
            assert!(kind.is_item_collection());
            assert!(layout(kind).is_some(), "{kind:?}");
        }
        assert!(layout(EnumDefinition).is_none());
    }
}
