//! # Export Options
//!
//! User-configurable generation options. Options deserialize from TOML with
//! every field optional, and can also be built in code:
//!
//! ```rust
//! use bntc::{ExportOptions, Indentation};
//!
//! let options = ExportOptions::script()
//!     .with_indentation(Indentation::Spaces2)
//!     .with_node_dimensions(false);
//! assert_eq!(options.indentation.as_str(), "  ");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportMode {
    /// A single script, typically pasted into the host's text editor.
    #[default]
    Script,
    /// An installable extension: one module per root object plus shared modules.
    Package,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indentation {
    Spaces2,
    #[default]
    Spaces4,
    Spaces8,
    Tabs,
}

impl Indentation {
    pub fn as_str(self) -> &'static str {
        match self {
            Indentation::Spaces2 => "  ",
            Indentation::Spaces4 => "    ",
            Indentation::Spaces8 => "        ",
            Indentation::Tabs => "\t",
        }
    }
}

/// License written next to a generated package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum License {
    #[default]
    #[serde(rename = "GPL-3.0-or-later")]
    Gpl3OrLater,
    #[serde(rename = "GPL-2.0-or-later")]
    Gpl2OrLater,
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
    #[serde(rename = "MPL-2.0")]
    Mpl2,
    #[serde(rename = "other")]
    Other,
}

impl License {
    /// SPDX identifier, `None` for [`License::Other`].
    pub fn spdx(self) -> Option<&'static str> {
        match self {
            License::Gpl3OrLater => Some("GPL-3.0-or-later"),
            License::Gpl2OrLater => Some("GPL-2.0-or-later"),
            License::Mit => Some("MIT"),
            License::Apache2 => Some("Apache-2.0"),
            License::Bsd3Clause => Some("BSD-3-Clause"),
            License::Mpl2 => Some("MPL-2.0"),
            License::Other => None,
        }
    }
}

/// Options that only apply in [`ExportMode::Package`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageOptions {
    /// Directory the package directory is created in.
    pub destination: Option<PathBuf>,
    /// Package name; defaults to the first root object's name.
    pub name: Option<String>,
    pub description: String,
    pub author: String,
    pub version: [u32; 3],
    /// Where the operators show up in the host UI.
    pub location: String,
    pub category: String,
    pub license: License,
    pub create_license: bool,
    /// Menu class the generated operators are appended to.
    pub menu_id: String,
    /// Copy referenced image files into the package.
    pub save_images: bool,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            destination: None,
            name: None,
            description: String::new(),
            author: String::from("Node To Python"),
            version: [1, 0, 0],
            location: String::from("Object"),
            category: String::from("Node"),
            license: License::default(),
            create_license: true,
            menu_id: String::from("VIEW3D_MT_object"),
            save_images: true,
        }
    }
}

impl PackageOptions {
    /// Whether the menu id has the shape of a host menu class
    /// (`AREA_MT_name`).
    pub fn menu_id_is_well_formed(&self) -> bool {
        let Some((area, name)) = self.menu_id.split_once("_MT_") else {
            return false;
        };
        let area_ok = area
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase())
            && area
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
        let name_ok = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        area_ok && name_ok
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportOptions {
    pub mode: ExportMode,
    /// Emit default, min and max values of group interface sockets.
    pub embed_default_socket_values: bool,
    /// Emit frame parent assignments.
    pub emit_node_parents: bool,
    /// Emit node locations.
    pub emit_node_locations: bool,
    /// Emit node width and height.
    pub emit_node_dimensions: bool,
    pub indentation: Indentation,
    /// Load node groups from the host's bundled essentials libraries by
    /// reference instead of reconstructing them.
    pub link_external_groups: bool,
    /// Emit defaults for input sockets the host currently hides as unavailable.
    pub emit_defaults_for_unavailable_sockets: bool,
    /// Emit the import block at the top of a script.
    pub include_imports: bool,
    pub package: PackageOptions,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            mode: ExportMode::Script,
            embed_default_socket_values: true,
            emit_node_parents: true,
            emit_node_locations: true,
            emit_node_dimensions: true,
            indentation: Indentation::Spaces4,
            link_external_groups: true,
            emit_defaults_for_unavailable_sockets: false,
            include_imports: true,
            package: PackageOptions::default(),
        }
    }
}

impl ExportOptions {
    pub fn script() -> Self {
        Self::default()
    }

    /// Package-mode options writing into `destination`.
    pub fn package(destination: impl Into<PathBuf>) -> Self {
        let mut options = Self {
            mode: ExportMode::Package,
            ..Self::default()
        };
        options.package.destination = Some(destination.into());
        options
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| crate::error::ExportError::read_file(path, e))?;
        let options = Self::from_toml_str(&text)?;
        tracing::debug!("[BNTC] Loaded options from {}", path.display());
        Ok(options)
    }

    pub fn with_indentation(mut self, indentation: Indentation) -> Self {
        self.indentation = indentation;
        self
    }

    pub fn with_node_dimensions(mut self, enabled: bool) -> Self {
        self.emit_node_dimensions = enabled;
        self
    }

    pub fn with_node_locations(mut self, enabled: bool) -> Self {
        self.emit_node_locations = enabled;
        self
    }

    pub fn with_default_socket_values(mut self, enabled: bool) -> Self {
        self.embed_default_socket_values = enabled;
        self
    }

    pub fn with_external_groups(mut self, enabled: bool) -> Self {
        self.link_external_groups = enabled;
        self
    }

    pub fn with_unavailable_defaults(mut self, enabled: bool) -> Self {
        self.emit_defaults_for_unavailable_sockets = enabled;
        self
    }

    pub fn is_package(&self) -> bool {
        self.mode == ExportMode::Package
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn empty_toml_gives_defaults() {
        let options = ExportOptions::from_toml_str("").unwrap();
        assert_eq!(options, ExportOptions::default());
    }

    #[test]
    fn parses_package_section() {
        let options = ExportOptions::from_toml_str(indoc! {r#"
            mode = "package"
            indentation = "tabs"
            emit_node_dimensions = false

            [package]
            destination = "/tmp/out"
            name = "My Nodes"
            version = [0, 3, 1]
            license = "MIT"
            menu_id = "NODE_MT_add"
        "#})
        .unwrap();

        assert!(options.is_package());
        assert_eq!(options.indentation, Indentation::Tabs);
        assert!(!options.emit_node_dimensions);
        assert_eq!(options.package.destination.as_deref(), Some(Path::new("/tmp/out")));
        assert_eq!(options.package.version, [0, 3, 1]);
        assert_eq!(options.package.license, License::Mit);
        assert!(options.package.save_images);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(ExportOptions::from_toml_str("emit_everything = true").is_err());
    }

    #[test]
    fn menu_id_shape() {
        let mut package = PackageOptions::default();
        assert!(package.menu_id_is_well_formed());
        package.menu_id = "NODE_MT_add".into();
        assert!(package.menu_id_is_well_formed());
        for bad in ["", "object", "VIEW3D_MT_", "view3d_MT_object", "VIEW3D_OT_thing"] {
            package.menu_id = bad.into();
            assert!(!package.menu_id_is_well_formed(), "{bad}");
        }
    }
}
