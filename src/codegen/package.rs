//! # Package Assembly
//!
//! Lays generated constructor functions out as an installable extension:
//!
//! ```text
//! <destination>/<package>/
//!     __init__.py            bl_info, one operator per root, registration
//!     <root>.py              base tree and trees only that root uses
//!     <kind>_common.py       trees shared between roots
//!     blender_manifest.toml
//!     LICENSE
//!     imgs/                  copied image files
//! ```

use super::literal::py_str;
use super::names::clean_string;
use super::program::{write_imports, write_root_call, NODE_TREES_DECL};
use super::tree_codegen::GeneratedTree;
use super::writer::CodeWriter;
use crate::error::{ExportError, Result};
use crate::options::{License, PackageOptions};
use crate::session::{ExportSession, ImageAsset};
use chrono::Datelike;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directory inside the package that holds copied images.
pub const IMAGE_DIR: &str = "imgs";

/// One generated text file, relative to the package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFile {
    pub path: PathBuf,
    pub contents: String,
}

/// A package ready to be written to disk.
#[derive(Debug, Clone)]
pub struct PackageOutput {
    /// Directory the package is written to.
    pub dir: PathBuf,
    pub files: Vec<PackageFile>,
    pub images: Vec<ImageAsset>,
}

impl PackageOutput {
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&PackageFile> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path == path)
    }

    /// Write every file and copy every image. Returns the package directory.
    pub fn write(&self) -> Result<PathBuf> {
        tracing::info!("[BNTC] Writing package to {}", self.dir.display());
        std::fs::create_dir_all(&self.dir).map_err(|e| ExportError::create_dir(&self.dir, e))?;

        for file in &self.files {
            let path = self.dir.join(&file.path);
            std::fs::write(&path, &file.contents).map_err(|e| ExportError::write_file(&path, e))?;
            tracing::debug!("[BNTC] Wrote {}", path.display());
        }

        if !self.images.is_empty() {
            let image_dir = self.dir.join(IMAGE_DIR);
            std::fs::create_dir_all(&image_dir)
                .map_err(|e| ExportError::create_dir(&image_dir, e))?;
            for image in &self.images {
                let target = image_dir.join(&image.file_name);
                std::fs::copy(&image.source, &target)
                    .map_err(|e| ExportError::write_file(&target, e))?;
            }
        }
        Ok(self.dir.clone())
    }
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    schema_version: &'static str,
    id: &'a str,
    version: String,
    name: &'a str,
    tagline: &'a str,
    maintainer: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    blender_version_min: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<Vec<String>>,
}

/// Builds the files of one package.
pub struct PackageBuilder<'s, 'a> {
    session: &'s mut ExportSession<'a>,
    /// Display name.
    name: String,
    /// Identifier used for the directory, manifest id and operator prefix.
    id: String,
}

impl<'s, 'a> PackageBuilder<'s, 'a> {
    pub fn new(session: &'s mut ExportSession<'a>) -> Self {
        let document = session.document;
        let package = &session.options.package;
        let name = package
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| {
                session
                    .plan
                    .roots
                    .first()
                    .and_then(|r| document.roots.get(r.index))
                    .map(|r| r.name.clone())
            })
            .unwrap_or_else(|| String::from("node_trees"));
        let id = clean_string(&name, true);
        Self { session, name, id }
    }

    pub fn build(mut self, trees: Vec<GeneratedTree>) -> Result<PackageOutput> {
        let options = self.session.options;
        let package = &options.package;
        let Some(destination) = package.destination.as_ref() else {
            return Err(ExportError::MissingDestination);
        };

        let mut files = Vec::new();
        files.push(PackageFile {
            path: PathBuf::from("__init__.py"),
            contents: self.init_module(),
        });
        files.extend(self.tree_modules(trees));
        files.push(PackageFile {
            path: PathBuf::from("blender_manifest.toml"),
            contents: self.manifest(package)?,
        });
        if let Some(license) = self.license(package) {
            files.push(PackageFile {
                path: PathBuf::from("LICENSE"),
                contents: license,
            });
        }

        Ok(PackageOutput {
            dir: destination.join(&self.id),
            files,
            images: self.session.images.clone(),
        })
    }

    /// Group generated functions by module, keeping emission order.
    fn tree_modules(&self, trees: Vec<GeneratedTree>) -> Vec<PackageFile> {
        let mut modules: IndexMap<String, (IndexSet<String>, Vec<String>)> = IndexMap::new();
        for tree in trees {
            let (imports, bodies) = modules.entry(tree.module.clone()).or_default();
            imports.extend(tree.imports.into_iter().filter(|m| *m != tree.module));
            bodies.push(tree.code);
        }

        modules
            .into_iter()
            .map(|(module, (imports, bodies))| {
                let mut w = CodeWriter::new(self.session.options.indentation);
                write_imports(&mut w);
                w.blank();
                if !imports.is_empty() {
                    for import in &imports {
                        w.line(format!("from . import {import}"));
                    }
                    w.blank();
                }
                w.blank();
                for body in &bodies {
                    w.append(body);
                }
                PackageFile {
                    path: PathBuf::from(format!("{module}.py")),
                    contents: w.finish(),
                }
            })
            .collect()
    }

    fn init_module(&self) -> String {
        let session = &*self.session;
        let package = &session.options.package;
        let mut w = CodeWriter::new(session.options.indentation);

        w.line("bl_info = {");
        w.nested(format!("\"name\" : {},", py_str(&self.name)));
        if !package.description.is_empty() {
            w.nested(format!("\"description\" : {},", py_str(&package.description)));
        }
        w.nested(format!("\"author\" : {},", py_str(&package.author)));
        let [major, minor, patch] = package.version;
        w.nested(format!("\"version\" : ({major}, {minor}, {patch}),"));
        w.nested(format!(
            "\"blender\" : {},",
            session.version.to_tuple_literal()
        ));
        w.nested(format!("\"location\" : {},", py_str(&package.location)));
        w.nested(format!("\"category\" : {},", py_str(&package.category)));
        w.line("}");
        w.blank();

        write_imports(&mut w);
        w.blank();
        let root_modules: IndexSet<&str> = session
            .plan
            .roots
            .iter()
            .map(|r| r.module.as_str())
            .collect();
        for module in &root_modules {
            w.line(format!("from . import {module}"));
        }
        w.blank();
        w.blank();

        let prefix = self.id.to_ascii_uppercase();
        let mut classes = Vec::new();
        for root in &session.plan.roots {
            let Some(object) = session.document.roots.get(root.index) else {
                continue;
            };
            let op_name = clean_string(&object.name, true);
            let class = format!("{prefix}_OT_{op_name}");

            w.line(format!("class {class}(bpy.types.Operator):"));
            w.indent();
            w.line(format!("bl_idname = \"{}.{op_name}\"", self.id));
            w.line(format!("bl_label = {}", py_str(&object.name)));
            w.line("bl_options = {'REGISTER', 'UNDO'}");
            w.blank();
            w.line("def execute(self, context: bpy.types.Context):");
            w.indent();
            w.line(NODE_TREES_DECL);
            write_root_call(&mut w, session, root, true);
            w.line("return {'FINISHED'}");
            w.dedent();
            w.dedent();
            w.blank();
            w.blank();
            classes.push(class);
        }

        w.line("def menu_func(self, context):");
        for class in &classes {
            w.nested(format!("self.layout.operator({class}.bl_idname)"));
        }
        if classes.is_empty() {
            w.nested("pass");
        }
        w.blank();
        w.blank();

        w.line(format!("classes = [{}]", classes.join(", ")));
        w.blank();
        w.blank();

        let menu = &package.menu_id;
        w.line("def register():");
        w.nested("for cls in classes:");
        w.line_at(2, "bpy.utils.register_class(cls)");
        w.nested(format!("bpy.types.{menu}.append(menu_func)"));
        w.blank();
        w.blank();
        w.line("def unregister():");
        w.nested(format!("bpy.types.{menu}.remove(menu_func)"));
        w.nested("for cls in reversed(classes):");
        w.line_at(2, "bpy.utils.unregister_class(cls)");
        w.blank();
        w.blank();
        w.line("if __name__ == \"__main__\":");
        w.nested("register()");
        w.finish()
    }

    fn manifest(&mut self, package: &PackageOptions) -> Result<String> {
        let tagline = if package.description.is_empty() {
            self.name.as_str()
        } else {
            package.description.as_str()
        };
        let license = match package.license.spdx() {
            Some(spdx) => Some(vec![format!("SPDX:{spdx}")]),
            None => {
                self.session
                    .diagnostics
                    .warning("No license selected. Please add a license to the manifest file");
                None
            }
        };
        let [major, minor, patch] = package.version;
        let version = self.session.version;
        let manifest = Manifest {
            schema_version: "1.0.0",
            id: &self.id,
            version: format!("{major}.{minor}.{patch}"),
            name: &self.name,
            tagline,
            maintainer: &package.author,
            kind: "add-on",
            blender_version_min: format!("{}.{}.{}", version.major, version.minor, version.patch),
            license,
        };
        Ok(toml::to_string(&manifest)?)
    }

    fn license(&self, package: &PackageOptions) -> Option<String> {
        if !package.create_license {
            return None;
        }
        let year = chrono::Local::now().year();
        license_text(package.license, year, &package.author)
    }
}

/// License file contents. MIT is written in full; other licenses get a
/// notice pointing at their canonical text.
pub fn license_text(license: License, year: i32, author: &str) -> Option<String> {
    let spdx = license.spdx()?;
    if license == License::Mit {
        return Some(format!(
            "MIT License\n\
             \n\
             Copyright (c) {year} {author}\n\
             \n\
             Permission is hereby granted, free of charge, to any person obtaining a copy\n\
             of this software and associated documentation files (the \"Software\"), to deal\n\
             in the Software without restriction, including without limitation the rights\n\
             to use, copy, modify, merge, publish, distribute, sublicense, and/or sell\n\
             copies of the Software, and to permit persons to whom the Software is\n\
             furnished to do so, subject to the following conditions:\n\
             \n\
             The above copyright notice and this permission notice shall be included in all\n\
             copies or substantial portions of the Software.\n\
             \n\
             THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR\n\
             IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,\n\
             FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE\n\
             AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER\n\
             LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,\n\
             OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE\n\
             SOFTWARE.\n"
        ));
    }
    Some(format!(
        "Copyright (C) {year} {author}\n\
         \n\
         SPDX-License-Identifier: {spdx}\n\
         \n\
         This program is distributed under the terms of the {spdx} license.\n\
         The full license text is available at https://spdx.org/licenses/{spdx}.html\n"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mit_license_is_written_in_full() {
        let text = license_text(License::Mit, 2026, "Jo Doe").unwrap();
        assert!(text.starts_with("MIT License\n\nCopyright (c) 2026 Jo Doe\n"));
        assert!(text.contains("WITHOUT WARRANTY OF ANY KIND"));
    }

    #[test]
    fn other_licenses_get_a_notice() {
        let text = license_text(License::Gpl3OrLater, 2026, "Jo Doe").unwrap();
        assert!(text.contains("SPDX-License-Identifier: GPL-3.0-or-later"));
        assert!(license_text(License::Other, 2026, "Jo Doe").is_none());
    }

    #[test]
    fn manifest_serializes_in_field_order() {
        let manifest = Manifest {
            schema_version: "1.0.0",
            id: "rocks",
            version: "1.0.0".into(),
            name: "Rocks",
            tagline: "Rocks",
            maintainer: "Jo",
            kind: "add-on",
            blender_version_min: "4.2.0".into(),
            license: None,
        };
        let text = toml::to_string(&manifest).unwrap();
        assert!(text.starts_with("schema_version = \"1.0.0\"\nid = \"rocks\"\n"));
        assert!(text.contains("type = \"add-on\"\n"));
        assert!(!text.contains("license"));
    }
}
