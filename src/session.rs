//! # Export Session
//!
//! All mutable state of one export run, threaded through every generator
//! call. A session is built fresh for each run; reusing one would break the
//! uniqueness guarantee of the name allocator.

use crate::codegen::NameAllocator;
use crate::dependencies::ExportPlan;
use crate::diagnostics::Diagnostics;
use crate::model::{Document, ImageRef};
use crate::options::ExportOptions;
use crate::version::HostVersion;
use std::path::PathBuf;

/// An image file that has to be copied into a generated package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub source: PathBuf,
    /// File name inside the package's image directory.
    pub file_name: String,
}

pub struct ExportSession<'a> {
    pub document: &'a Document,
    pub options: &'a ExportOptions,
    pub version: HostVersion,
    pub names: NameAllocator,
    pub plan: ExportPlan,
    pub diagnostics: Diagnostics,
    /// Statements that may only run once a tree's links exist. Drained after
    /// the link stage of every tree.
    pub after_links: Vec<String>,
    pub images: Vec<ImageAsset>,
}

impl<'a> ExportSession<'a> {
    pub fn new(document: &'a Document, options: &'a ExportOptions) -> Self {
        Self {
            document,
            options,
            version: document.host.version,
            names: NameAllocator::new(),
            plan: ExportPlan::default(),
            diagnostics: Diagnostics::new(),
            after_links: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Keep generated identifiers clear of the package's module names, which
    /// are in scope wherever a function from another module is called.
    pub fn reserve_module_names(&mut self) {
        let modules: Vec<String> = self.plan.module_names().map(str::to_string).collect();
        for module in modules {
            self.names.reserve(&module);
        }
    }

    /// Queue a statement for after the current tree's links.
    pub fn defer(&mut self, statement: String) {
        self.after_links.push(statement);
    }

    pub fn take_deferred(&mut self) -> Vec<String> {
        std::mem::take(&mut self.after_links)
    }

    /// Register `image` for copying into the package and return the file
    /// name it is stored under. Returns `None` when the image has no data to
    /// copy.
    ///
    /// The same source file is copied once. Different files sharing a base
    /// name get a numbered suffix.
    pub fn save_image(&mut self, image: &ImageRef) -> Option<String> {
        let Some(source) = image.filepath.clone().filter(|_| image.has_data) else {
            self.diagnostics.warning(format!("{} has no data", image.file_name()));
            return None;
        };
        if let Some(asset) = self.images.iter().find(|asset| asset.source == source) {
            return Some(asset.file_name.clone());
        }

        let base = image.file_name();
        let mut file_name = base.clone();
        let mut n = 0;
        while self.images.iter().any(|asset| asset.file_name == file_name) {
            n += 1;
            file_name = numbered_file_name(&base, n);
        }
        self.images.push(ImageAsset {
            source,
            file_name: file_name.clone(),
        });
        Some(file_name)
    }

    /// Whether images are written into the package instead of being looked
    /// up in the host file.
    pub fn packs_images(&self) -> bool {
        self.options.is_package() && self.options.package.save_images
    }
}

/// `rock.png` becomes `rock_2.png`.
fn numbered_file_name(file_name: &str, n: usize) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}_{n}.{ext}"),
        _ => format!("{file_name}_{n}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str, path: &str) -> ImageRef {
        ImageRef {
            name: name.into(),
            source: String::from("FILE"),
            filepath: Some(PathBuf::from(path)),
            colorspace: String::from("sRGB"),
            alpha_mode: String::from("STRAIGHT"),
            has_data: true,
        }
    }

    #[test]
    fn images_are_keyed_on_their_source_path() {
        let document = Document::default();
        let options = ExportOptions::package("/tmp/unused");
        let mut session = ExportSession::new(&document, &options);

        let grass = image("Grass", "/textures/grass/albedo.png");
        assert_eq!(session.save_image(&grass).as_deref(), Some("albedo.png"));
        assert_eq!(session.save_image(&grass).as_deref(), Some("albedo.png"));
        assert_eq!(session.images.len(), 1);

        let rock = image("Rock", "/textures/rock/albedo.png");
        assert_eq!(session.save_image(&rock).as_deref(), Some("albedo_1.png"));
        let sand = image("Sand", "/textures/sand/albedo.png");
        assert_eq!(session.save_image(&sand).as_deref(), Some("albedo_2.png"));

        let sources: Vec<_> = session.images.iter().map(|a| a.source.clone()).collect();
        assert_eq!(
            sources,
            [
                PathBuf::from("/textures/grass/albedo.png"),
                PathBuf::from("/textures/rock/albedo.png"),
                PathBuf::from("/textures/sand/albedo.png"),
            ]
        );
        assert!(!session.diagnostics.has_warnings());
    }

    #[test]
    fn images_without_data_are_reported() {
        let document = Document::default();
        let options = ExportOptions::package("/tmp/unused");
        let mut session = ExportSession::new(&document, &options);

        let mut empty = image("Empty", "/textures/empty.png");
        empty.has_data = false;
        assert_eq!(session.save_image(&empty), None);
        assert!(session.images.is_empty());
        assert!(session.diagnostics.has_warnings());
    }
}
