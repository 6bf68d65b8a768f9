//! # Unique-Name Allocator
//!
//! Every identifier in the generated program (tree variables, node variables,
//! sockets, panels, ramp elements, curve points, modules) comes from a
//! [`NameAllocator`]. The first request for a base name returns it unchanged;
//! later requests return `base_1`, `base_2`, …, skipping any candidate that
//! is already taken.

use std::collections::HashMap;

/// Identifiers the generated code uses for its own bookkeeping.
pub const RESERVED_NAMES: &[&str] = &[
    "base_dir",
    "base_name",
    "bpy",
    "data_dst",
    "data_src",
    "datafiles_path",
    "end_name",
    "i",
    "image_path",
    "imgs",
    "item",
    "lib_path",
    "lib_relpath",
    "light_obj",
    "mathutils",
    "mod",
    "name",
    "node",
    "node_trees",
    "obj",
    "os",
    "scene",
    "typing",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Turn arbitrary text into a Python identifier.
///
/// Characters outside `[A-Za-z0-9_]` become `_`, a leading digit gets a `_`
/// prefix, keywords get a `_` suffix and empty input becomes `unnamed`.
pub fn clean_string(name: &str, lower: bool) -> String {
    let mut out: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if lower {
        out.make_ascii_lowercase();
    }
    if out.is_empty() {
        return String::from("unnamed");
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    if PYTHON_KEYWORDS.contains(&out.as_str()) {
        out.push('_');
    }
    out
}

/// Per-run table of used identifiers.
#[derive(Debug, Clone)]
pub struct NameAllocator {
    used: HashMap<String, usize>,
}

impl Default for NameAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameAllocator {
    /// An allocator pre-seeded with [`RESERVED_NAMES`].
    pub fn new() -> Self {
        Self::with_reserved(RESERVED_NAMES.iter().copied())
    }

    /// An allocator with no reserved names beyond `reserved`.
    pub fn with_reserved<'a>(reserved: impl IntoIterator<Item = &'a str>) -> Self {
        let mut allocator = Self {
            used: HashMap::new(),
        };
        for name in reserved {
            allocator.reserve(name);
        }
        allocator
    }

    /// Mark `name` as taken without returning it.
    pub fn reserve(&mut self, name: &str) {
        self.used.entry(name.to_string()).or_insert(0);
    }

    /// Allocate a fresh identifier derived from `base`, lowercased.
    pub fn allocate(&mut self, base: &str) -> String {
        let clean = clean_string(base, true);
        self.allocate_clean(clean)
    }

    fn allocate_clean(&mut self, base: String) -> String {
        let Some(count) = self.used.get(&base).copied() else {
            self.used.insert(base.clone(), 0);
            return base;
        };

        let mut n = count;
        let candidate = loop {
            n += 1;
            let candidate = format!("{base}_{n}");
            if !self.used.contains_key(&candidate) {
                break candidate;
            }
        };
        self.used.insert(base, n);
        self.used.insert(candidate.clone(), 0);
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn cleans_names() {
        assert_eq!(clean_string("Principled BSDF", true), "principled_bsdf");
        assert_eq!(clean_string("Group.001", false), "Group_001");
        assert_eq!(clean_string("", true), "unnamed");
        assert_eq!(clean_string("   ", true), "unnamed");
        assert_eq!(clean_string("3D Noise", true), "_3d_noise");
        assert_eq!(clean_string("class", true), "class_");
        assert_eq!(clean_string("Größe", true), "gr__e");
    }

    #[test]
    fn counts_per_base_name() {
        let mut names = NameAllocator::with_reserved([]);
        assert_eq!(names.allocate("Math"), "math");
        assert_eq!(names.allocate("Math"), "math_1");
        assert_eq!(names.allocate("math"), "math_2");
        assert_eq!(names.allocate("Mix"), "mix");
    }

    #[test]
    fn reserved_names_are_never_issued() {
        let mut names = NameAllocator::new();
        assert_eq!(names.allocate("Node"), "node_1");
        assert_eq!(names.allocate("item"), "item_1");
        assert_eq!(names.allocate("node trees"), "node_trees_1");
    }

    #[test]
    fn suffixed_candidates_do_not_collide_with_literal_names() {
        let mut names = NameAllocator::with_reserved([]);
        assert_eq!(names.allocate("math_1"), "math_1");
        assert_eq!(names.allocate("math"), "math");
        assert_eq!(names.allocate("math"), "math_2");
        assert_eq!(names.allocate("math_1"), "math_1_1");
    }

    proptest! {
        #[test]
        fn every_allocation_is_unique(bases in proptest::collection::vec("[A-Za-z0-9_ .]{0,6}", 1..60)) {
            let mut names = NameAllocator::new();
            let mut seen = HashSet::new();
            for base in &bases {
                let name = names.allocate(base);
                prop_assert!(!name.is_empty());
                prop_assert!(!name.starts_with(|c: char| c.is_ascii_digit()));
                prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
                prop_assert!(!RESERVED_NAMES.contains(&name.as_str()));
                prop_assert!(seen.insert(name));
            }
        }
    }
}
