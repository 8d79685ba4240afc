use crate::xml::{self, Element};
use std::collections::{HashMap, HashSet};

/// Structural metrics of one layout file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub max_depth: usize,
    pub element_count: usize,
    pub attribute_count: usize,
    /// Names referenced as `@string/<name>` on the layout's root element
    pub string_refs: HashSet<String>,
}

impl LayoutMetrics {
    /// Measure a parsed layout document
    pub fn from_root(root: &Element) -> Self {
        Self {
            max_depth: xml::max_depth(root),
            element_count: xml::element_count(root),
            attribute_count: xml::attribute_count(root),
            string_refs: xml::string_refs(root),
        }
    }
}

/// Metrics accumulated for one decompiled project
///
/// A record is owned by the walk over its project directory and handed to
/// the reporter once that walk completes.
#[derive(Debug, Clone, Default)]
pub struct ProjectRecord {
    /// Project directory as given to the walker
    pub folder: String,

    pub xml_anim_file_count: usize,
    pub xml_color_file_count: usize,
    pub xml_font_file_count: usize,
    pub xml_interpolator_file_count: usize,
    pub xml_drawable_file_count: usize,
    pub xml_transition_file_count: usize,

    /// `res/drawable-*` directories
    pub drawable_density_folder_count: usize,
    /// `res/values-??` directories
    pub value_locale_folder_count: usize,

    /// Layout metrics keyed by file path
    pub layouts: HashMap<String, LayoutMetrics>,

    /// Union of `name`s declared in every `strings.xml`
    pub string_keys: HashSet<String>,
    /// Union of `name`s declared in every `styles.xml`
    pub style_keys: HashSet<String>,
}

impl ProjectRecord {
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            ..Self::default()
        }
    }

    pub fn with_qualifier_counts(mut self, drawable_density: usize, value_locale: usize) -> Self {
        self.drawable_density_folder_count = drawable_density;
        self.value_locale_folder_count = value_locale;
        self
    }

    pub fn insert_layout(&mut self, path: impl Into<String>, metrics: LayoutMetrics) {
        self.layouts.insert(path.into(), metrics);
    }

    pub fn add_string_keys(&mut self, table: &Element) {
        self.string_keys.extend(named_children(table));
    }

    pub fn add_style_keys(&mut self, table: &Element) {
        self.style_keys.extend(named_children(table));
    }

    pub fn layout_count(&self) -> usize {
        self.layouts.len()
    }

    pub fn string_count(&self) -> usize {
        self.string_keys.len()
    }

    pub fn style_count(&self) -> usize {
        self.style_keys.len()
    }
}

/// `name` attributes of a resource table's direct children
fn named_children(table: &Element) -> impl Iterator<Item = String> + '_ {
    table
        .children
        .iter()
        .filter_map(|child| child.attribute("name"))
        .map(str::to_string)
}
