//! Resource classification
//!
//! Routes each resource file to one category (see [`ResourceKind`]) and
//! applies that category's accumulation rule to the project record.

mod path;
mod rules;

pub use path::ResourcePath;
pub use rules::ResourceKind;

use crate::discovery::ResourceFile;
use crate::metrics::{LayoutMetrics, ProjectRecord};
use crate::xml::{self, Element, XmlError};
use tracing::{error, trace};

/// Classify one file and return the updated record.
///
/// Files that fail to parse are logged and leave the record untouched.
pub fn classify(mut record: ProjectRecord, file: &ResourceFile) -> ProjectRecord {
    if let Err(e) = classify_file(&mut record, file) {
        error!("{}: {}", file.path.display(), e);
    }
    record
}

/// Classify one file in place, returning the category it was routed to.
///
/// The record is untouched when the file cannot be read or parsed.
pub fn classify_file(
    record: &mut ProjectRecord,
    file: &ResourceFile,
) -> Result<ResourceKind, XmlError> {
    let root = xml::read_document(&file.path)?;

    let kind = ResourceKind::classify(&file.resource_path, &root.name);
    apply(record, kind, file, &root);
    Ok(kind)
}

/// Apply a category's accumulation rule
pub fn apply(record: &mut ProjectRecord, kind: ResourceKind, file: &ResourceFile, root: &Element) {
    match kind {
        ResourceKind::Layout => {
            record.insert_layout(file.path.display().to_string(), LayoutMetrics::from_root(root));
        }
        ResourceKind::Animation => record.xml_anim_file_count += 1,
        ResourceKind::Color => record.xml_color_file_count += 1,
        ResourceKind::Font => record.xml_font_file_count += 1,
        ResourceKind::Interpolator => record.xml_interpolator_file_count += 1,
        ResourceKind::Drawable => record.xml_drawable_file_count += 1,
        ResourceKind::Transition => record.xml_transition_file_count += 1,
        ResourceKind::Strings => record.add_string_keys(root),
        ResourceKind::Styles => record.add_style_keys(root),
        ResourceKind::Unrecognized => {
            trace!("Unrecognized resource {} <{}>", file.resource_path, root.name);
        }
        ResourceKind::IgnoredRoot
        | ResourceKind::Reserved
        | ResourceKind::Dimensions
        | ResourceKind::Arrays
        | ResourceKind::BuiltinValues => {}
    }
}
