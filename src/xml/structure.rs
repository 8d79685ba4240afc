// Structural metrics over a parsed layout tree
//
// A childless element is a leaf at depth 0. Leaves contribute 1 to the
// element count but nothing to the attribute count, so an element's own
// attributes are only counted when it has children.

use super::Element;
use std::collections::HashSet;

const STRING_REF_PREFIX: &str = "@string/";

/// Depth of the deepest descendant below `element`
pub fn max_depth(element: &Element) -> usize {
    element
        .children
        .iter()
        .map(|child| 1 + max_depth(child))
        .max()
        .unwrap_or(0)
}

/// Number of elements in the subtree, `element` included
pub fn element_count(element: &Element) -> usize {
    element.descendants().count()
}

/// Attributes declared on the non-leaf elements of the subtree
pub fn attribute_count(element: &Element) -> usize {
    if !element.has_children() {
        return 0;
    }

    element.attributes.len() + element.children.iter().map(attribute_count).sum::<usize>()
}

/// Distinct `@string/<name>` references in the element's own attribute
/// values, prefix stripped. Descendants are not searched.
pub fn string_refs(element: &Element) -> HashSet<String> {
    element
        .attributes
        .iter()
        .filter_map(|(_, value)| value.strip_prefix(STRING_REF_PREFIX))
        .map(str::to_string)
        .collect()
}
