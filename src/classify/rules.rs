// Ordered classification rules for resource files
//
// Decompiled resources follow the `res/<type>[-qualifiers]/` folder layout,
// so the folder name plus the root tag is enough to pick a category. Rules
// are tried top to bottom and the first match wins.

use super::ResourcePath;

/// Root tags that are never counted, whatever folder they live in
const IGNORED_ROOT_TAGS: &[&str] = &["menu", "device-admin", "rotate", "selector", "shape", "vector"];

/// Built-in value tables under `res/values*` that carry no signal
const BUILTIN_VALUE_TABLES: &[&str] = &[
    "/attrs.xml",
    "/anims.xml",
    "/bools.xml",
    "/colors.xml",
    "/drawables.xml",
    "/fractions.xml",
    "/integers.xml",
    "/layouts.xml",
    "/ids.xml",
    "/plurals.xml",
    "/public.xml",
    "/raws.xml",
    "/xmls.xml",
];

const RESOURCE_TABLE_TAG: &str = "resources";

/// Category a resource file is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Root tag in the ignore set (`menu`, `selector`, `vector`, ...)
    IgnoredRoot,
    /// `res/layout*/` view hierarchy
    Layout,
    /// `res/xml*/` or `res/values*/public.xml`, recognized but not counted
    Reserved,
    /// `dimens.xml` table
    Dimensions,
    /// `arrays.xml` table
    Arrays,
    Animation,
    Color,
    Font,
    Interpolator,
    /// `strings.xml` table
    Strings,
    /// `styles.xml` table
    Styles,
    Drawable,
    Transition,
    /// One of the built-in `res/values*` tables
    BuiltinValues,
    Unrecognized,
}

impl ResourceKind {
    /// Apply the rule table to a file's location and root tag
    pub fn classify(path: &ResourcePath, root_tag: &str) -> Self {
        let is_xml = path.ends_with(".xml");
        let is_table = root_tag == RESOURCE_TABLE_TAG;
        let in_res = path.contains("/res/");

        if IGNORED_ROOT_TAGS.contains(&root_tag) {
            Self::IgnoredRoot
        } else if path.contains("/res/layout") && is_xml {
            Self::Layout
        } else if (path.contains("/res/xml") && is_xml)
            || (path.contains("/res/values") && path.ends_with("/public.xml"))
        {
            Self::Reserved
        } else if in_res && path.ends_with("/dimens.xml") && is_table {
            Self::Dimensions
        } else if in_res && path.ends_with("/arrays.xml") && is_table {
            Self::Arrays
        } else if path.contains("/res/anim") && is_xml {
            Self::Animation
        } else if path.contains("/res/color/") && is_xml {
            Self::Color
        } else if path.contains("/res/font/") && is_xml {
            Self::Font
        } else if path.contains("/res/interpolator") && is_xml {
            Self::Interpolator
        } else if in_res && path.ends_with("/strings.xml") && is_table {
            Self::Strings
        } else if in_res && path.ends_with("/styles.xml") && is_table {
            Self::Styles
        } else if path.contains("/res/drawable") && is_xml {
            Self::Drawable
        } else if path.contains("/res/transition") && is_xml {
            Self::Transition
        } else if path.contains("/res/values")
            && is_table
            && BUILTIN_VALUE_TABLES.iter().any(|t| path.ends_with(t))
        {
            Self::BuiltinValues
        } else {
            Self::Unrecognized
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::IgnoredRoot => "ignored root",
            Self::Layout => "layout",
            Self::Reserved => "reserved",
            Self::Dimensions => "dimensions",
            Self::Arrays => "arrays",
            Self::Animation => "animation",
            Self::Color => "color",
            Self::Font => "font",
            Self::Interpolator => "interpolator",
            Self::Strings => "strings",
            Self::Styles => "styles",
            Self::Drawable => "drawable",
            Self::Transition => "transition",
            Self::BuiltinValues => "built-in values",
            Self::Unrecognized => "unrecognized",
        }
    }
}
