//! Small display helpers for panel labels

/// Split a trailing "(IfcBuildingStorey)"-style marker off a display name
///
/// The IFC importer suffixes entity names with their class in parentheses;
/// the panel renders that marker dimmed rather than as part of the label.
/// Returns the base label and the marker, if one is present.
pub fn split_type_tag(name: &str) -> (String, Option<String>) {
    if let Some(start) = name.rfind("(Ifc") {
        if start > 0 && name.ends_with(')') {
            let label = name[..start].trim_end().to_string();
            let tag = name[start..].to_string();
            return (label, Some(tag));
        }
    }
    (name.to_string(), None)
}
