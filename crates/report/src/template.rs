use std::path::{Path, PathBuf};

use crate::aggregation::Groups;

const TEMPLATE_PREFIX: &str = "PersonProgramExercises";
const TEMPLATE_EXTENSION: &str = "jasper";

/// Highest variant with at least one group. An empty report still prints one column.
pub fn variant_count(groups: &Groups) -> u8 {
    groups
        .keys()
        .next_back()
        .map(|variant| variant.index())
        .unwrap_or(1)
}

pub fn template_name(variant_count: u8) -> String {
    format!("{}{}Session", TEMPLATE_PREFIX, variant_count)
}

pub fn template_path(dir: &Path, variant_count: u8) -> PathBuf {
    dir.join(template_name(variant_count))
        .with_extension(TEMPLATE_EXTENSION)
}
