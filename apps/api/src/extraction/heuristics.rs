//! Multi-pass text-window classifier over the segmented JD sections.

use std::collections::BTreeMap;

use crate::models::jd::JdSections;
use crate::models::skill::{Importance, SkillCatalog};

/// Cues that downgrade a nearby skill to optional. Checked before upgrade cues.
pub const DOWNGRADE_CUES: &[&str] = &["nice to have", "plus", "bonus", "preferred", "good to have"];
/// Cues that mark a nearby skill as critical.
pub const UPGRADE_CUES: &[&str] = &["must", "required", "essential", "minimum", "proficiency in"];

/// Characters either side of the first mention inspected in the requirements section.
pub const REQUIREMENTS_WINDOW: usize = 40;
/// Same, for the responsibilities section.
pub const RESPONSIBILITIES_WINDOW: usize = 30;

/// Classifies a lower-cased snippet. Downgrade cues win over upgrade cues.
pub fn classify_snippet(snippet: &str, base: Importance) -> Importance {
    if DOWNGRADE_CUES.iter().any(|cue| snippet.contains(cue)) {
        Importance::Optional
    } else if UPGRADE_CUES.iter().any(|cue| snippet.contains(cue)) {
        Importance::Critical
    } else {
        base
    }
}

/// Returns the slice spanning `radius` characters before and after byte offset `idx`.
/// Offsets are counted in chars so multi-byte text never splits a code point.
pub fn context_window(text: &str, idx: usize, radius: usize) -> &str {
    if radius == 0 {
        return "";
    }
    let start = text[..idx]
        .char_indices()
        .rev()
        .nth(radius - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let end = text[idx..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| idx + i)
        .unwrap_or(text.len());
    &text[start..end]
}

/// Runs the three heuristic passes and returns skill id → importance.
///
/// 1. requirements: every catalog hit, window cues, base critical
/// 2. nice_to_have: every catalog hit becomes optional, overwriting pass 1
/// 3. responsibilities: hits not yet classified, window cues, base critical
pub fn classify_sections(sections: &JdSections, catalog: &SkillCatalog) -> BTreeMap<i64, Importance> {
    let requirements = sections.requirements.to_lowercase();
    let nice_to_have = sections.nice_to_have.to_lowercase();
    let responsibilities = sections.responsibilities.to_lowercase();

    let mut found = BTreeMap::new();

    for (id, name) in searchable_names(catalog) {
        if let Some(idx) = requirements.find(&name) {
            let snippet = context_window(&requirements, idx, REQUIREMENTS_WINDOW);
            found.insert(id, classify_snippet(snippet, Importance::Critical));
        }
    }

    for (id, name) in searchable_names(catalog) {
        if nice_to_have.contains(&name) {
            found.insert(id, Importance::Optional);
        }
    }

    for (id, name) in searchable_names(catalog) {
        if found.contains_key(&id) {
            continue;
        }
        if let Some(idx) = responsibilities.find(&name) {
            let snippet = context_window(&responsibilities, idx, RESPONSIBILITIES_WINDOW);
            found.insert(id, classify_snippet(snippet, Importance::Critical));
        }
    }

    found
}

/// Lower-cased catalog names, skipping blanks that would match everywhere.
fn searchable_names(catalog: &SkillCatalog) -> impl Iterator<Item = (i64, String)> + '_ {
    catalog.entries().iter().filter_map(|e| {
        let name = e.name.trim().to_lowercase();
        (!name.is_empty()).then_some((e.id, name))
    })
}
