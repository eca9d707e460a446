use std::{
    collections::HashMap,
    fs,
    path::Path,
};

use regex::Regex;

use crate::core::{
    models::{
        Skill,
        SkillId,
    },
    SkillviewError,
};

pub const SKILL_ID_ATTR: &str = "data-skill-id";
pub const SKILL_FIELD_ATTR: &str = "data-skill-field";

/// One element lifted out of the page: which skill it belongs to, which field
/// of that skill it shows, and its visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedElement {
    pub skill_id: SkillId,
    pub field: Option<String>,
    pub text: String,
}

/// Scans a rendered page for elements carrying the skill-id marker, in
/// document order. Inner markup is stripped and the text trimmed.
pub fn extract_elements(html: &str) -> Result<Vec<TaggedElement>, SkillviewError> {
    let open_tag = Regex::new(r"<([a-zA-Z][a-zA-Z0-9]*)\b([^>]*)>")?;
    let attribute = Regex::new(r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)\s*=\s*"([^"]*)""#)?;
    let tag_boundary = Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)\b[^>]*>")?;
    let markup = Regex::new(r"<[^>]*>")?;

    let mut elements = Vec::new();

    for caps in open_tag.captures_iter(html) {
        let attrs_raw = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        if !attrs_raw.contains(SKILL_ID_ATTR) {
            continue;
        }

        let mut attrs: HashMap<String, String> = HashMap::new();
        for attr in attribute.captures_iter(attrs_raw) {
            attrs.insert(attr[1].to_string(), attr[2].to_string());
        }

        let skill_id = match attrs.get(SKILL_ID_ATTR) {
            Some(id) => id.clone(),
            None => continue,
        };

        let tag = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let body_start = caps.get(0).map(|m| m.end()).unwrap_or(0);

        // An unterminated element still counts, it just shows no text.
        let inner = element_end(&html[body_start..], tag, &tag_boundary)
            .map(|end| &html[body_start..body_start + end])
            .unwrap_or("");
        let text = markup.replace_all(inner, "").trim().to_string();

        elements.push(TaggedElement {
            skill_id,
            field: attrs.get(SKILL_FIELD_ATTR).cloned(),
            text,
        });
    }

    Ok(elements)
}

/// Finds where an element opened just before `body` ends, tracking nesting
/// depth so a child with the same tag name does not end it early. Returns the
/// offset of the matching closing tag, or `None` when the element never
/// closes.
fn element_end(body: &str, tag: &str, tag_boundary: &Regex) -> Option<usize> {
    let mut depth = 1usize;

    for caps in tag_boundary.captures_iter(body) {
        if &caps[2] != tag {
            continue;
        }

        let whole = caps.get(0)?;
        if !caps[1].is_empty() {
            depth -= 1;
            if depth == 0 {
                return Some(whole.start());
            }
        } else if !whole.as_str().ends_with("/>") {
            depth += 1;
        }
    }

    None
}

/// Groups elements into skills. The registry is keyed by skill id and created
/// on demand; the result is frozen in first-encounter order of distinct ids.
///
/// An element without a field marker is recorded under the literal field name
/// "undefined" and otherwise processed normally. The stray entry never gets a
/// display slot, so it stays invisible; it is kept observable on purpose.
pub fn collect_skills<I>(elements: I) -> Vec<Skill>
where
    I: IntoIterator<Item = TaggedElement>,
{
    let mut order: Vec<SkillId> = Vec::new();
    let mut registry: HashMap<SkillId, Skill> = HashMap::new();

    for element in elements {
        let skill = registry.entry(element.skill_id.clone()).or_insert_with(|| {
            order.push(element.skill_id.clone());
            Skill::new(element.skill_id.clone())
        });

        let field = element.field.as_deref().unwrap_or("undefined");
        skill.record_field(field, &element.text);
    }

    order.into_iter().filter_map(|id| registry.remove(&id)).collect()
}

pub fn load_page(path: &Path) -> Result<Vec<Skill>, SkillviewError> {
    let html = fs::read_to_string(path)
        .map_err(|e| SkillviewError::FailedToLoadPage(format!("{}: {}", path.display(), e)))?;
    let elements = extract_elements(&html)?;
    Ok(collect_skills(elements))
}
