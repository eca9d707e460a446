use std::collections::{
    BTreeMap,
    HashMap,
};

use serde::Deserialize;

/// Opaque identifier shared by every element of one skill. Stable across the
/// Japanese page text and the translated resource addressed by it.
pub type SkillId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Japanese,
    English,
}

impl Language {
    /// Tag used in translation resource paths.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Japanese => "jp",
            Language::English => "en",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Japanese => "日本語",
            Language::English => "English",
        }
    }
}

/// One translated skill document, as served per skill. Either the whole
/// document was fetched or nothing was; there is no partial state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillFields {
    pub name: String,
    pub desc: String,
}

/// The closed set of fields that own a display slot. Field markers outside
/// this set are still recorded on the skill but never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Desc,
}

impl FieldName {
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Desc => "desc",
        }
    }

    pub fn parse(marker: &str) -> Option<Self> {
        match marker {
            "name" => Some(FieldName::Name),
            "desc" => Some(FieldName::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Skill {
    id: SkillId,
    current: Language,
    source: HashMap<String, String>,
    translated: Option<SkillFields>,
    bound: BTreeMap<FieldName, String>,
}

impl Skill {
    pub fn new(id: SkillId) -> Self {
        Self {
            id,
            current: Language::Japanese,
            source: HashMap::new(),
            translated: None,
            bound: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn current_language(&self) -> Language {
        self.current
    }

    /// Records one collected element: the trimmed Japanese text under the raw
    /// field marker, and a display slot when the marker is a known field.
    /// A duplicate marker overwrites the earlier binding.
    pub fn record_field(&mut self, field: &str, text: &str) {
        let text = text.trim().to_string();
        if let Some(name) = FieldName::parse(field) {
            self.bound.insert(name, text.clone());
        }
        self.source.insert(field.to_string(), text);
    }

    pub fn set_translation(&mut self, fields: SkillFields) {
        self.translated = Some(fields);
    }

    pub fn has_translation(&self) -> bool {
        self.translated.is_some()
    }

    pub fn translation(&self) -> Option<&SkillFields> {
        self.translated.as_ref()
    }

    pub fn source_field(&self, field: &str) -> Option<&str> {
        self.source.get(field).map(String::as_str)
    }

    /// Text currently shown for a field, if the page bound one.
    pub fn display(&self, field: FieldName) -> Option<&str> {
        self.bound.get(&field).map(String::as_str)
    }

    /// Rewrites every bound display slot with the requested language's text
    /// and remembers the language. Requesting English while no translation
    /// exists changes nothing, not even the remembered language.
    pub fn set_language(&mut self, lang: Language) {
        let fields = match lang {
            Language::English => match self.translated.clone() {
                Some(fields) => fields,
                None => return,
            },
            Language::Japanese => SkillFields {
                name: self.source.get(FieldName::Name.key()).cloned().unwrap_or_default(),
                desc: self.source.get(FieldName::Desc.key()).cloned().unwrap_or_default(),
            },
        };

        for (field, slot) in self.bound.iter_mut() {
            *slot = match field {
                FieldName::Name => fields.name.clone(),
                FieldName::Desc => fields.desc.clone(),
            };
        }
        self.current = lang;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill_with_fields() -> Skill {
        let mut skill = Skill::new("101".to_string());
        skill.record_field("name", "  炎の一撃  ");
        skill.record_field("desc", "敵単体に炎属性ダメージ");
        skill
    }

    #[test]
    fn recorded_text_is_trimmed() {
        let skill = skill_with_fields();
        assert_eq!(skill.display(FieldName::Name), Some("炎の一撃"));
        assert_eq!(skill.source_field("name"), Some("炎の一撃"));
    }

    #[test]
    fn english_without_translation_is_a_no_op() {
        let mut skill = skill_with_fields();
        skill.set_language(Language::English);

        assert_eq!(skill.current_language(), Language::Japanese);
        assert_eq!(skill.display(FieldName::Name), Some("炎の一撃"));
        assert_eq!(skill.display(FieldName::Desc), Some("敵単体に炎属性ダメージ"));
    }

    #[test]
    fn english_with_translation_rewrites_every_slot() {
        let mut skill = skill_with_fields();
        skill.set_translation(SkillFields {
            name: "Flame Strike".to_string(),
            desc: "Fire damage to one enemy".to_string(),
        });
        skill.set_language(Language::English);

        assert_eq!(skill.current_language(), Language::English);
        assert_eq!(skill.display(FieldName::Name), Some("Flame Strike"));
        assert_eq!(skill.display(FieldName::Desc), Some("Fire damage to one enemy"));
    }

    #[test]
    fn round_trip_restores_the_original_text() {
        let mut skill = skill_with_fields();
        skill.set_translation(SkillFields {
            name: "Flame Strike".to_string(),
            desc: "Fire damage to one enemy".to_string(),
        });

        skill.set_language(Language::English);
        skill.set_language(Language::Japanese);

        assert_eq!(skill.current_language(), Language::Japanese);
        assert_eq!(skill.display(FieldName::Name), Some("炎の一撃"));
        assert_eq!(skill.display(FieldName::Desc), Some("敵単体に炎属性ダメージ"));
    }

    #[test]
    fn setting_the_same_language_twice_changes_nothing() {
        let mut skill = skill_with_fields();
        skill.set_translation(SkillFields {
            name: "Flame Strike".to_string(),
            desc: "Fire damage to one enemy".to_string(),
        });

        skill.set_language(Language::English);
        let first = skill.clone();
        skill.set_language(Language::English);

        assert_eq!(skill.display(FieldName::Name), first.display(FieldName::Name));
        assert_eq!(skill.display(FieldName::Desc), first.display(FieldName::Desc));
        assert_eq!(skill.current_language(), first.current_language());
    }

    #[test]
    fn unknown_marker_gets_no_display_slot() {
        let mut skill = Skill::new("7".to_string());
        skill.record_field("undefined", "stray text");

        assert_eq!(skill.source_field("undefined"), Some("stray text"));
        assert_eq!(skill.display(FieldName::Name), None);
        assert_eq!(skill.display(FieldName::Desc), None);
    }

    #[test]
    fn partial_skill_only_writes_bound_fields() {
        let mut skill = Skill::new("8".to_string());
        skill.record_field("name", "ガード");
        skill.set_translation(SkillFields {
            name: "Guard".to_string(),
            desc: "unused".to_string(),
        });

        skill.set_language(Language::English);
        assert_eq!(skill.display(FieldName::Name), Some("Guard"));
        assert_eq!(skill.display(FieldName::Desc), None);
    }
}
