#[cfg(test)]
mod tests {
    use crate::core::{
        collector::{
            collect_skills,
            extract_elements,
            TaggedElement,
        },
        models::FieldName,
    };

    const PAGE: &str = r#"
        <html><body>
        <div class="unit">
            <span data-skill-id="101" data-skill-field="name"> 炎の一撃 </span>
            <p data-skill-id="101" data-skill-field="desc">敵単体に<b>炎属性</b>ダメージ</p>
            <span data-skill-id="205" data-skill-field="name">ガード</span>
            <p data-skill-id="205" data-skill-field="desc">被ダメージを軽減</p>
        </div>
        </body></html>
    "#;

    #[test]
    fn extracts_tagged_elements_in_document_order() {
        let elements = extract_elements(PAGE).unwrap();

        assert_eq!(elements.len(), 4);
        assert_eq!(elements[0].skill_id, "101");
        assert_eq!(elements[0].field.as_deref(), Some("name"));
        assert_eq!(elements[0].text, "炎の一撃");
        assert_eq!(elements[3].skill_id, "205");
        assert_eq!(elements[3].field.as_deref(), Some("desc"));
    }

    #[test]
    fn inner_markup_is_stripped_from_text() {
        let elements = extract_elements(PAGE).unwrap();
        assert_eq!(elements[1].text, "敵単体に炎属性ダメージ");
    }

    #[test]
    fn untagged_elements_are_ignored() {
        let html = r#"<span class="label">untagged</span><span data-skill-id="1" data-skill-field="name">x</span>"#;
        let elements = extract_elements(html).unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].skill_id, "1");
    }

    #[test]
    fn attribute_order_does_not_matter() {
        let html = r#"<span data-skill-field="name" data-skill-id="9">reversed</span>"#;
        let elements = extract_elements(html).unwrap();
        assert_eq!(elements[0].skill_id, "9");
        assert_eq!(elements[0].field.as_deref(), Some("name"));
    }

    #[test]
    fn elements_with_the_same_id_group_into_one_skill() {
        let skills = collect_skills(extract_elements(PAGE).unwrap());

        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].id(), "101");
        assert_eq!(skills[0].display(FieldName::Name), Some("炎の一撃"));
        assert_eq!(skills[0].display(FieldName::Desc), Some("敵単体に炎属性ダメージ"));
        assert_eq!(skills[1].id(), "205");
        assert_eq!(skills[1].display(FieldName::Name), Some("ガード"));
    }

    #[test]
    fn skills_keep_first_encounter_order() {
        let elements = vec![
            TaggedElement { skill_id: "b".into(), field: Some("name".into()), text: "B".into() },
            TaggedElement { skill_id: "a".into(), field: Some("name".into()), text: "A".into() },
            TaggedElement { skill_id: "b".into(), field: Some("desc".into()), text: "B2".into() },
        ];

        let skills = collect_skills(elements);
        let ids: Vec<&str> = skills.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn missing_field_marker_is_kept_as_the_literal_undefined() {
        let html = r#"<span data-skill-id="7">stray</span>"#;
        let skills = collect_skills(extract_elements(html).unwrap());

        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].source_field("undefined"), Some("stray"));
        assert_eq!(skills[0].display(FieldName::Name), None);
        assert_eq!(skills[0].display(FieldName::Desc), None);
    }

    #[test]
    fn nested_same_tag_keeps_the_whole_text() {
        let html =
            r#"<div data-skill-id="1" data-skill-field="desc"><div>first</div> and second</div>"#;
        let elements = extract_elements(html).unwrap();

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].text, "first and second");
    }

    #[test]
    fn self_closing_child_does_not_shift_the_element_end() {
        let html = r#"<div data-skill-id="2" data-skill-field="desc">before<div/>after</div>"#;
        let elements = extract_elements(html).unwrap();

        assert_eq!(elements[0].text, "beforeafter");
    }

    #[test]
    fn unterminated_element_contributes_empty_text() {
        let html = r#"<span data-skill-id="3" data-skill-field="name">never closed"#;
        let elements = extract_elements(html).unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].text, "");
    }

    #[test]
    fn empty_page_collects_no_skills() {
        let skills = collect_skills(extract_elements("<html></html>").unwrap());
        assert!(skills.is_empty());
    }
}
