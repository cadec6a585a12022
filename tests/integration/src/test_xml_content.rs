//! Element text content scenarios.

#[cfg(test)]
mod tests {
    use crate::models::{ExampleModelWithContent, XmlContentNonStrTypeModel, XmlContentRenameModel};
    use crate::{from_xml, to_xml};

    #[test]
    fn test_should_render_default_content() -> anyhow::Result<()> {
        let xml = to_xml(&ExampleModelWithContent::new("test", 123))?;
        assert_eq!(
            xml,
            r#"<?xml version="1.0" ?><example name="test" value="123">content</example>"#
        );
        Ok(())
    }

    #[test]
    fn test_should_render_assigned_content() -> anyhow::Result<()> {
        let mut model = ExampleModelWithContent::new("test", 123);
        model.xml_content = "content modified".to_owned();
        let xml = to_xml(&model)?;
        assert_eq!(
            xml,
            r#"<?xml version="1.0" ?><example name="test" value="123">content modified</example>"#
        );
        Ok(())
    }

    #[test]
    fn test_should_load_content() -> anyhow::Result<()> {
        let model: ExampleModelWithContent = from_xml(
            r#"<?xml version="1.0" ?><example name="test" value="123">content modified</example>"#,
        )?;
        assert_eq!(model.xml_content, "content modified");
        assert_eq!(model.name, "test");
        assert_eq!(model.value, 123);
        Ok(())
    }

    #[test]
    fn test_should_apply_content_default_for_self_closing_element() -> anyhow::Result<()> {
        let model: ExampleModelWithContent = from_xml(r#"<example name="test" value="123"/>"#)?;
        assert_eq!(model.xml_content, "content");
        Ok(())
    }

    #[test]
    fn test_should_keep_empty_content_of_open_close_pair() -> anyhow::Result<()> {
        let model: ExampleModelWithContent =
            from_xml(r#"<example name="test" value="123"></example>"#)?;
        assert_eq!(model.xml_content, "");
        Ok(())
    }

    #[test]
    fn test_should_render_renamed_content() -> anyhow::Result<()> {
        let model = XmlContentRenameModel {
            xml_content: "test".to_owned(),
        };
        let xml = to_xml(&model)?;
        assert_eq!(xml, r#"<?xml version="1.0" ?><testmodel>test</testmodel>"#);
        Ok(())
    }

    #[test]
    fn test_should_load_renamed_content() -> anyhow::Result<()> {
        let model: XmlContentRenameModel = from_xml("<testmodel>test</testmodel>")?;
        assert_eq!(model.xml_content, "test");
        Ok(())
    }

    #[test]
    fn test_should_render_integer_content() -> anyhow::Result<()> {
        let xml = to_xml(&XmlContentNonStrTypeModel { xml_content: 1 })?;
        assert_eq!(xml, r#"<?xml version="1.0" ?><test>1</test>"#);
        Ok(())
    }

    #[test]
    fn test_should_load_integer_content() -> anyhow::Result<()> {
        let model: XmlContentNonStrTypeModel = from_xml("<test>1</test>")?;
        assert_eq!(model.xml_content, 1);
        Ok(())
    }

    #[test]
    fn test_should_reject_non_numeric_integer_content() {
        let err =
            from_xml::<XmlContentNonStrTypeModel>("<test>one</test>").expect_err("not a number");
        let validation = err.as_validation_error().expect("validation error");
        assert!(validation.has_error_at("xml_content"));
    }

    #[test]
    fn test_should_escape_content_text() -> anyhow::Result<()> {
        let model = XmlContentRenameModel {
            xml_content: "a < b & c".to_owned(),
        };
        let xml = to_xml(&model)?;
        assert!(xml.ends_with("<testmodel>a &lt; b &amp; c</testmodel>"), "{xml}");
        assert_eq!(from_xml::<XmlContentRenameModel>(&xml)?, model);
        Ok(())
    }
}
