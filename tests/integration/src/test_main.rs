//! Attribute, naming and parsing scenarios.

#[cfg(test)]
mod tests {
    use xmlmodel_schema::RecordValue;
    use xmlmodel_xml::{SerializeOptions, XmlModelExt, serialize, serialize_record};

    use crate::models::{
        ExampleModel, ExampleModelEmpty, SameNameInAttrAndChild, uppercase_named, verbatim_named,
    };
    use crate::{from_xml, init_tracing, to_xml};

    fn example() -> ExampleModel {
        ExampleModel {
            name: "test".to_owned(),
            value: 123,
        }
    }

    #[test]
    fn test_should_serialize_attributes_with_declaration() -> anyhow::Result<()> {
        let xml = to_xml(&example())?;
        assert_eq!(xml, r#"<?xml version="1.0" ?><example name="test" value="123"/>"#);
        Ok(())
    }

    #[test]
    fn test_should_serialize_without_declaration() -> anyhow::Result<()> {
        init_tracing();
        let xml = serialize(&example(), &SerializeOptions::default().with_declaration(false))?;
        assert_eq!(xml, r#"<example name="test" value="123"/>"#);
        Ok(())
    }

    #[test]
    fn test_should_deserialize_attributes() -> anyhow::Result<()> {
        let model: ExampleModel = from_xml(r#"<example name="test" value="123"/>"#)?;
        assert_eq!(model, example());
        Ok(())
    }

    #[test]
    fn test_should_round_trip_through_extension_methods() -> anyhow::Result<()> {
        let model = example();
        let xml = model.to_xml()?;
        assert_eq!(ExampleModel::from_xml(&xml)?, model);
        Ok(())
    }

    #[test]
    fn test_should_ignore_extra_attributes() -> anyhow::Result<()> {
        let model: ExampleModel = from_xml(r#"<example name="test" value="123" extra="extra"/>"#)?;
        assert_eq!(model, example());
        Ok(())
    }

    #[test]
    fn test_should_accept_large_attribute_values() -> anyhow::Result<()> {
        let name = "a".repeat(100_000);
        let model: ExampleModel = from_xml(&format!(r#"<example name="{name}" value="123"/>"#))?;
        assert_eq!(model.name, name);
        assert_eq!(model.value, 123);
        Ok(())
    }

    #[test]
    fn test_should_fail_to_parse_invalid_documents() {
        for xml in ["", "<invalid>", r#"<example name="test&test" value="123"/>"#] {
            let err = from_xml::<ExampleModel>(xml).expect_err("malformed document");
            assert!(err.is_parse_error(), "{xml:?} gave {err}");
        }
    }

    #[test]
    fn test_should_fail_validation_for_missing_attributes() {
        let err = from_xml::<ExampleModel>(r#"<example name="test"/>"#).expect_err("value missing");
        assert!(err.is_validation_error(), "{err}");
        let validation = err.as_validation_error().expect("validation error");
        assert!(validation.has_error_at("value"));
        assert!(!validation.has_error_at("name"));
    }

    #[test]
    fn test_should_fail_validation_for_non_numeric_attribute() {
        let err = from_xml::<ExampleModel>(r#"<example name="test" value="abc"/>"#)
            .expect_err("value not an integer");
        let validation = err.as_validation_error().expect("validation error");
        assert!(validation.has_error_at("value"));
    }

    #[test]
    fn test_should_escape_attribute_values() -> anyhow::Result<()> {
        let model = ExampleModel {
            name: r#"a&b<c>"d""#.to_owned(),
            value: 1,
        };
        let xml = to_xml(&model)?;
        assert!(xml.contains(r#"name="a&amp;b&lt;c&gt;&quot;d&quot;""#), "{xml}");
        assert_eq!(from_xml::<ExampleModel>(&xml)?, model);
        Ok(())
    }

    #[test]
    fn test_should_derive_element_names() -> anyhow::Result<()> {
        init_tracing();
        let options = SerializeOptions::default();

        let xml = serialize_record(&RecordValue::new(uppercase_named()), &options)?;
        assert_eq!(xml, r#"<?xml version="1.0" ?><EXAMPLEMODELWITHXMLNAMEFUNC/>"#);

        let xml = serialize_record(&RecordValue::new(verbatim_named()), &options)?;
        assert_eq!(xml, r#"<?xml version="1.0" ?><ExampleModelWithXmlNameFuncNone/>"#);
        Ok(())
    }

    #[test]
    fn test_should_keep_attribute_and_child_with_same_name_apart() -> anyhow::Result<()> {
        let model = SameNameInAttrAndChild {
            test: "test str".to_owned(),
            test_model: ExampleModelEmpty,
        };
        let xml = to_xml(&model)?;
        assert_eq!(xml, r#"<?xml version="1.0" ?><test2 test="test str"><test/></test2>"#);

        let loaded: SameNameInAttrAndChild = from_xml(&xml)?;
        assert_eq!(loaded, model);
        assert_eq!(to_xml(&loaded)?, xml);
        Ok(())
    }
}
