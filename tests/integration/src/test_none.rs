//! Optional nested records.

#[cfg(test)]
mod tests {
    use crate::models::{InnerModel, OuterModel};
    use crate::{from_xml, to_xml};

    #[test]
    fn test_should_omit_absent_record() -> anyhow::Result<()> {
        let xml = to_xml(&OuterModel { inner: None })?;
        assert_eq!(xml, r#"<?xml version="1.0" ?><outer/>"#);
        Ok(())
    }

    #[test]
    fn test_should_render_present_record() -> anyhow::Result<()> {
        let xml = to_xml(&OuterModel {
            inner: Some(InnerModel),
        })?;
        assert_eq!(xml, r#"<?xml version="1.0" ?><outer><inner/></outer>"#);
        Ok(())
    }

    #[test]
    fn test_should_load_absent_record_as_none() -> anyhow::Result<()> {
        let model: OuterModel = from_xml(r#"<?xml version="1.0" ?><outer/>"#)?;
        assert_eq!(model.inner, None);
        Ok(())
    }

    #[test]
    fn test_should_load_present_record() -> anyhow::Result<()> {
        let model: OuterModel = from_xml(r#"<?xml version="1.0" ?><outer><inner/></outer>"#)?;
        assert_eq!(model.inner, Some(InnerModel));
        Ok(())
    }

    #[test]
    fn test_should_ignore_unknown_children() -> anyhow::Result<()> {
        let model: OuterModel = from_xml("<outer><other/></outer>")?;
        assert_eq!(model.inner, None);
        Ok(())
    }
}
