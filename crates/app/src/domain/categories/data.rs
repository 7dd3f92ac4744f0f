//! Categories Data

use serde::Serialize;

use crate::domain::categories::CategoriesServiceError;

/// Row payload for inserting or updating a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    #[serde(rename = "category")]
    pub name: String,

    /// Only written when set, so an update without a new icon keeps the stored one.
    #[serde(rename = "iconUrl", skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl CategoryDraft {
    /// Build a draft from the submitted name.
    ///
    /// # Errors
    ///
    /// Returns [`CategoriesServiceError::MissingName`] when the name is blank.
    pub fn new(name: &str) -> Result<Self, CategoriesServiceError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CategoriesServiceError::MissingName);
        }

        Ok(Self {
            name: name.to_string(),
            icon_url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn trims_name() -> TestResult {
        let draft = CategoryDraft::new("  Footwear ")?;

        assert_eq!(draft.name, "Footwear");

        Ok(())
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = CategoryDraft::new("   ");

        assert!(
            matches!(result, Err(CategoriesServiceError::MissingName)),
            "expected MissingName, got {result:?}"
        );
    }

    #[test]
    fn serializes_platform_column_names() -> TestResult {
        let mut draft = CategoryDraft::new("Footwear")?;

        assert_eq!(serde_json::to_value(&draft)?, json!({ "category": "Footwear" }));

        draft.icon_url = Some("https://cdn.test/icon.svg".to_string());

        assert_eq!(
            serde_json::to_value(&draft)?,
            json!({ "category": "Footwear", "iconUrl": "https://cdn.test/icon.svg" })
        );

        Ok(())
    }
}
