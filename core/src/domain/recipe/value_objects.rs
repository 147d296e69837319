use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeItemInput {
    /// Library id when the client picked an existing ingredient; by-name
    /// find-or-create otherwise.
    pub ingredient_id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub amount_g: f64,
    pub is_main: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeInput {
    pub title: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub steps: Option<String>,
    #[serde(default)]
    pub items: Vec<RecipeItemInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecipeInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub steps: Option<String>,
    /// When present, replaces the item list wholesale.
    pub items: Option<Vec<RecipeItemInput>>,
}

#[derive(Debug, Clone, Default)]
pub struct GetRecipesFilter {
    pub title: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>, // e.g. "title" or "-created_at"
}

/// Older recipes stored their steps as a JSON array of plain strings.
/// Normalize those to the HTML paragraphs the editor produces today.
pub fn normalize_steps(steps: &str) -> String {
    if steps.starts_with('[')
        && let Ok(serde_json::Value::Array(parts)) = serde_json::from_str(steps)
    {
        return parts
            .iter()
            .filter_map(|v| v.as_str())
            .map(|s| format!("<p>{s}</p>"))
            .collect();
    }
    steps.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_legacy_step_array() {
        let legacy = r#"["chop the onions","fry until golden"]"#;
        assert_eq!(
            normalize_steps(legacy),
            "<p>chop the onions</p><p>fry until golden</p>"
        );
    }

    #[test]
    fn test_html_steps_pass_through() {
        let html = "<p>chop</p><p>fry</p>";
        assert_eq!(normalize_steps(html), html);
        // Not valid JSON, even though it starts with a bracket
        assert_eq!(normalize_steps("[not json"), "[not json");
    }
}
