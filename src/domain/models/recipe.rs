use serde::{Deserialize, Serialize};

/// One user interaction's worth of ingredients.
///
/// The sequence is non-unique and order-irrelevant; a missing or absent
/// field deserializes to an empty sequence. An empty sequence is valid
/// input, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRequest {
    #[serde(default)]
    ingredients: Vec<String>,
}

impl RecipeRequest {
    pub fn new(ingredients: Vec<String>) -> Self {
        Self { ingredients }
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

/// The outcome of one recipe generation call.
///
/// Exactly one of `body` and `error` is populated by this crate's own
/// constructors; both remain optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl RecipeResponse {
    pub fn success(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            body: None,
            error: Some(error.into()),
        }
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_without_ingredients_field_defaults_to_empty() {
        let request: RecipeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.is_empty());
    }

    #[test]
    fn response_serialization_skips_absent_fields() {
        let response = RecipeResponse::success("Omelette");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "body": "Omelette" }));

        let response = RecipeResponse::failure("model unavailable");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "model unavailable" }));
    }
}
