use std::sync::Arc;

use tracing::{debug, info};

use crate::application::ModelInvoker;
use crate::domain::{DomainError, RecipeRequest, RecipeResponse};

/// Fixed instruction template; the comma-space-joined ingredients are
/// spliced between the prefix and the trailing period.
const INSTRUCTION_PREFIX: &str = "Suggest a recipe idea using these ingredients: ";

pub struct GenerateRecipeUseCase {
    model: Arc<dyn ModelInvoker>,
}

impl GenerateRecipeUseCase {
    pub fn new(model: Arc<dyn ModelInvoker>) -> Self {
        Self { model }
    }

    /// Render the natural-language instruction for a set of ingredients.
    ///
    /// Pure and idempotent: the same ingredients always yield the same
    /// instruction.  An empty sequence degrades to an empty join, producing
    /// a syntactically valid (if semantically empty) instruction.
    pub fn build_instruction(ingredients: &[String]) -> String {
        format!("{}{}.", INSTRUCTION_PREFIX, ingredients.join(", "))
    }

    pub async fn execute(&self, request: &RecipeRequest) -> Result<RecipeResponse, DomainError> {
        info!(
            "Generating recipe idea for {} ingredient(s)",
            request.ingredients().len()
        );

        let instruction = Self::build_instruction(request.ingredients());
        debug!("Model instruction: {instruction}");

        let text = self.model.invoke(&instruction).await?;

        Ok(RecipeResponse::success(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_joins_ingredients_with_comma_space() {
        let ingredients = vec!["eggs".to_string(), "flour".to_string()];
        assert_eq!(
            GenerateRecipeUseCase::build_instruction(&ingredients),
            "Suggest a recipe idea using these ingredients: eggs, flour."
        );
    }

    #[test]
    fn instruction_for_empty_ingredients_has_empty_join() {
        assert_eq!(
            GenerateRecipeUseCase::build_instruction(&[]),
            "Suggest a recipe idea using these ingredients: ."
        );
    }

    #[test]
    fn instruction_keeps_single_element_verbatim() {
        // The form handler submits the raw text field as one element, commas
        // included; the join of one element is the element itself.
        let ingredients = vec!["eggs, flour, milk".to_string()];
        assert_eq!(
            GenerateRecipeUseCase::build_instruction(&ingredients),
            "Suggest a recipe idea using these ingredients: eggs, flour, milk."
        );
    }
}
