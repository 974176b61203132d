use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::RecipeRequest;

use super::super::Container;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Submit the ingredients field to the recipe API.
    ///
    /// Mirrors the original form semantics: the raw field (defaulted to an
    /// empty string when absent) is submitted as a single-element sequence,
    /// and the in-flight spinner is cleared on both the success and the
    /// failure path before any result handling.
    pub async fn ask(&self, ingredients: Option<String>) -> Result<String> {
        let field = ingredients.unwrap_or_default();
        let request = RecipeRequest::new(vec![field]);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("Invalid spinner template"),
        );
        spinner.set_message("Generating recipe idea...");
        spinner.enable_steady_tick(Duration::from_millis(120));

        let result = self.container.recipe_client().ask(&request).await;

        spinner.finish_and_clear();

        let response = result?;

        if let Some(error) = response.error() {
            return Ok(format!("Recipe generation failed: {error}"));
        }

        Ok(response.body().unwrap_or("No recipe returned.").to_string())
    }
}
