pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{GenerateRecipeUseCase, ModelInvoker, RecipeService};

pub use cli::Commands;

pub use connector::{
    api::{Container, ContainerConfig, RecipeApiServer, Router},
    BedrockClient, BedrockConfig, HttpRecipeClient, MockModelInvoker,
};

pub use domain::{DomainError, RecipeRequest, RecipeResponse};
