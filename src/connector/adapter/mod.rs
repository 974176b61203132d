mod bedrock_client;
mod http_recipe_client;
mod mock_model;

pub use bedrock_client::*;
pub use http_recipe_client::*;
pub use mock_model::*;
