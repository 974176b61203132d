mod model_invoker;
mod recipe_service;

pub use model_invoker::*;
pub use recipe_service::*;
