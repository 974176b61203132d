pub mod container;
pub mod controller;
pub mod router;
pub mod server;

pub use container::{Container, ContainerConfig};
pub use router::Router;
pub use server::RecipeApiServer;
