use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Submit the ingredients field and print the suggested recipe
    Ask {
        /// Raw contents of the ingredients field; submitted as-is, commas included
        ingredients: Option<String>,
    },

    /// Start the recipe API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
