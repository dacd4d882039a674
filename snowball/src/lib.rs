pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    client_config_from_args, crawl_options_from_args, handle_crawl, init_logging,
    resolve_output_path, seed_mode_from_args,
};

// Re-export crawl functionality from snowball-core
pub use snowball_core::crawl::{CrawlOptions, SeedMode, execute_crawl};
