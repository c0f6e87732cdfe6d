pub mod categorizer;
pub mod config;
pub mod gemini;
pub mod http;

// Re-export commonly used types
pub use categorizer::Categorizer;
pub use config::Config;
