//! Project-level configuration (`.filesecret.toml`).

pub mod settings;

pub use settings::Settings;
