pub mod components;
pub mod layout;
pub mod styles;
pub mod theme;

// Individual re-exports done in components/mod.rs
pub use layout::AppLayout;
pub use theme::{Theme, ThemeProvider};
