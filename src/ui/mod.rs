pub mod custom_cursor;
pub mod icon;
pub mod loading_screen;
pub mod navigation;
pub mod pages;
pub mod sections;
pub mod styles;
pub mod theme;

pub use icon::{Icon, icons};
pub use loading_screen::LoadingScreen;
pub use navigation::Navigation;
pub use theme::{ThemeContext, provide_theme_context, use_theme_context};
