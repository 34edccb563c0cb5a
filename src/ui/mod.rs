mod confetti;
mod layout;
mod theme;

pub use confetti::Confetti;
pub use layout::Layout;
pub use theme::{Theme, ThemeMode};
