//! UI components: the sidebar and the trait they share.

pub mod component;
pub mod sidebar;

pub use component::*;
pub use sidebar::SidebarComponent;
