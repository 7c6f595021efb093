//! Collapsible navigation sidebar.
//!
//! The sidebar is split the same way as the other components:
//! - `state` owns the expanded/theme flags, transitions and pointer state.
//! - `style` resolves colors and sizes from the palette and that state.
//! - `layout` turns animated sizes into cell rectangles.
//! - `sidebar_component` handles input and draws everything.

mod layout;
mod model;
mod sidebar_component;
mod state;
pub mod style;

pub use layout::{SidebarLayout, UNITS_PER_COLUMN, label_area, units_to_columns};
pub use model::{RowModel, all_rows, theme_toggle_row};
pub use sidebar_component::SidebarComponent;
pub use state::{SidebarState, SidebarTarget};
