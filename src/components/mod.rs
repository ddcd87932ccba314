//! UI Components
//!
//! Reusable Leptos components.

mod import_panel;
mod item_detail;
mod progress_bar;
mod roadmap_card;
mod roadmap_grid;

pub use import_panel::ImportPanel;
pub use item_detail::ItemDetail;
pub use progress_bar::ProgressBar;
pub use roadmap_card::RoadmapCard;
pub use roadmap_grid::RoadmapGrid;
