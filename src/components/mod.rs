//! UI Components
//!
//! Leptos components for the announcement list page.

mod filter_bar;
mod item_card;
mod results_list;
mod status_line;

pub use filter_bar::FilterBar;
pub use item_card::ItemCard;
pub use results_list::ResultsList;
pub use status_line::StatusLine;
