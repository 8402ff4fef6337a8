//! UI Components

mod filter_panel;
mod like_button;
mod multi_select;
mod pagination;
mod plan_finder;
mod plan_list;
mod range_input;

pub use filter_panel::FilterPanel;
pub use like_button::LikeButton;
pub use multi_select::MultiSelect;
pub use pagination::Pagination;
pub use plan_finder::{FilterSignals, PlanFinder, PlanView, RangeSignals};
pub use plan_list::PlanList;
pub use range_input::RangeInput;
