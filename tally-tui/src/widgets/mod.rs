//! Widgets for the tally TUI.

mod budget_bar;
mod cart_list;
mod item_list;
mod suggestion_box;
mod text_input;

pub use budget_bar::BudgetBarWidget;
pub use cart_list::CartListWidget;
pub use item_list::{ItemListWidget, MAX_QUANTITY};
pub use suggestion_box::SuggestionBox;
pub use text_input::TextInput;
