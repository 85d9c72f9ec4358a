pub mod directory_browser;
pub mod filter_panel;
pub mod record_card;
pub mod selection_chips;
