pub mod filter_panel;
pub mod hierarchy_filter;
pub mod tri_state_checkbox;
