pub mod error_toast;
pub mod event_list;
pub mod event_table;
pub mod footer;
pub mod help_overlay;
pub mod status_bar;
