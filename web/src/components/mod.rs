pub mod common;
pub mod dialog;
pub mod form;
pub mod header;
pub mod icon;
pub mod layout;
pub mod page;
pub mod table_view;
