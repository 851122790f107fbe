pub mod entry;
pub mod form;
