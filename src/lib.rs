pub mod core;
pub mod form;
pub mod gui;
pub mod persistence;
