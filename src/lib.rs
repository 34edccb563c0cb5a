pub mod config;
pub mod error;
pub mod event;
pub mod form;
pub mod signup;
pub mod ui;
pub mod vim;
pub mod wizard;
