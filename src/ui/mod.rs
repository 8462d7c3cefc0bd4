pub mod app;
pub mod events;
pub mod features;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod list;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

pub use runtime::run;
