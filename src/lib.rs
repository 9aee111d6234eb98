pub mod gui;
pub mod links;
pub mod logging;
pub mod news;
pub mod settings;
pub mod web_search;
