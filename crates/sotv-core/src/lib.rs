pub mod config;
pub mod logging;

pub mod analytics;
pub mod consent;
pub mod countdown;
pub mod inventory;
pub mod lookup;
pub mod resolver;
pub mod search;
pub mod session;
pub mod url_model;
