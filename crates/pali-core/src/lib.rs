pub mod document;
pub mod script;
pub mod search;
pub mod settings;
pub mod translit;
pub mod unicode;
