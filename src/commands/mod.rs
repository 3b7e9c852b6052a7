pub mod budget;
pub mod export;
pub mod meetings;
pub mod project;
pub mod settings;
pub mod state;
pub mod status;
pub mod timeline;
