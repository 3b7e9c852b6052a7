pub mod budget;
pub mod meeting;
pub mod project;
pub mod status;
pub mod timeline;
