pub mod diary;
pub mod health;
pub mod templates;
pub mod timeline;
