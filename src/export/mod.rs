pub mod clipboard;
pub mod png;
