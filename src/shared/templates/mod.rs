//! Jinja2 templates used to build longer text replies.

pub mod engine;

pub use engine::render_template;
