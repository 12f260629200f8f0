pub mod html;

pub use html::extract_text;
