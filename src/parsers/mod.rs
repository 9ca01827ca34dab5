pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

pub use html::{extract, extract_with_limits};
