pub mod markup;

pub use markup::{markdown_style, render_markup};
