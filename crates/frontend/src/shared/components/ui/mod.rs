pub mod rich_select;

pub use rich_select::{RichSelect, RichSelectOption};
