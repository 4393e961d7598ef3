//! Rich Select
//!
//! Dropdown select whose list items carry arbitrary markup while the
//! collapsed control shows a plain-text label.
//!
//! ## Usage
//!
//! ```ignore
//! impl RichSelectOption for MyOption { ... }
//!
//! view! {
//!     <RichSelect
//!         label="Owner"
//!         items=options_signal
//!         render_item=|option: &MyOption| view! { <b>{option.title.clone()}</b> }
//!     />
//! }
//! ```

pub mod component;
pub mod state;
pub mod traits;

pub use component::RichSelect;
pub use state::RichSelectState;
pub use traits::RichSelectOption;
