pub mod controller;
pub mod dom;
pub mod horizontal;

pub use dom::use_section_scroll;
pub use horizontal::use_horizontal_wheel;
