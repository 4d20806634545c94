pub mod components;
pub mod layouts;
pub mod pages;
pub mod sections;

pub use layouts::desktop::desktop_layout;
