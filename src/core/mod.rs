pub mod greeter;
pub mod render;
