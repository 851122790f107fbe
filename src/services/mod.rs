pub mod guard;
pub mod navigation;
pub mod submit;
pub mod transport;
