mod component;
mod surface;

pub use component::NetworkCanvas;
