pub mod pointer;

pub use pointer::PointerListener;
