pub mod decay;
pub mod emit;

pub use decay::*;
pub use emit::*;
