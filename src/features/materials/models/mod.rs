mod material;

pub use material::{Material, NewMaterial};
