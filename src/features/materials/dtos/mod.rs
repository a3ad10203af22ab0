mod material_dto;

pub use material_dto::{CreateMaterialDto, MaterialResponseDto};
