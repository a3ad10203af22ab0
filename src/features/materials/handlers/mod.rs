mod material_handler;

pub use material_handler::{
    __path_create_material, __path_list_materials, create_material, list_materials,
};
