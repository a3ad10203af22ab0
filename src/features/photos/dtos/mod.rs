mod photo_dto;

pub use photo_dto::{
    CreatePhotoDto, DeletePhotoResponseDto, PhotoExportPayload, PhotoExportResultDto,
    PhotoResponseDto,
};
