mod complaint_dto;

pub use complaint_dto::{
    ComplaintDetailResponseDto, ComplaintResponseDto, CreateComplaintDto, ListComplaintsQuery,
    UpdateComplaintDto, UpdateComplaintStatusDto, ValidatePnrDto,
};
