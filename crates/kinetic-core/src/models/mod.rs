pub mod education_category;
pub mod education_resource;
pub mod exercise;
pub mod timestamp;
pub mod workout_plan;
