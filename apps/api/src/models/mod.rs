pub mod job;
pub mod resume;

pub use job::{JobRequirement, JobRequirementRecord};
pub use resume::{ResumeProfile, ResumeProfileInput};
