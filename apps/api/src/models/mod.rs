pub mod analysis;
pub mod jd;
pub mod resume;
pub mod skill;
