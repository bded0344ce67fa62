pub mod options;
pub mod status;
