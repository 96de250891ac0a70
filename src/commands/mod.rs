pub mod configure;
pub mod format;
