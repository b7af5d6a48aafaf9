pub mod cv;
pub mod defaults;
pub mod entities;
pub mod field_path;
pub mod flags;
pub mod ids;
