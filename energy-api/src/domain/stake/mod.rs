pub mod record;
pub mod submit;
pub mod validate;
