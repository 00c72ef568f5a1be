pub mod authenticate;
pub mod get_photo;
