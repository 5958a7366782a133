pub mod date;
pub mod html;
