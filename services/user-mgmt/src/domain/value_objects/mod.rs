//! 值对象

pub mod email;
pub mod password;
pub mod person_name;
pub mod zip_code;

pub use email::*;
pub use password::*;
pub use person_name::*;
pub use zip_code::*;
