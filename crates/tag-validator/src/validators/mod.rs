//! Built-in validators

pub mod custom;
pub mod numeric;
pub mod string;
pub mod uuid;

pub use custom::CustomValidator;
pub use numeric::NumberValidator;
pub use string::StringValidator;
pub use uuid::UuidValidator;
