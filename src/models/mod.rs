pub mod collaboration;
pub mod identity;
