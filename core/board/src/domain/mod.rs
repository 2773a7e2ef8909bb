//! 領域型別（與 ECS 無關）

pub mod alias;
pub mod constants;
pub mod core_types;
