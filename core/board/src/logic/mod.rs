//! 核心業務邏輯（不是 ECS System）

pub mod board;
pub mod debug;
pub mod movement;
