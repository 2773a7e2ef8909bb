//! 依賴 ECS World 的遊戲邏輯

pub mod notification;
pub mod spawner;
pub mod stats;
pub mod status_effect;
pub mod turn;
