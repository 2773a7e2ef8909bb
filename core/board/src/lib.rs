//! 格子戰棋核心
//!
//! - `logic`：棋盤索引與範圍搜尋（純資料，不依賴 ECS）
//! - `ecs_logic`：單位、屬性、回合通知與狀態效果（建立在 `bevy_ecs::World` 上）

pub mod domain;
pub mod ecs_logic;
pub mod ecs_types;
pub mod error;
pub mod loader;
pub mod loader_schema;
pub mod logic;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use domain::alias;
pub use domain::constants;
