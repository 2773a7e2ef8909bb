//! 關卡載入器

use crate::error::{LoadError, Result};
use crate::loader_schema::LevelData;

/// 反序列化關卡 TOML
///
/// `source_name` 只用於錯誤訊息（通常是檔名）
pub fn parse_level_toml(level_toml: &str, source_name: &str) -> Result<LevelData> {
    let level: LevelData = toml::from_str(level_toml).map_err(|e| LoadError::DeserializeError {
        format: source_name.to_string(),
        reason: e.to_string(),
    })?;

    tracing::debug!(
        level = %level.name,
        tiles = level.tiles.len(),
        "parsed level data from {source_name}"
    );
    Ok(level)
}

