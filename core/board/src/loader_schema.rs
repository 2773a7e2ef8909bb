//! Loader 相關的資料結構定義

use crate::domain::alias::LevelName;
use crate::domain::core_types::{Point, TerrainKind};
use crate::error::{LoadError, Result};
use serde::{Deserialize, Serialize};

/// 單一格子的關卡描述
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDescriptor {
    pub pos: Point,
    #[serde(default)]
    pub terrain: TerrainKind,
    #[serde(default)]
    pub obstacle: bool,
}

/// 關卡資料（有序的格子描述列表）
///
/// TOML 格式：
/// ```toml
/// name = "village"
///
/// [[tiles]]
/// pos = { x = 0, y = 0 }
/// terrain = "Forest"
/// obstacle = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    #[serde(default)]
    pub name: LevelName,
    #[serde(default)]
    pub tiles: Vec<TileDescriptor>,
}

impl LevelData {
    /// 從平行陣列組成關卡資料，三個陣列長度必須一致
    pub fn from_parallel(
        positions: &[Point],
        terrains: &[TerrainKind],
        obstacles: &[bool],
    ) -> Result<Self> {
        if positions.len() != terrains.len() || positions.len() != obstacles.len() {
            return Err(LoadError::MisalignedLevelData {
                positions: positions.len(),
                terrains: terrains.len(),
                obstacles: obstacles.len(),
            }
            .into());
        }

        let tiles = positions
            .iter()
            .zip(terrains)
            .zip(obstacles)
            .map(|((&pos, &terrain), &obstacle)| TileDescriptor {
                pos,
                terrain,
                obstacle,
            })
            .collect();

        Ok(Self {
            name: LevelName::new(),
            tiles,
        })
    }
}
