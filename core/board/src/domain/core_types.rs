//! 基本資料類型定義

use crate::domain::alias::Coord;
use serde::{Deserialize, Serialize};
use std::ops::Add;
use strum_macros::{Display, EnumCount, EnumIter};

// ============================================================================
// 座標
// ============================================================================

/// 棋盤座標
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// 逐分量取最小值
    pub fn min(self, other: Point) -> Point {
        Point {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// 逐分量取最大值
    pub fn max(self, other: Point) -> Point {
        Point {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// 曼哈頓距離
    pub fn manhattan(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// 逐分量相加，任一分量溢位時回傳 `None`
    pub fn checked_add(self, rhs: Point) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add(rhs.x)?,
            y: self.y.checked_add(rhs.y)?,
        })
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

// ============================================================================
// 地形與格子
// ============================================================================

/// 地形種類
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum TerrainKind {
    #[default]
    Plain,
    Hill,
    Mountain,
    Forest,
    ShallowWater,
    DeepWater,
}

impl TerrainKind {
    /// 步行單位能否踏入
    pub fn is_walkable(self) -> bool {
        !matches!(self, TerrainKind::DeepWater)
    }
}

/// 棋盤上的單一格子
///
/// 載入後即不再變動；搜尋用的距離與前驅記錄在 `SearchResult`，不寫回格子。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub pos: Point,
    pub terrain: TerrainKind,
    pub obstacle: bool,
}

impl Tile {
    pub fn new(pos: Point, terrain: TerrainKind, obstacle: bool) -> Self {
        Self {
            pos,
            terrain,
            obstacle,
        }
    }
}

// ============================================================================
// 屬性與狀態效果
// ============================================================================

/// 單位屬性種類
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
)]
pub enum StatKind {
    Level,
    Experience,
    Hp,
    MaxHp,
    Mp,
    MaxMp,
    Attack,
    Defense,
    MagicAttack,
    MagicDefense,
    Evade,
    Resistance,
    Speed,
    Move,
    Jump,
    Counter,
}

/// 狀態效果種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum StatusEffectKind {
    /// 燃燒：每回合開始扣除最大 HP 的 1/15
    Burn,
}
