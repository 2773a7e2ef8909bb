//! 測試輔助：用 ASCII art 視覺化定義關卡
//!
//! 只在 `test-helpers` feature 下編譯。

use crate::domain::alias::Coord;
use crate::domain::core_types::{Point, TerrainKind};
use crate::error::{LoadError, Result};
use crate::loader_schema::{LevelData, TileDescriptor};
use std::collections::HashMap;

/// 從 ASCII 格式載入關卡
///
/// ASCII 格式：每行用空格分隔的符號，第 y 行第 x 個符號對應 `Point { x, y }`
/// - `.` = 平地
/// - `#` = 障礙物（平地）
/// - `~` = 深水
/// - `_` = 沒有格子（洞）
/// - 其他字串（`S`、`E` 等）= 標記位置（也是平地），相同標記收集成 Vec
///
/// 返回：(關卡資料, 標記映射)
///
/// 例如：
/// ```text
/// S . #
/// . _ E
/// ~ . .
/// ```
pub fn load_from_ascii(ascii: &str) -> Result<(LevelData, HashMap<String, Vec<Point>>)> {
    let lines: Vec<&str> = ascii
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(LoadError::ParseError("棋盤為空".to_string()).into());
    }

    let mut tiles = Vec::new();
    let mut markers: HashMap<String, Vec<Point>> = HashMap::new();

    for (y, line) in lines.iter().enumerate() {
        for (x, cell) in line.split_whitespace().enumerate() {
            let pos = Point {
                x: to_coord(x)?,
                y: to_coord(y)?,
            };
            let (terrain, obstacle) = match cell {
                "_" => continue,
                "#" => (TerrainKind::Plain, true),
                "~" => (TerrainKind::DeepWater, false),
                "." => (TerrainKind::Plain, false),
                marker => {
                    markers.entry(marker.to_string()).or_default().push(pos);
                    (TerrainKind::Plain, false)
                }
            };
            tiles.push(TileDescriptor {
                pos,
                terrain,
                obstacle,
            });
        }
    }

    let level = LevelData {
        name: "ascii".to_string(),
        tiles,
    };
    Ok((level, markers))
}

fn to_coord(value: usize) -> Result<Coord> {
    Coord::try_from(value).map_err(|_| LoadError::ParseError("棋盤尺寸過大".to_string()).into())
}

/// 產生 `width` x `height` 的全平地關卡，原點在 (0, 0)
pub fn open_level(width: Coord, height: Coord) -> LevelData {
    let tiles = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| TileDescriptor {
                pos: Point { x, y },
                terrain: TerrainKind::Plain,
                obstacle: false,
            })
        })
        .collect();
    LevelData {
        name: format!("open-{width}x{height}"),
        tiles,
    }
}
