//! 棋盤邏輯：格子索引、邊界與範圍搜尋

use crate::domain::alias::Distance;
use crate::domain::constants::{DIRECTIONS, INFINITE_DISTANCE};
use crate::domain::core_types::{Point, Tile};
use crate::error::{BoardError, Result};
use crate::loader_schema::LevelData;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

/// 棋盤外框（所有已載入格子座標的逐分量最小/最大值）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    fn of(pos: Point) -> Self {
        Self { min: pos, max: pos }
    }

    fn extend(self, pos: Point) -> Self {
        Self {
            min: self.min.min(pos),
            max: self.max.max(pos),
        }
    }

    pub fn contains(&self, pos: Point) -> bool {
        (self.min.x..=self.max.x).contains(&pos.x) && (self.min.y..=self.max.y).contains(&pos.y)
    }
}

/// 棋盤：以座標索引的格子集合
#[derive(Debug, Default, Clone)]
pub struct Board {
    tiles: HashMap<Point, Tile>,
    bounds: Option<Bounds>,
}

impl Board {
    /// 由關卡資料建立棋盤
    pub fn from_level(level: &LevelData) -> Result<Self> {
        let mut board = Self::default();
        board.load(level)?;
        Ok(board)
    }

    /// 載入關卡，完整取代目前的格子
    ///
    /// 位置重複時回傳 `DuplicatePosition`，且原本的棋盤保持不變。
    pub fn load(&mut self, level: &LevelData) -> Result<()> {
        let mut tiles = HashMap::with_capacity(level.tiles.len());
        let mut bounds: Option<Bounds> = None;

        for desc in &level.tiles {
            match tiles.entry(desc.pos) {
                Entry::Occupied(_) => {
                    return Err(BoardError::DuplicatePosition {
                        x: desc.pos.x,
                        y: desc.pos.y,
                    }
                    .into());
                }
                Entry::Vacant(slot) => {
                    slot.insert(Tile::new(desc.pos, desc.terrain, desc.obstacle));
                }
            }
            bounds = Some(match bounds {
                Some(b) => b.extend(desc.pos),
                None => Bounds::of(desc.pos),
            });
        }

        tracing::debug!(level = %level.name, tiles = tiles.len(), ?bounds, "board loaded");
        self.tiles = tiles;
        self.bounds = bounds;
        Ok(())
    }

    /// 查詢格子，不存在時回傳 `None`
    pub fn get_tile(&self, pos: Point) -> Option<&Tile> {
        self.tiles.get(&pos)
    }

    pub fn contains(&self, pos: Point) -> bool {
        self.tiles.contains_key(&pos)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn min(&self) -> Option<Point> {
        self.bounds.map(|b| b.min)
    }

    pub fn max(&self) -> Option<Point> {
        self.bounds.map(|b| b.max)
    }

    /// 從 `start` 做廣度優先的範圍搜尋
    ///
    /// 每條候選邊 `from -> to` 都交給 `admit` 判斷能否通過，
    /// 只有被接受的邊會確定 `to` 的距離；被拒絕的格子之後仍可從同層其他格子再次嘗試。
    ///
    /// 回傳依發現順序排列的格子（距離非遞減），`include_start` 決定是否包含起點。
    ///
    /// # Fail fast 驗證：
    /// - 起點必須在棋盤上
    pub fn search<F>(
        &self,
        start: Point,
        mut admit: F,
        include_start: bool,
    ) -> Result<SearchResult<'_>>
    where
        F: FnMut(SearchEdge<'_>) -> bool,
    {
        let Some(start_tile) = self.get_tile(start) else {
            return Err(BoardError::InvalidSearchStart {
                x: start.x,
                y: start.y,
            }
            .into());
        };

        let mut nodes: HashMap<Point, SearchNode> = HashMap::new();
        nodes.insert(
            start,
            SearchNode {
                distance: 0,
                prev: None,
            },
        );

        let mut found: Vec<&Tile> = Vec::new();
        if include_start {
            found.push(start_tile);
        }

        let mut check_now: VecDeque<&Tile> = VecDeque::from([start_tile]);
        let mut check_next: VecDeque<&Tile> = VecDeque::new();

        while let Some(tile) = check_now.pop_front() {
            let from_distance = nodes[&tile.pos].distance;
            let next_distance = from_distance + 1;

            for dir in DIRECTIONS {
                // 超出座標範圍視同沒有鄰居
                let Some(next) = tile.pos.checked_add(dir).and_then(|pos| self.get_tile(pos))
                else {
                    continue;
                };
                // 已以相同或更短距離到達
                if nodes
                    .get(&next.pos)
                    .is_some_and(|node| node.distance <= next_distance)
                {
                    continue;
                }
                let edge = SearchEdge {
                    from: tile,
                    from_distance,
                    to: next,
                };
                if admit(edge) {
                    nodes.insert(
                        next.pos,
                        SearchNode {
                            distance: next_distance,
                            prev: Some(tile.pos),
                        },
                    );
                    check_next.push_back(next);
                    found.push(next);
                }
            }

            if check_now.is_empty() {
                std::mem::swap(&mut check_now, &mut check_next);
            }
        }

        tracing::trace!(?start, found = found.len(), "search finished");
        Ok(SearchResult {
            start,
            tiles: found,
            nodes,
        })
    }
}

/// 搜尋中的一條候選邊，交給 admit 判斷
#[derive(Debug, Clone, Copy)]
pub struct SearchEdge<'a> {
    pub from: &'a Tile,
    /// `from` 到起點的步數
    pub from_distance: Distance,
    pub to: &'a Tile,
}

impl SearchEdge<'_> {
    /// 通過這條邊後 `to` 的步數
    pub fn next_distance(&self) -> Distance {
        self.from_distance + 1
    }
}

/// 單一格子的搜尋紀錄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub distance: Distance,
    pub prev: Option<Point>,
}

/// 一次搜尋的結果
///
/// 距離與前驅只存在於這份紀錄，不寫回棋盤，因此同一棋盤上的多次搜尋互不干擾。
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    start: Point,
    tiles: Vec<&'a Tile>,
    nodes: HashMap<Point, SearchNode>,
}

impl<'a> SearchResult<'a> {
    pub fn start(&self) -> Point {
        self.start
    }

    /// 依發現順序的格子
    pub fn tiles(&self) -> &[&'a Tile] {
        &self.tiles
    }

    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.tiles.iter().map(|tile| tile.pos)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, pos: Point) -> bool {
        self.tiles.iter().any(|tile| tile.pos == pos)
    }

    /// 到起點的步數，未到達時為 `INFINITE_DISTANCE`
    pub fn distance(&self, pos: Point) -> Distance {
        self.nodes
            .get(&pos)
            .map_or(INFINITE_DISTANCE, |node| node.distance)
    }

    /// 最短路徑樹上的前驅
    pub fn prev(&self, pos: Point) -> Option<Point> {
        self.nodes.get(&pos).and_then(|node| node.prev)
    }

    pub fn is_reached(&self, pos: Point) -> bool {
        self.nodes.contains_key(&pos)
    }

    /// 沿前驅回溯出從起點到 `target` 的路徑（含兩端）
    pub fn path_to(&self, target: Point) -> Option<Vec<Point>> {
        if !self.is_reached(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.prev(current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}
