//! 移動與攻擊範圍規則
//!
//! 搜尋演算法本身與規則無關，這裡提供常用的 admit 條件。

use crate::domain::alias::Distance;
use crate::domain::core_types::Point;
use crate::error::Result;
use crate::logic::board::{Board, SearchEdge};

/// 步行範圍
///
/// # 通行規則：
/// - 障礙物不可進入
/// - 不可步行的地形（深水）不可進入
/// - 被佔據的格子不可進入也不可穿越
/// - 總步數不超過 `budget`
pub fn walk_range<O>(budget: Distance, is_occupied: O) -> impl FnMut(SearchEdge<'_>) -> bool
where
    O: Fn(Point) -> bool,
{
    move |edge: SearchEdge<'_>| {
        edge.next_distance() <= budget
            && !edge.to.obstacle
            && edge.to.terrain.is_walkable()
            && !is_occupied(edge.to.pos)
    }
}

/// 飛行範圍：忽略地形與障礙，只限制步數
pub fn fly_range(budget: Distance) -> impl FnMut(SearchEdge<'_>) -> bool {
    move |edge: SearchEdge<'_>| edge.next_distance() <= budget
}

/// 攻擊範圍內的格子
///
/// 攻擊可越過障礙與單位，只看步數；回傳距離落在 `min_range..=max_range` 的格子，
/// 依搜尋發現順序排列。`min_range` 為 0 時包含原點。
pub fn attack_targets(
    board: &Board,
    origin: Point,
    min_range: Distance,
    max_range: Distance,
) -> Result<Vec<Point>> {
    let result = board.search(origin, fly_range(max_range), min_range == 0)?;
    Ok(result
        .positions()
        .filter(|&pos| result.distance(pos) >= min_range)
        .collect())
}
