//! 遊戲常數定義

use crate::domain::alias::{Distance, StatValue};
use crate::domain::core_types::Point;

/// 未到達格子的距離（大於任何可到達距離）
pub const INFINITE_DISTANCE: Distance = Distance::MAX;

/// 四方向相鄰偏移（上、下、右、左），搜尋依此順序展開
pub const DIRECTIONS: [Point; 4] = [
    Point { x: 0, y: 1 },
    Point { x: 0, y: -1 },
    Point { x: 1, y: 0 },
    Point { x: -1, y: 0 },
];

/// 燃燒每回合扣除最大 HP 的比例分母
pub const BURN_HP_DIVISOR: StatValue = 15;
