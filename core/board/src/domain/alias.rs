//! 型別別名

/// 棋盤座標分量（允許負值，關卡可不從原點開始）
pub type Coord = i32;

/// 搜尋距離（步數）
pub type Distance = u32;

/// 屬性數值
pub type StatValue = i32;

/// 關卡名稱
pub type LevelName = String;
