//! 棋盤載入與查詢測試

use board::domain::core_types::{Point, TerrainKind};
use board::error::{BoardError, ErrorKind};
use board::loader_schema::{LevelData, TileDescriptor};
use board::logic::board::Board;
use board::test_helpers::{load_from_ascii, open_level};

fn desc(x: i32, y: i32) -> TileDescriptor {
    TileDescriptor {
        pos: Point::new(x, y),
        terrain: TerrainKind::Plain,
        obstacle: false,
    }
}

#[test]
fn test_load_3x3() {
    let board = Board::from_level(&open_level(3, 3)).unwrap();

    assert_eq!(board.len(), 9);
    assert_eq!(board.min(), Some(Point::new(0, 0)));
    assert_eq!(board.max(), Some(Point::new(2, 2)));

    // 每個格子都以自己的座標為 key
    for tile in board.tiles() {
        assert_eq!(board.get_tile(tile.pos), Some(tile));
    }

    // 邊界外不存在
    assert!(board.get_tile(Point::new(3, 0)).is_none());
    assert!(board.get_tile(Point::new(0, -1)).is_none());
}

#[test]
fn test_load_bounds() {
    // (說明, 座標, 預期 min, 預期 max)
    let test_data = [
        ("單一格子", vec![(4, -2)], (4, -2), (4, -2)),
        ("負座標", vec![(-3, 1), (2, -5), (0, 0)], (-3, -5), (2, 1)),
        ("不連續", vec![(10, 10), (-10, 3), (7, -1)], (-10, -1), (10, 10)),
    ];

    for (name, positions, min, max) in test_data {
        let level = LevelData {
            name: name.to_string(),
            tiles: positions.iter().map(|&(x, y)| desc(x, y)).collect(),
        };
        let board = Board::from_level(&level).unwrap();
        assert_eq!(board.min(), Some(Point::new(min.0, min.1)), "{name}");
        assert_eq!(board.max(), Some(Point::new(max.0, max.1)), "{name}");
        assert_eq!(board.len(), positions.len(), "{name}");
    }
}

#[test]
fn test_bounds_contains() {
    let level = LevelData {
        name: "sparse".to_string(),
        tiles: vec![desc(-2, 1), desc(3, -4)],
    };
    let board = Board::from_level(&level).unwrap();
    let bounds = board.bounds().unwrap();

    // (座標, 是否在外框內)
    let test_data = [
        ((-2, 1), true),
        ((3, -4), true),
        ((0, 0), true),
        ((-2, -4), true),
        ((-3, 0), false),
        ((4, 0), false),
        ((0, 2), false),
        ((0, -5), false),
    ];
    for ((x, y), expected) in test_data {
        let pos = Point::new(x, y);
        assert_eq!(bounds.contains(pos), expected, "{pos:?}");
    }
    // 外框內不一定有格子
    assert!(!board.contains(Point::new(0, 0)));
}

#[test]
fn test_load_empty() {
    let board = Board::from_level(&LevelData::default()).unwrap();
    assert!(board.is_empty());
    assert_eq!(board.min(), None);
    assert_eq!(board.max(), None);
}

#[test]
fn test_load_keeps_terrain_and_obstacle() {
    let ascii = r#"
. # .
~ _ .
    "#;
    let (level, _) = load_from_ascii(ascii).unwrap();
    let board = Board::from_level(&level).unwrap();

    assert_eq!(board.len(), 5);
    let wall = board.get_tile(Point::new(1, 0)).unwrap();
    assert!(wall.obstacle);
    let water = board.get_tile(Point::new(0, 1)).unwrap();
    assert_eq!(water.terrain, TerrainKind::DeepWater);
    assert!(!water.obstacle);
    assert!(board.get_tile(Point::new(1, 1)).is_none());
}

#[test]
fn test_load_duplicate_position() {
    let level = LevelData {
        name: "dup".to_string(),
        tiles: vec![desc(0, 0), desc(1, 0), desc(0, 0)],
    };
    let err = Board::from_level(&level).unwrap_err();
    assert!(
        matches!(
            err.kind(),
            ErrorKind::Board(BoardError::DuplicatePosition { x: 0, y: 0 })
        ),
        "{err}"
    );
}

#[test]
fn test_reload_replaces_and_failed_load_keeps_state() {
    let mut board = Board::from_level(&open_level(2, 2)).unwrap();

    board.load(&open_level(4, 1)).unwrap();
    assert_eq!(board.len(), 4);
    assert_eq!(board.max(), Some(Point::new(3, 0)));
    assert!(board.get_tile(Point::new(0, 1)).is_none());

    // 失敗的載入不改動現有棋盤
    let bad = LevelData {
        name: "bad".to_string(),
        tiles: vec![desc(9, 9), desc(9, 9)],
    };
    assert!(board.load(&bad).is_err());
    assert_eq!(board.len(), 4);
    assert_eq!(board.max(), Some(Point::new(3, 0)));
    assert!(board.get_tile(Point::new(9, 9)).is_none());
}
