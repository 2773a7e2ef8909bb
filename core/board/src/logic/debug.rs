//! 調試相關的工具函數

use std::any::type_name;

/// 取得型別的短名稱（移除模組路徑），用於錯誤訊息
///
/// 泛型參數保留原樣，例如 `Option<bevy_ecs::entity::Entity>` 會得到 `Option<bevy_ecs::entity::Entity>`。
pub fn short_type_name<T: ?Sized>() -> String {
    let full_name = type_name::<T>();
    let (path, generics) = match full_name.find('<') {
        Some(idx) => full_name.split_at(idx),
        None => (full_name, ""),
    };
    let short = path.rsplit("::").next().unwrap_or(path);
    format!("{short}{generics}")
}
