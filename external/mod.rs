// 外部排序模拟模块声明文件
// 用内存中的 Vec 模拟磁带/设备上的"段"（run）

pub mod multiway;
pub mod natural;
pub mod polyphase;
pub mod runs;
pub mod straight;

mod utils;

// 重新导出常用的类型
pub use runs::{distribute, Distribution};

/// 一个已排序的段
pub type Run<T> = Vec<T>;

/// 一台输出设备（磁带/文件）上的所有段
pub type Device<T> = Vec<Run<T>>;
