// 排序算法模块声明文件
// 每个子模块都是一个独立的教学实现

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod tree;
