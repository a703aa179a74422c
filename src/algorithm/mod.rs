//! 图算法模块
//!
//! 包含广度优先和深度优先遍历

mod traversal;

pub use traversal::{Traversal, TraversalOrder};
