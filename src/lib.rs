//! undigraph - 内存无向图
//!
//! 按插入顺序保存顶点的无向加权图，支持：
//! - 逐个加边、cone 扩展、完全图生成
//! - 邻接矩阵导入导出、邻居查询
//! - 广度优先与深度优先遍历（访问者回调）

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{Traversal, TraversalOrder};
pub use error::{Error, Result};
pub use graph::{AdjacencyMatrix, Edge, EdgeId, Graph, SharedGraph, Vertex, VertexId};
pub use import::{MatrixFormat, MatrixReader};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
