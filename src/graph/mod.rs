//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构

mod edge;
mod graph;
mod index;
pub mod matrix;
mod vertex;

pub use edge::{Edge, EdgeId, VertexPair, DEFAULT_WEIGHT};
pub use graph::Graph;
pub use index::{AdjacencyIndex, NeighborList};
pub use matrix::AdjacencyMatrix;
pub use vertex::{Vertex, VertexId};

use parking_lot::RwLock;
use std::sync::Arc;

/// 整图加一把读写锁，供需要跨线程共享的调用方使用
pub type SharedGraph<T> = Arc<RwLock<Graph<T>>>;
