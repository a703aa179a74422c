//! 图索引
//!
//! 顶点到邻居的内存索引，加边时增量维护

use crate::graph::edge::VertexPair;
use crate::graph::vertex::VertexId;
use smallvec::SmallVec;
use std::collections::HashMap;

/// 单个顶点的邻居列表（按加边顺序）
pub type NeighborList = SmallVec<[VertexId; 8]>;

/// 邻接索引
#[derive(Debug, Default, Clone)]
pub struct AdjacencyIndex {
    /// 顶点 ID 到邻居列表的映射
    neighbors: HashMap<VertexId, NeighborList>,
}

impl AdjacencyIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            neighbors: HashMap::new(),
        }
    }

    /// 添加边（两个方向都登记）
    pub fn add_edge(&mut self, pair: VertexPair) {
        let (a, b) = pair.endpoints();
        self.neighbors.entry(a).or_default().push(b);
        self.neighbors.entry(b).or_default().push(a);
    }

    /// 获取邻居（未排序）
    pub fn neighbors(&self, vertex_id: VertexId) -> &[VertexId] {
        self.neighbors
            .get(&vertex_id)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// 获取顶点的度
    pub fn degree(&self, vertex_id: VertexId) -> usize {
        self.neighbors.get(&vertex_id).map(|v| v.len()).unwrap_or(0)
    }

    /// 清空索引
    pub fn clear(&mut self) {
        self.neighbors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_index() {
        let mut index = AdjacencyIndex::new();
        let a = VertexId::new(1);
        let b = VertexId::new(2);
        let c = VertexId::new(3);

        index.add_edge(VertexPair::new(b, a));
        index.add_edge(VertexPair::new(a, c));

        assert_eq!(index.neighbors(a), &[b, c]);
        assert_eq!(index.neighbors(b), &[a]);
        assert_eq!(index.degree(a), 2);
        assert_eq!(index.degree(VertexId::new(9)), 0);
        assert!(index.neighbors(VertexId::new(9)).is_empty());

        index.clear();
        assert_eq!(index.degree(a), 0);
    }
}
