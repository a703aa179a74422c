//! 图数据结构
//!
//! 按插入顺序保存顶点的无向图。插入顺序决定邻接矩阵的行列顺序，
//! 也决定遍历时邻居的先后。

use super::edge::{Edge, EdgeId, VertexPair, DEFAULT_WEIGHT};
use super::index::AdjacencyIndex;
use super::matrix::{self, AdjacencyMatrix};
use super::vertex::{Vertex, VertexId};
use super::SharedGraph;
use crate::algorithm::Traversal;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use tracing::{debug, warn};

/// 无向图
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// 顶点（保持插入顺序）
    vertices: IndexMap<VertexId, Vertex<T>>,
    /// 边（按无序点对去重）
    edges: IndexMap<VertexPair, Edge>,
    /// 邻接索引
    adjacency: AdjacencyIndex,
    /// 下一个顶点 ID
    next_vertex_id: u64,
    /// 下一个边 ID
    next_edge_id: u64,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            adjacency: AdjacencyIndex::new(),
            next_vertex_id: 0,
            next_edge_id: 0,
        }
    }

    /// 包装为可共享的图（整图一把读写锁）
    pub fn into_shared(self) -> SharedGraph<T> {
        Arc::new(RwLock::new(self))
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，追加到顶点序列末尾
    ///
    /// 不检查载荷是否重复，相同载荷得到不同的顶点。
    pub fn add_vertex(&mut self, data: T) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.vertices.insert(id, Vertex::new(id, data));
        id
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(&id)
    }

    /// 按插入位置获取顶点
    pub fn vertex_at(&self, index: usize) -> Option<&Vertex<T>> {
        self.vertices.get_index(index).map(|(_, v)| v)
    }

    /// 顶点在插入序列中的位置
    pub fn position(&self, id: VertexId) -> Option<usize> {
        self.vertices.get_index_of(&id)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// 按插入顺序迭代所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.values()
    }

    /// 获取顶点数量
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加权重为 1.0 的边
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> Result<EdgeId> {
        self.add_weighted_edge(v1, v2, DEFAULT_WEIGHT)
    }

    /// 添加边
    ///
    /// 同一点对已有边时不再插入，返回已有边的 ID，保留原权重。
    pub fn add_weighted_edge(&mut self, v1: VertexId, v2: VertexId, weight: f64) -> Result<EdgeId> {
        if weight.is_nan() {
            return Err(Error::InvalidWeight(weight));
        }
        for v in [v1, v2] {
            if !self.contains_vertex(v) {
                warn!(vertex = %v, "拒绝添加边: 顶点不存在");
                return Err(Error::UnknownVertex(v));
            }
        }
        if v1 == v2 {
            warn!(vertex = %v1, "拒绝添加边: 自环");
            return Err(Error::SelfLoop(v1));
        }

        Ok(self.insert_edge(VertexPair::new(v1, v2), weight))
    }

    /// 插入边，端点已由调用方保证合法
    fn insert_edge(&mut self, pair: VertexPair, weight: f64) -> EdgeId {
        if let Some(existing) = self.edges.get(&pair) {
            debug!(edge = %existing, "边已存在, 忽略");
            return existing.id();
        }

        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        let (a, b) = pair.endpoints();
        self.edges.insert(pair, Edge::new(id, a, b, weight));
        self.adjacency.add_edge(pair);
        id
    }

    /// 两点之间是否有边
    pub fn is_edge(&self, v1: VertexId, v2: VertexId) -> bool {
        self.edges.contains_key(&VertexPair::new(v1, v2))
    }

    /// 获取两点之间的边
    pub fn edge(&self, v1: VertexId, v2: VertexId) -> Option<&Edge> {
        self.edges.get(&VertexPair::new(v1, v2))
    }

    /// 迭代所有边（按插入顺序）
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// 获取边数量
    pub fn edge_size(&self) -> usize {
        self.edges.len()
    }

    // ==================== 构造 ====================

    /// 添加一个顶点，并把之前所有顶点连到它上面
    pub fn cone(&mut self, data: T) -> VertexId {
        let apex = self.add_vertex(data);
        let base: Vec<VertexId> = self
            .vertices
            .keys()
            .copied()
            .filter(|&id| id != apex)
            .collect();

        for &v in &base {
            self.insert_edge(VertexPair::new(v, apex), DEFAULT_WEIGHT);
        }

        debug!(apex = %apex, base = base.len(), "cone");
        apex
    }

    /// 在给定载荷上生成完全图
    ///
    /// 第一个载荷单独加入，其余依次做 `cone`。图非空时，这些 cone 也会连到
    /// 原有顶点。载荷为空时什么都不做。
    pub fn complete_graph<I>(&mut self, payloads: I) -> Vec<VertexId>
    where
        I: IntoIterator<Item = T>,
    {
        let mut payloads = payloads.into_iter();
        let Some(first) = payloads.next() else {
            return Vec::new();
        };

        let mut ids = vec![self.add_vertex(first)];
        for data in payloads {
            ids.push(self.cone(data));
        }
        ids
    }

    /// 清空所有顶点和边（ID 计数器不回退）
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.adjacency.clear();
    }

    // ==================== 查询 ====================

    /// 导出邻接矩阵，行列按顶点插入顺序
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let ids: Vec<VertexId> = self.vertices.keys().copied().collect();
        ids.iter()
            .map(|&x| ids.iter().map(|&y| i64::from(self.is_edge(x, y))).collect())
            .collect()
    }

    /// 顶点的邻居，按插入顺序排列
    pub fn neighbours(&self, id: VertexId) -> Vec<VertexId> {
        let mut list = self.adjacency.neighbors(id).to_vec();
        list.sort_by_key(|v| self.vertices.get_index_of(v));
        list
    }

    /// 顶点的度
    pub fn degree(&self, id: VertexId) -> usize {
        self.adjacency.degree(id)
    }

    /// 每个顶点到其有序邻居列表的映射
    pub fn neighbours_dict(&self) -> IndexMap<VertexId, Vec<VertexId>> {
        self.vertices
            .keys()
            .map(|&id| (id, self.neighbours(id)))
            .collect()
    }

    /// 与 [`Graph::neighbours_dict`] 相同，但键和值都换成载荷
    ///
    /// 载荷重复时合并到同一个键：键保持首次出现的位置，值取最后一个顶点的邻居。
    pub fn neighbours_dict_data(&self) -> IndexMap<T, Vec<T>>
    where
        T: Clone + Eq + Hash,
    {
        self.neighbours_dict()
            .into_iter()
            .map(|(id, list)| {
                let data = |v: VertexId| self.vertices[&v].data().clone();
                (data(id), list.into_iter().map(data).collect())
            })
            .collect()
    }

    // ==================== 遍历 ====================

    /// 从第 0 个顶点开始广度优先遍历
    pub fn breadth_first_traversal<F>(&self, visit: F)
    where
        F: FnMut(&Vertex<T>),
    {
        Traversal::new(self).breadth_first(visit);
    }

    /// 从第 0 个顶点开始深度优先遍历（先序）
    pub fn depth_first_traversal<F>(&self, visit: F)
    where
        F: FnMut(&Vertex<T>),
    {
        Traversal::new(self).depth_first(visit);
    }
}

impl<T> Graph<T>
where
    T: From<String>,
{
    /// 从邻接矩阵构建图
    pub fn with_adjacency_matrix<R: AsRef<[i64]>>(matrix: &[R]) -> Result<Self> {
        let mut graph = Self::new();
        graph.from_adjacency_matrix(matrix)?;
        Ok(graph)
    }

    /// 用邻接矩阵重建图
    ///
    /// 顶点命名为 `v0`..`v(n-1)`，只读上三角。矩阵不是方阵时返回错误，
    /// 图保持原样。
    pub fn from_adjacency_matrix<R: AsRef<[i64]>>(&mut self, matrix: &[R]) -> Result<()> {
        if let Err(e) = matrix::validate_square(matrix) {
            warn!(error = %e, "拒绝导入邻接矩阵");
            return Err(e);
        }

        self.clear();
        let ids: Vec<VertexId> = (0..matrix.len())
            .map(|i| self.add_vertex(T::from(format!("v{}", i))))
            .collect();
        for (i, j) in matrix::upper_triangle(matrix) {
            self.insert_edge(VertexPair::new(ids[i], ids[j]), DEFAULT_WEIGHT);
        }

        debug!(
            vertices = self.size(),
            edges = self.edge_size(),
            "从邻接矩阵重建图"
        );
        Ok(())
    }
}

impl<T: fmt::Display> Graph<T> {
    /// 用载荷渲染一条边
    pub fn describe_edge(&self, edge: &Edge) -> String {
        match edge.vertices() {
            Some(pair) => {
                let (a, b) = pair.endpoints();
                match (self.vertex(a), self.vertex(b)) {
                    (Some(a), Some(b)) => format!("{} - {}", a, b),
                    _ => edge.to_string(),
                }
            }
            None => edge.to_string(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges: Vec<String> = self.edges().map(|e| self.describe_edge(e)).collect();
        let vertices: Vec<String> = self.vertices().map(|v| v.to_string()).collect();
        write!(f, "{{{}}} [{}]", edges.join(", "), vertices.join(", "))
    }
}
