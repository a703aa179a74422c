//! 边定义
//!
//! 无向边：两个顶点组成的无序点对加一个权重

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 默认边权重
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// 边 ID（全局唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 无序点对
///
/// 内部按 ID 升序存放，`{a, b}` 与 `{b, a}` 相等且哈希一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexPair {
    low: VertexId,
    high: VertexId,
}

impl VertexPair {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// 两个端点（ID 较小者在前）
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.low, self.high)
    }
}

/// 边
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 端点；任一端缺失时为空
    vertices: Option<VertexPair>,
    /// 权重
    weight: f64,
}

impl Edge {
    /// 创建新边
    pub fn new(id: EdgeId, v1: VertexId, v2: VertexId, weight: f64) -> Self {
        Self::from_endpoints(id, Some(v1), Some(v2), weight)
    }

    /// 从可能缺失的端点创建边
    ///
    /// 任一端点为 `None` 时得到一条没有点对的退化边。`Graph` 从不产生
    /// 这种边，它只能通过直接构造得到。
    pub fn from_endpoints(
        id: EdgeId,
        v1: Option<VertexId>,
        v2: Option<VertexId>,
        weight: f64,
    ) -> Self {
        let vertices = match (v1, v2) {
            (Some(a), Some(b)) => Some(VertexPair::new(a, b)),
            _ => None,
        };
        Self {
            id,
            vertices,
            weight,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取点对
    pub fn vertices(&self) -> Option<VertexPair> {
        self.vertices
    }

    /// 是否为退化边
    pub fn is_degenerate(&self) -> bool {
        self.vertices.is_none()
    }

    /// 是否连接 `a` 与 `b`（不区分方向）
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        self.vertices == Some(VertexPair::new(a, b))
    }

    /// 获取边的权重
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.vertices {
            Some(pair) => {
                let (a, b) = pair.endpoints();
                write!(f, "{} - {}", a, b)
            }
            None => write!(f, "(empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_pair_unordered() {
        let a = VertexId::new(3);
        let b = VertexId::new(1);

        assert_eq!(VertexPair::new(a, b), VertexPair::new(b, a));
        assert_eq!(VertexPair::new(a, b).endpoints(), (b, a));
    }

    #[test]
    fn test_edge_basic() {
        let e = Edge::new(EdgeId::new(1), VertexId::new(200), VertexId::new(100), 2.5);

        assert_eq!(e.id().as_u64(), 1);
        assert!(e.connects(VertexId::new(100), VertexId::new(200)));
        assert!(e.connects(VertexId::new(200), VertexId::new(100)));
        assert!(!e.connects(VertexId::new(100), VertexId::new(300)));
        assert_eq!(e.weight(), 2.5);
        assert_eq!(e.to_string(), "#100 - #200");
    }

    #[test]
    fn test_edge_degenerate() {
        let e = Edge::from_endpoints(EdgeId::new(1), Some(VertexId::new(1)), None, DEFAULT_WEIGHT);

        assert!(e.is_degenerate());
        assert_eq!(e.vertices(), None);
        assert!(!e.connects(VertexId::new(1), VertexId::new(1)));
        assert_eq!(e.to_string(), "(empty)");
    }
}
