//! 图遍历算法
//!
//! 广度优先与深度优先遍历。邻居按顶点插入顺序展开，结果完全确定。

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use tracing::trace;

/// 遍历顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum TraversalOrder {
    /// 广度优先
    #[value(name = "bfs")]
    #[serde(rename = "bfs")]
    BreadthFirst,
    /// 深度优先（先序）
    #[value(name = "dfs")]
    #[serde(rename = "dfs")]
    DepthFirst,
}

/// 遍历器
pub struct Traversal<'g, T> {
    graph: &'g Graph<T>,
    /// 起点；默认为插入序列的第 0 个顶点
    start: Option<VertexId>,
}

impl<'g, T> Traversal<'g, T> {
    /// 从第 0 个顶点开始的遍历器（空图时没有起点）
    pub fn new(graph: &'g Graph<T>) -> Self {
        Self {
            graph,
            start: graph.vertex_at(0).map(|v| v.id()),
        }
    }

    /// 指定起点
    pub fn starting_at(graph: &'g Graph<T>, start: VertexId) -> Result<Self> {
        if !graph.contains_vertex(start) {
            return Err(Error::UnknownVertex(start));
        }
        Ok(Self {
            graph,
            start: Some(start),
        })
    }

    /// 按指定顺序遍历
    pub fn run<F>(&self, order: TraversalOrder, visit: F)
    where
        F: FnMut(&'g Vertex<T>),
    {
        match order {
            TraversalOrder::BreadthFirst => self.breadth_first(visit),
            TraversalOrder::DepthFirst => self.depth_first(visit),
        }
    }

    /// 收集访问顺序
    pub fn order(&self, order: TraversalOrder) -> Vec<VertexId> {
        let mut visited = Vec::with_capacity(self.graph.size());
        self.run(order, |v| visited.push(v.id()));
        visited
    }

    /// 广度优先遍历
    ///
    /// 起点立即访问；出队顶点的邻居按插入顺序检查，未访问的立即访问并入队。
    pub fn breadth_first<F>(&self, mut visit: F)
    where
        F: FnMut(&'g Vertex<T>),
    {
        let Some(start) = self.start else {
            return;
        };

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        self.visit(start, &mut visit);
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.graph.neighbours(current) {
                if visited.insert(neighbor) {
                    self.visit(neighbor, &mut visit);
                    queue.push_back(neighbor);
                }
            }
        }
    }

    /// 深度优先遍历（先序）
    ///
    /// 显式栈模拟递归：每一帧保存顶点的有序邻居和游标，
    /// 访问顺序与递归写法一致，深度不受调用栈限制。
    pub fn depth_first<F>(&self, mut visit: F)
    where
        F: FnMut(&'g Vertex<T>),
    {
        let Some(start) = self.start else {
            return;
        };

        let mut visited = HashSet::new();
        let mut stack: Vec<(Vec<VertexId>, usize)> = Vec::new();

        self.visit(start, &mut visit);
        visited.insert(start);
        stack.push((self.graph.neighbours(start), 0));

        while let Some((neighbors, cursor)) = stack.last_mut() {
            let next = neighbors[*cursor..]
                .iter()
                .position(|v| !visited.contains(v))
                .map(|offset| *cursor + offset);

            match next {
                Some(idx) => {
                    let child = neighbors[idx];
                    *cursor = idx + 1;
                    self.visit(child, &mut visit);
                    visited.insert(child);
                    stack.push((self.graph.neighbours(child), 0));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    fn visit<F>(&self, id: VertexId, visit: &mut F)
    where
        F: FnMut(&'g Vertex<T>),
    {
        if let Some(vertex) = self.graph.vertex(id) {
            trace!(vertex = %id, "visit");
            visit(vertex);
        }
    }
}
