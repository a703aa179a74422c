//! 结果打印器
//!
//! 提供表格和 JSON 格式的结果输出

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use prettytable::{format, row, Cell, Row, Table};
use serde_json::json;
use std::fmt::Display;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// JSON 模式
    Json,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印邻接矩阵，行列表头为顶点载荷
    pub fn print_matrix<T: Display>(&self, graph: &Graph<T>) -> Result<String> {
        let labels = Self::labels(graph);
        let matrix = graph.adjacency_matrix();

        match self.mode {
            PrintMode::Json => Ok(serde_json::to_string_pretty(&json!({
                "vertices": labels,
                "matrix": matrix,
            }))?),
            PrintMode::Table => {
                let mut table = Self::new_table();

                let mut header = vec![Cell::new("")];
                header.extend(labels.iter().map(|l| Cell::new(l)));
                table.set_titles(Row::new(header));

                for (label, row_data) in labels.iter().zip(&matrix) {
                    let mut cells = vec![Cell::new(label)];
                    cells.extend(row_data.iter().map(|v| Cell::new(&v.to_string())));
                    table.add_row(Row::new(cells));
                }

                Ok(table.to_string())
            }
        }
    }

    /// 打印每个顶点及其有序邻居
    pub fn print_neighbours<T: Display>(&self, graph: &Graph<T>) -> Result<String> {
        let rows: Vec<(String, Vec<String>)> = graph
            .neighbours_dict()
            .into_iter()
            .map(|(id, list)| (Self::label(graph, id), Self::render_ids(graph, &list)))
            .collect();

        match self.mode {
            PrintMode::Json => {
                let entries: Vec<_> = rows
                    .iter()
                    .map(|(vertex, neighbours)| json!({ "vertex": vertex, "neighbours": neighbours }))
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            PrintMode::Table => {
                let mut table = Self::new_table();
                table.set_titles(row!["Vertex", "Neighbours"]);
                for (vertex, neighbours) in &rows {
                    table.add_row(row![vertex, neighbours.join(", ")]);
                }
                Ok(table.to_string())
            }
        }
    }

    /// 打印遍历顺序
    pub fn print_order<T: Display>(&self, graph: &Graph<T>, order: &[VertexId]) -> Result<String> {
        let labels = Self::render_ids(graph, order);

        match self.mode {
            PrintMode::Json => Ok(serde_json::to_string_pretty(&labels)?),
            PrintMode::Table => {
                let mut table = Self::new_table();
                table.set_titles(row!["#", "Vertex"]);
                for (i, label) in labels.iter().enumerate() {
                    table.add_row(row![i, label]);
                }
                Ok(table.to_string())
            }
        }
    }

    /// 打印统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize) -> Result<String> {
        match self.mode {
            PrintMode::Json => Ok(serde_json::to_string_pretty(&json!({
                "vertices": vertex_count,
                "edges": edge_count,
            }))?),
            PrintMode::Table => {
                let mut table = Self::new_table();
                table.set_titles(row!["Property", "Value"]);
                table.add_row(row!["Vertex Count", vertex_count.to_string()]);
                table.add_row(row!["Edge Count", edge_count.to_string()]);
                Ok(table.to_string())
            }
        }
    }

    fn new_table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table
    }

    fn labels<T: Display>(graph: &Graph<T>) -> Vec<String> {
        graph.vertices().map(|v| v.to_string()).collect()
    }

    fn label<T: Display>(graph: &Graph<T>, id: VertexId) -> String {
        graph
            .vertex(id)
            .map(|v| v.to_string())
            .unwrap_or_else(|| id.to_string())
    }

    fn render_ids<T: Display>(graph: &Graph<T>, ids: &[VertexId]) -> Vec<String> {
        ids.iter().map(|&id| Self::label(graph, id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{Traversal, TraversalOrder};

    fn sample_graph() -> Graph<&'static str> {
        let mut graph = Graph::new();
        let v0 = graph.add_vertex("v0");
        graph.add_vertex("v1");
        graph.cone("v2");
        let v3 = graph.add_vertex("v3");
        graph.add_edge(v0, v3).unwrap();
        graph
    }

    #[test]
    fn test_matrix_json() {
        let out = Printer::new(PrintMode::Json).print_matrix(&sample_graph()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["vertices"], json!(["v0", "v1", "v2", "v3"]));
        assert_eq!(value["matrix"][0], json!([0, 0, 1, 1]));
    }

    #[test]
    fn test_matrix_table_contains_labels() {
        let out = Printer::default().print_matrix(&sample_graph()).unwrap();

        for label in ["v0", "v1", "v2", "v3"] {
            assert!(out.contains(label));
        }
    }

    #[test]
    fn test_neighbours_json_keeps_order() {
        let out = Printer::new(PrintMode::Json)
            .print_neighbours(&sample_graph())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0], json!({ "vertex": "v0", "neighbours": ["v2", "v3"] }));
        assert_eq!(value[2], json!({ "vertex": "v2", "neighbours": ["v0", "v1"] }));
    }

    #[test]
    fn test_order_and_stats() {
        let graph = sample_graph();
        let order = Traversal::new(&graph).order(TraversalOrder::BreadthFirst);

        let mut printer = Printer::default();
        printer.set_mode(PrintMode::Json);
        let out = printer.print_order(&graph, &order).unwrap();
        assert_eq!(
            serde_json::from_str::<Vec<String>>(&out).unwrap(),
            vec!["v0", "v2", "v3", "v1"]
        );

        let stats = printer.print_stats(graph.size(), graph.edge_size()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&stats).unwrap();
        assert_eq!(value["edges"], json!(3));

        printer.set_mode(PrintMode::Table);
        assert!(printer.print_stats(4, 3).unwrap().contains("Edge Count"));
    }
}
