//! 数据导入模块
//!
//! 支持从 CSV、JSON 文件读取邻接矩阵

use crate::error::{Error, Result};
use crate::graph::{matrix, AdjacencyMatrix, Graph};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// 矩阵文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatrixFormat {
    /// 每行一条记录，逗号分隔的整数
    Csv,
    /// 整数数组的数组
    Json,
}

impl MatrixFormat {
    /// 根据扩展名推断格式
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// 邻接矩阵读取器
#[derive(Debug, Clone, Default)]
pub struct MatrixReader {
    /// 显式格式；为空时按扩展名推断
    format: Option<MatrixFormat>,
    /// CSV 是否带表头
    has_header: bool,
}

impl MatrixReader {
    /// 创建读取器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置格式
    pub fn with_format(mut self, format: MatrixFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// 设置 CSV 是否带表头
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// 从文件读取
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<AdjacencyMatrix> {
        let path = path.as_ref();
        let format = self
            .format
            .or_else(|| MatrixFormat::from_path(path))
            .ok_or_else(|| Error::Import(format!("无法识别的文件格式: {}", path.display())))?;

        let reader = BufReader::new(File::open(path)?);
        let matrix = match format {
            MatrixFormat::Csv => self.read_csv(reader)?,
            MatrixFormat::Json => self.read_json(reader)?,
        };

        debug!(path = %path.display(), ?format, rows = matrix.len(), "读取邻接矩阵");
        Ok(matrix)
    }

    /// 读取 CSV
    pub fn read_csv<R: Read>(&self, reader: R) -> Result<AdjacencyMatrix> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(self.has_header)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut matrix = Vec::new();
        for (i, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = record
                .iter()
                .enumerate()
                .map(|(j, field)| {
                    field.parse::<i64>().map_err(|e| {
                        Error::Import(format!("第 {} 行第 {} 列 '{}': {}", i, j, field, e))
                    })
                })
                .collect::<Result<Vec<i64>>>()?;
            matrix.push(row);
        }
        Ok(matrix)
    }

    /// 读取 JSON
    pub fn read_json<R: Read>(&self, reader: R) -> Result<AdjacencyMatrix> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// 读取文件并构建图
    pub fn load_graph<P, T>(&self, path: P) -> Result<Graph<T>>
    where
        P: AsRef<Path>,
        T: From<String>,
    {
        let matrix = self.read_path(path)?;
        let graph = Graph::with_adjacency_matrix(&matrix)?;
        if !matrix::is_symmetric(&matrix) {
            warn!("邻接矩阵不对称, 只使用上三角");
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(MatrixFormat::from_path("a/b.CSV"), Some(MatrixFormat::Csv));
        assert_eq!(MatrixFormat::from_path("m.json"), Some(MatrixFormat::Json));
        assert_eq!(MatrixFormat::from_path("m.txt"), None);
        assert_eq!(MatrixFormat::from_path("matrix"), None);
    }

    #[test]
    fn test_read_csv() {
        let data = "0, 1, 1\n1,0,0\n1,0,0\n";
        let matrix = MatrixReader::new().read_csv(data.as_bytes()).unwrap();

        assert_eq!(matrix, vec![vec![0, 1, 1], vec![1, 0, 0], vec![1, 0, 0]]);
    }

    #[test]
    fn test_read_csv_with_header() {
        let data = "a,b\n0,1\n1,0\n";
        let matrix = MatrixReader::new()
            .with_header(true)
            .read_csv(data.as_bytes())
            .unwrap();

        assert_eq!(matrix, vec![vec![0, 1], vec![1, 0]]);
    }

    #[test]
    fn test_read_csv_bad_cell() {
        let err = MatrixReader::new().read_csv("0,x\n1,0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Import(_)));
    }

    #[test]
    fn test_read_json() {
        let matrix = MatrixReader::new()
            .read_json("[[0, 2], [2, 0]]".as_bytes())
            .unwrap();
        assert_eq!(matrix, vec![vec![0, 2], vec![2, 0]]);

        let err = MatrixReader::new().read_json("[[0, 1], ".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_load_graph_from_files() {
        let csv = temp_file(
            ".csv",
            "0,1,1,0,0\n1,0,1,0,0\n1,1,0,1,1\n0,0,1,0,0\n0,0,1,0,0\n",
        );
        let graph: Graph<String> = MatrixReader::new().load_graph(csv.path()).unwrap();
        assert_eq!(graph.size(), 5);
        assert_eq!(graph.edge_size(), 5);

        let json = temp_file(".json", "[[0,1,0],[1,0,1],[0,1,0]]");
        let graph: Graph<String> = MatrixReader::new().load_graph(json.path()).unwrap();
        assert_eq!(graph.adjacency_matrix(), vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
    }

    #[test]
    fn test_load_graph_ragged_csv() {
        let csv = temp_file(".csv", "0,1\n1\n");
        let result: Result<Graph<String>> = MatrixReader::new().load_graph(csv.path());
        assert!(matches!(result, Err(Error::MalformedMatrix(_))));
    }

    #[test]
    fn test_unknown_extension_needs_explicit_format() {
        let file = temp_file(".txt", "[[0]]");

        assert!(matches!(
            MatrixReader::new().read_path(file.path()),
            Err(Error::Import(_))
        ));
        let matrix = MatrixReader::new()
            .with_format(MatrixFormat::Json)
            .read_path(file.path())
            .unwrap();
        assert_eq!(matrix, vec![vec![0]]);
    }

    #[test]
    fn test_missing_file() {
        let result = MatrixReader::new().read_path("/nonexistent/undigraph/m.csv");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
