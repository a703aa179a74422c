//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    UnknownVertex(VertexId),

    #[error("不允许自环: {0}")]
    SelfLoop(VertexId),

    #[error("邻接矩阵格式错误: {0}")]
    MalformedMatrix(String),

    #[error("无效的边权重: {0}")]
    InvalidWeight(f64),

    #[error("导入错误: {0}")]
    Import(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV 错误: {0}")]
    Csv(#[from] csv::Error),
}
