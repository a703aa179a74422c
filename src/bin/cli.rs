//! undigraph CLI 工具
//!
//! 从邻接矩阵文件或标签列表构建无向图，并输出矩阵、邻居或遍历顺序

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use undigraph::algorithm::{Traversal, TraversalOrder};
use undigraph::cli::{PrintMode, Printer};
use undigraph::graph::Graph;
use undigraph::import::{MatrixFormat, MatrixReader};

#[derive(Parser, Debug)]
#[command(name = "undigraph-cli")]
#[command(about = "无向图命令行工具")]
struct Args {
    /// 邻接矩阵文件（.csv 或 .json）
    #[arg(short, long, conflicts_with = "complete")]
    input: Option<PathBuf>,

    /// 显式指定输入格式
    #[arg(short, long, value_enum)]
    format: Option<MatrixFormat>,

    /// CSV 首行为表头
    #[arg(long)]
    header: bool,

    /// 以给定标签生成完全图
    #[arg(short, long, num_args = 1..)]
    complete: Vec<String>,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 输出邻接矩阵
    Matrix,
    /// 输出每个顶点的邻居
    Neighbours,
    /// 从第 0 个顶点开始遍历
    Traverse {
        /// 遍历顺序
        #[arg(short, long, value_enum, default_value = "bfs")]
        order: TraversalOrder,
    },
    /// 输出顶点数和边数
    Stats,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_graph(args: &Args) -> anyhow::Result<Graph<String>> {
    if let Some(path) = &args.input {
        let mut reader = MatrixReader::new().with_header(args.header);
        if let Some(format) = args.format {
            reader = reader.with_format(format);
        }
        return reader
            .load_graph(path)
            .with_context(|| format!("无法加载 {}", path.display()));
    }

    if args.complete.is_empty() {
        bail!("需要 --input <文件> 或 --complete <标签...>");
    }
    let mut graph = Graph::new();
    graph.complete_graph(args.complete.iter().cloned());
    Ok(graph)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let graph = build_graph(&args)?;
    tracing::debug!(
        vertices = graph.size(),
        edges = graph.edge_size(),
        "图已构建"
    );

    let printer = Printer::new(if args.json {
        PrintMode::Json
    } else {
        PrintMode::Table
    });

    let output = match args.command {
        Command::Matrix => printer.print_matrix(&graph)?,
        Command::Neighbours => printer.print_neighbours(&graph)?,
        Command::Traverse { order } => {
            let visited = Traversal::new(&graph).order(order);
            printer.print_order(&graph, &visited)?
        }
        Command::Stats => printer.print_stats(graph.size(), graph.edge_size())?,
    };

    println!("{}", output);
    Ok(())
}
