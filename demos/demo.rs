//! undigraph 演示脚本
//!
//! 构建几张小图并输出矩阵、邻居和遍历顺序

use undigraph::cli::Printer;
use undigraph::graph::Graph;

fn labels(graph: &Graph<String>, bfs: bool) -> Vec<String> {
    let mut out = Vec::new();
    if bfs {
        graph.breadth_first_traversal(|v| out.push(v.data().clone()));
    } else {
        graph.depth_first_traversal(|v| out.push(v.data().clone()));
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("undigraph 演示");
    println!("==============\n");

    let printer = Printer::default();

    // v0, v1, cone(v2), v3 + (v0, v3)
    println!("1. 逐个构建...");
    let mut graph = Graph::new();
    let v0 = graph.add_vertex("v0".to_string());
    graph.add_vertex("v1".to_string());
    graph.cone("v2".to_string());
    let v3 = graph.add_vertex("v3".to_string());
    graph.add_edge(v0, v3)?;

    println!("   {}", graph);
    println!("{}", printer.print_matrix(&graph)?);
    println!("{}", printer.print_neighbours(&graph)?);
    println!("   BFS: {:?}", labels(&graph, true));
    println!("   DFS: {:?}\n", labels(&graph, false));

    println!("2. 完全图...");
    let mut complete = Graph::new();
    complete.complete_graph(["x0", "x1", "x2", "x3"].map(String::from));
    println!("{}", printer.print_stats(complete.size(), complete.edge_size())?);
    println!("{}", printer.print_matrix(&complete)?);

    println!("3. 从邻接矩阵导入...");
    let imported: Graph<String> = Graph::with_adjacency_matrix(&[
        [0, 1, 1, 0, 0],
        [1, 0, 1, 0, 0],
        [1, 1, 0, 1, 1],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
    ])?;
    println!("   顶点数: {}", imported.size());
    println!("   BFS: {:?}", labels(&imported, true));
    println!("   DFS: {:?}", labels(&imported, false));

    println!("\n演示完成!");
    Ok(())
}
