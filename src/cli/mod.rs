//! 命令行支持
//!
//! 结果格式化输出

mod printer;

pub use printer::{PrintMode, Printer};
