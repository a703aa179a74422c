//! 邻接矩阵
//!
//! 导出与导入共用的矩阵表示和校验

use crate::error::{Error, Result};

/// 邻接矩阵：方阵，0 表示无边，非 0 表示有边
pub type AdjacencyMatrix = Vec<Vec<i64>>;

/// 校验矩阵为方阵（包括行长度一致）
pub fn validate_square<R: AsRef<[i64]>>(matrix: &[R]) -> Result<()> {
    let n = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        let len = row.as_ref().len();
        if len != n {
            return Err(Error::MalformedMatrix(format!(
                "第 {} 行有 {} 列, 期望 {} 列",
                i, len, n
            )));
        }
    }
    Ok(())
}

/// 上三角（i < j）中非 0 的格子，按行优先顺序
///
/// 下三角和对角线不读取，非对称矩阵以上三角为准。
pub fn upper_triangle<'a, R>(matrix: &'a [R]) -> impl Iterator<Item = (usize, usize)> + 'a
where
    R: AsRef<[i64]> + 'a,
{
    matrix.iter().enumerate().flat_map(|(i, row)| {
        row.as_ref()
            .iter()
            .enumerate()
            .skip(i + 1)
            .filter(|(_, cell)| **cell != 0)
            .map(move |(j, _)| (i, j))
    })
}

/// 是否对称（非方阵一律不对称）
pub fn is_symmetric<R: AsRef<[i64]>>(matrix: &[R]) -> bool {
    validate_square(matrix).is_ok()
        && matrix.iter().enumerate().all(|(i, row)| {
            row.as_ref()
                .iter()
                .enumerate()
                .all(|(j, &cell)| matrix[j].as_ref().get(i) == Some(&cell))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_square() {
        assert!(validate_square::<Vec<i64>>(&[]).is_ok());
        assert!(validate_square(&[[0, 1], [1, 0]]).is_ok());

        let ragged = vec![vec![0, 1], vec![1]];
        assert!(matches!(validate_square(&ragged), Err(Error::MalformedMatrix(_))));

        let wide = vec![vec![0, 1, 0], vec![1, 0, 0]];
        assert!(matches!(validate_square(&wide), Err(Error::MalformedMatrix(_))));
    }

    #[test]
    fn test_upper_triangle_ignores_lower_and_diagonal() {
        let m = [[1, 0, 2], [5, 1, 0], [7, 1, 1]];
        let cells: Vec<_> = upper_triangle(&m).collect();

        assert_eq!(cells, vec![(0, 2)]);
    }

    #[test]
    fn test_is_symmetric() {
        assert!(is_symmetric(&[[0, 1], [1, 0]]));
        assert!(!is_symmetric(&[[0, 1], [0, 0]]));
        assert!(!is_symmetric(&vec![vec![0, 1], vec![1]]));
        assert!(!is_symmetric(&vec![vec![0, 1, 0], vec![1, 0, 0]]));
        assert!(is_symmetric::<Vec<i64>>(&[]));
    }
}
