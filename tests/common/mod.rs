#![allow(dead_code)]

use adsorb::{Configuration, GridConfiguration, GridShape, Label};

pub fn shape(rows: usize, cols: usize) -> GridShape {
    GridShape::new(rows, cols).expect("valid grid shape")
}

pub fn adsorbate(symbol: &str) -> Label {
    Label::Adsorbate(symbol.to_string())
}

/// Rotates a configuration on a square grid by a quarter turn.
pub fn rotate90(config: &GridConfiguration) -> GridConfiguration {
    let shape = config.shape();
    assert!(shape.is_square());
    let n = shape.rows();
    let occupied: Vec<usize> = config
        .occupied_coordinates()
        .into_iter()
        .map(|(row, col)| shape.index(col, n - 1 - row))
        .collect();
    GridConfiguration::from_occupied(shape, &occupied).expect("rotated cells stay on the grid")
}

/// Mirrors a configuration across the vertical axis of its grid.
pub fn reflect_cols(config: &GridConfiguration) -> GridConfiguration {
    let shape = config.shape();
    let occupied: Vec<usize> = config
        .occupied_coordinates()
        .into_iter()
        .map(|(row, col)| shape.index(row, shape.cols() - 1 - col))
        .collect();
    GridConfiguration::from_occupied(shape, &occupied).expect("mirrored cells stay on the grid")
}

/// Shifts a configuration by whole cells, or returns `None` if it would leave the grid.
pub fn translate(config: &GridConfiguration, d_row: isize, d_col: isize) -> Option<GridConfiguration> {
    let shape = config.shape();
    let mut occupied = Vec::new();
    for (row, col) in config.occupied_coordinates() {
        let row = row as isize + d_row;
        let col = col as isize + d_col;
        if row < 0 || col < 0 || row >= shape.rows() as isize || col >= shape.cols() as isize {
            return None;
        }
        occupied.push(shape.index(row as usize, col as usize));
    }
    GridConfiguration::from_occupied(shape, &occupied).ok()
}

/// A congruence key of the occupied point set in the free plane: the smallest translated and
/// sorted image over the eight symmetries of the square.
pub fn congruence_key(config: &GridConfiguration) -> Vec<(i64, i64)> {
    let points: Vec<(i64, i64)> = config
        .occupied_coordinates()
        .into_iter()
        .map(|(row, col)| (row as i64, col as i64))
        .collect();

    let mut best: Option<Vec<(i64, i64)>> = None;
    for swap in [false, true] {
        for row_sign in [1, -1] {
            for col_sign in [1, -1] {
                let mut image: Vec<(i64, i64)> = points
                    .iter()
                    .map(|&(r, c)| {
                        let (r, c) = if swap { (c, r) } else { (r, c) };
                        (r * row_sign, c * col_sign)
                    })
                    .collect();
                let min_r = image.iter().map(|p| p.0).min().unwrap_or(0);
                let min_c = image.iter().map(|p| p.1).min().unwrap_or(0);
                for point in image.iter_mut() {
                    point.0 -= min_r;
                    point.1 -= min_c;
                }
                image.sort_unstable();
                if best.as_ref().is_none_or(|b| image < *b) {
                    best = Some(image);
                }
            }
        }
    }
    best.unwrap_or_default()
}

/// Degrees of the distance-one graph computed with a plain double loop.
pub fn brute_force_degrees<C: Configuration>(vertices: &[C]) -> Vec<usize> {
    (0..vertices.len())
        .map(|i| {
            (0..vertices.len())
                .filter(|&j| j != i && vertices[i].distance(&vertices[j]) == 1)
                .count()
        })
        .collect()
}
