// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coordinate transforms and travel math

use nalgebra::{Matrix4, Point3};

/// Apply a column-major global matrix to a local point
pub fn apply_matrix(matrix: &[f64; 16], point: [f64; 3]) -> [f64; 3] {
    let matrix = Matrix4::from_column_slice(matrix);
    let transformed = matrix.transform_point(&Point3::from(point));
    [transformed.x, transformed.y, transformed.z]
}

/// Euclidean distance between two points
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    (Point3::from(a) - Point3::from(b)).norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: [f64; 16] = [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ];

    #[test]
    fn test_identity_leaves_point_unchanged() {
        assert_eq!(apply_matrix(&IDENTITY, [1.5, -2.0, 3.0]), [1.5, -2.0, 3.0]);
    }

    #[test]
    fn test_translation_moves_point() {
        // Column-major: translation lives in elements 12..15
        let mut matrix = IDENTITY;
        matrix[12] = 10.0;
        matrix[13] = 20.0;
        matrix[14] = 30.0;
        assert_eq!(apply_matrix(&matrix, [1.0, 2.0, 3.0]), [11.0, 22.0, 33.0]);
    }

    #[test]
    fn test_rotation_about_z() {
        // 90 degrees about Z, column-major
        let matrix = [
            0.0, 1.0, 0.0, 0.0, //
            -1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        let rotated = apply_matrix(&matrix, [1.0, 0.0, 0.0]);
        assert!((rotated[0] - 0.0).abs() < 1e-12);
        assert!((rotated[1] - 1.0).abs() < 1e-12);
        assert!((rotated[2] - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance([0.0, 0.0, 0.0], [3.0, 4.0, 0.0]), 5.0);
        assert_eq!(distance([1.0, 1.0, 1.0], [1.0, 1.0, 1.0]), 0.0);
    }
}
