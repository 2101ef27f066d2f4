// ABOUTME: Ordinary least squares helpers used for progress trends
// ABOUTME: Slope is reported per unit of x, which is days for weight series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

/// Minimum number of points for a regression to be meaningful
pub const MIN_REGRESSION_POINTS: usize = 2;

/// Least-squares slope of `y` over `x`.
///
/// Returns `None` when fewer than [`MIN_REGRESSION_POINTS`] points are given
/// or when every `x` is identical, since the slope is undefined in both cases.
#[must_use]
pub fn least_squares_slope(points: &[(f64, f64)]) -> Option<f64> {
    if points.len() < MIN_REGRESSION_POINTS {
        return None;
    }

    let n = points.len() as f64;
    let (sum_x, sum_y, sum_xx, sum_xy) = points.iter().fold(
        (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64),
        |(sx, sy, sxx, sxy), &(x, y)| (sx + x, sy + y, x.mul_add(x, sxx), x.mul_add(y, sxy)),
    );

    let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
    if denominator.abs() < f64::EPSILON {
        return None;
    }

    Some(n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator)
}
