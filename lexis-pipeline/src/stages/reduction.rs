//! Dimensionality reduction: principal component analysis.
//!
//! Components are found one at a time by power iteration on the centred data,
//! deflating the residual after each. `X^T X v` is evaluated as `X^T (X v)` so
//! the covariance matrix is never materialised. Accumulation is in f64.
//!
//! Initialisation is deterministic (the residual row with the largest norm)
//! and each component's largest-magnitude entry is made positive, so the
//! same batch always reduces to the same output.

use lexis_core::config::ReductionConfig;
use lexis_core::errors::{LexisResult, ReductionError};
use lexis_core::traits::IDimensionReducer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Residual norms below this are treated as zero.
const ZERO_NORM: f64 = 1e-12;

/// A fitted PCA projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pca {
    mean: Vec<f64>,
    /// Unit-length principal axes, strongest first.
    components: Vec<Vec<f64>>,
    /// Variance captured by each component.
    explained_variance: Vec<f64>,
    /// Total variance of the centred data.
    total_variance: f64,
}

impl Pca {
    /// Fit `target_dim` components on `vectors`.
    ///
    /// # Errors
    /// `ZeroTarget`, `TooFewSamples` if `target_dim` exceeds the row count,
    /// `TooFewDimensions` if it exceeds the vector length, and
    /// `InconsistentInput` for ragged rows.
    pub fn fit(
        vectors: &[Vec<f32>],
        target_dim: usize,
        max_iterations: usize,
        tolerance: f64,
    ) -> LexisResult<Self> {
        if target_dim == 0 {
            return Err(ReductionError::ZeroTarget.into());
        }
        let n = vectors.len();
        if target_dim > n {
            return Err(ReductionError::TooFewSamples {
                target_dim,
                samples: n,
            }
            .into());
        }
        let d = vectors[0].len();
        check_rows(vectors, d)?;
        if target_dim > d {
            return Err(ReductionError::TooFewDimensions {
                target_dim,
                input_dim: d,
            }
            .into());
        }

        let mut mean = vec![0.0f64; d];
        for row in vectors {
            for (m, &x) in mean.iter_mut().zip(row) {
                *m += f64::from(x);
            }
        }
        for m in &mut mean {
            *m /= n as f64;
        }

        let mut residual: Vec<Vec<f64>> = vectors
            .iter()
            .map(|row| row.iter().zip(&mean).map(|(&x, m)| f64::from(x) - m).collect())
            .collect();

        let dof = if n > 1 { (n - 1) as f64 } else { 1.0 };
        let total_variance = residual
            .iter()
            .flat_map(|row| row.iter().map(|x| x * x))
            .sum::<f64>()
            / dof;

        let mut components: Vec<Vec<f64>> = Vec::with_capacity(target_dim);
        let mut explained_variance = Vec::with_capacity(target_dim);

        for k in 0..target_dim {
            let (v, eigenvalue, iterations) =
                leading_component(&residual, &components, d, max_iterations, tolerance);
            debug!(component = k, eigenvalue, iterations, "component extracted");

            for row in &mut residual {
                let proj = dot(row, &v);
                for (x, c) in row.iter_mut().zip(&v) {
                    *x -= proj * c;
                }
            }
            explained_variance.push(eigenvalue / dof);
            components.push(v);
        }

        Ok(Self {
            mean,
            components,
            explained_variance,
            total_variance,
        })
    }

    /// Project `vectors` onto the fitted components, preserving order.
    ///
    /// # Errors
    /// `InconsistentInput` if a row's length differs from the fitted input.
    pub fn transform(&self, vectors: &[Vec<f32>]) -> LexisResult<Vec<Vec<f32>>> {
        check_rows(vectors, self.input_dim())?;
        Ok(vectors.par_iter().map(|v| self.transform_one(v)).collect())
    }

    fn transform_one(&self, vector: &[f32]) -> Vec<f32> {
        let centred: Vec<f64> = vector
            .iter()
            .zip(&self.mean)
            .map(|(&x, m)| f64::from(x) - m)
            .collect();
        self.components
            .iter()
            .map(|c| dot(&centred, c) as f32)
            .collect()
    }

    pub fn n_components(&self) -> usize {
        self.components.len()
    }

    pub fn input_dim(&self) -> usize {
        self.mean.len()
    }

    pub fn components(&self) -> &[Vec<f64>] {
        &self.components
    }

    pub fn explained_variance(&self) -> &[f64] {
        &self.explained_variance
    }

    /// Share of total variance captured by each component. All zero for
    /// constant data.
    pub fn explained_variance_ratio(&self) -> Vec<f64> {
        if self.total_variance <= ZERO_NORM {
            return vec![0.0; self.explained_variance.len()];
        }
        self.explained_variance
            .iter()
            .map(|ev| ev / self.total_variance)
            .collect()
    }
}

/// Fused fit-and-transform reducer used by the pipeline.
#[derive(Debug, Clone)]
pub struct PcaReducer {
    max_iterations: usize,
    tolerance: f64,
}

impl PcaReducer {
    pub fn new(config: &ReductionConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        }
    }

    /// Fit on `vectors` and return both the model and the reduced rows.
    pub fn fit_transform(
        &self,
        vectors: &[Vec<f32>],
        target_dim: usize,
    ) -> LexisResult<(Pca, Vec<Vec<f32>>)> {
        let pca = Pca::fit(vectors, target_dim, self.max_iterations, self.tolerance)?;
        let reduced = pca.transform(vectors)?;
        Ok((pca, reduced))
    }
}

impl Default for PcaReducer {
    fn default() -> Self {
        Self::new(&ReductionConfig::default())
    }
}

impl IDimensionReducer for PcaReducer {
    fn reduce(&self, vectors: &[Vec<f32>], target_dim: usize) -> LexisResult<Vec<Vec<f32>>> {
        let _span = lexis_observability::reduction_span!(vectors.len(), target_dim).entered();
        let (pca, reduced) = self.fit_transform(vectors, target_dim)?;
        let captured: f64 = pca.explained_variance_ratio().iter().sum();
        info!(
            rows = reduced.len(),
            input_dim = pca.input_dim(),
            target_dim,
            captured_variance = captured,
            "reduction complete"
        );
        Ok(reduced)
    }

    fn name(&self) -> &str {
        "pca"
    }
}

fn check_rows(vectors: &[Vec<f32>], expected: usize) -> LexisResult<()> {
    match vectors.iter().position(|v| v.len() != expected) {
        Some(index) => Err(ReductionError::InconsistentInput {
            index,
            expected,
            actual: vectors[index].len(),
        }
        .into()),
        None => Ok(()),
    }
}

/// Power iteration for the leading eigenvector of `R^T R`.
///
/// Returns the unit vector, its eigenvalue and the iterations used.
fn leading_component(
    residual: &[Vec<f64>],
    found: &[Vec<f64>],
    d: usize,
    max_iterations: usize,
    tolerance: f64,
) -> (Vec<f64>, f64, usize) {
    let Some(mut v) = initial_vector(residual, found, d) else {
        // Residual is exhausted; any direction orthogonal to the others works.
        let v = fallback_axis(found, d);
        return (v, 0.0, 0);
    };

    let mut eigenvalue = 0.0;
    let mut iterations = 0;
    while iterations < max_iterations {
        iterations += 1;
        let u: Vec<f64> = residual.par_iter().map(|row| dot(row, &v)).collect();
        let mut next = vec![0.0f64; d];
        for (row, &ui) in residual.iter().zip(&u) {
            for (n, &x) in next.iter_mut().zip(row) {
                *n += x * ui;
            }
        }
        orthogonalise(&mut next, found);

        let norm = l2(&next);
        if norm < ZERO_NORM {
            break;
        }
        for x in &mut next {
            *x /= norm;
        }
        let change: f64 = v.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
        v = next;
        eigenvalue = norm;
        if change < tolerance {
            break;
        }
    }

    normalise_sign(&mut v);
    (v, eigenvalue, iterations)
}

/// The residual row with the largest norm, orthogonalised and scaled to unit
/// length. `None` when every row is (numerically) zero.
fn initial_vector(residual: &[Vec<f64>], found: &[Vec<f64>], d: usize) -> Option<Vec<f64>> {
    let mut best: Option<(f64, &Vec<f64>)> = None;
    for row in residual {
        let norm = l2(row);
        if best.map_or(true, |(b, _)| norm > b) {
            best = Some((norm, row));
        }
    }
    let (norm, row) = best?;
    if norm < ZERO_NORM || row.len() != d {
        return None;
    }
    let mut v = row.clone();
    orthogonalise(&mut v, found);
    let norm = l2(&v);
    if norm < ZERO_NORM {
        return None;
    }
    for x in &mut v {
        *x /= norm;
    }
    Some(v)
}

/// The standard basis vector that stays longest after removing `found`.
fn fallback_axis(found: &[Vec<f64>], d: usize) -> Vec<f64> {
    let mut best = vec![0.0; d];
    let mut best_norm = -1.0;
    for axis in 0..d {
        let mut e = vec![0.0; d];
        e[axis] = 1.0;
        orthogonalise(&mut e, found);
        let norm = l2(&e);
        if norm > best_norm + ZERO_NORM {
            best_norm = norm;
            best = e;
        }
    }
    if best_norm > ZERO_NORM {
        for x in &mut best {
            *x /= best_norm;
        }
    }
    normalise_sign(&mut best);
    best
}

fn orthogonalise(v: &mut [f64], found: &[Vec<f64>]) {
    for c in found {
        let proj = dot(v, c);
        for (x, ci) in v.iter_mut().zip(c) {
            *x -= proj * ci;
        }
    }
}

/// Flip `v` so its largest-magnitude entry is positive.
fn normalise_sign(v: &mut [f64]) {
    let pivot = v
        .iter()
        .copied()
        .fold(0.0f64, |acc, x| if x.abs() > acc.abs() { x } else { acc });
    if pivot < 0.0 {
        for x in v.iter_mut() {
            *x = -*x;
        }
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn l2(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}
