//! MacAdam limits: the optimal colour stimuli membership test.
//!
//! The optimal colour stimuli of an illuminant are the colours of the
//! block reflectances, which bound the solid of all physically realizable
//! surface colours under that illuminant (the MacAdam limits). A colour is
//! within the limits when its XYZ tristimulus values lie inside the convex
//! solid spanned by those stimuli.
//!
//! [`MacAdamLimits`] owns the reference dataset and two caches:
//!
//! - the *stimuli* cache holds, per illuminant, the boundary samples
//!   converted to XYZ and normalized so that the perfect reflector has
//!   `Y = 1`;
//! - the *triangulation* cache holds, per illuminant, the decomposition built
//!   over those points by the configured [`PointLocation`] backend.
//!
//! Both are filled lazily on the first request for an illuminant and reused
//! afterwards. Cached entries are never evicted; [`MacAdamLimits::reset_caches`]
//! drops them so that subsequent requests observe the current dataset.
//!
//! The free functions at the bottom of this module operate on a process-wide
//! instance created on first use.

use crate::core::algorithms::locate::LocateError;
use crate::core::cache::BuildCache;
use crate::core::traits::point_location::{DelaunayLocator, PointLocation};
use crate::core::triangulation::TriangulationError;
use crate::geometry::point::Point;
use crate::models::cie_xyy::xyy_to_xyz;
use crate::volume::dataset::OptimalColourStimuliDataset;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};
use thiserror::Error;
use tracing::debug;

/// Luminance of the perfect reflector in the reference dataset.
pub const OPTIMAL_COLOUR_STIMULI_LUMINANCE_SCALE: f64 = 100.0;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors raised by the MacAdam limits queries.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum VolumeError {
    /// The illuminant is not in the reference dataset.
    #[error(
        "Optimal colour stimuli for illuminant {illuminant:?} not found; available illuminants: {}",
        available.join(", ")
    )]
    NotFound {
        /// The requested illuminant
        illuminant: String,
        /// Illuminants present in the dataset, sorted
        available: Vec<String>,
    },

    /// The boundary samples of the illuminant do not span a volume.
    #[error("Optimal colour stimuli for illuminant {illuminant:?} are degenerate: {source}")]
    DegenerateGeometry {
        /// The illuminant whose samples failed to triangulate
        illuminant: String,
        /// The triangulation failure
        source: TriangulationError,
    },

    /// The tolerance is negative or NaN.
    #[error("Invalid tolerance {tolerance}: must be a non-negative number")]
    InvalidTolerance {
        /// The rejected tolerance
        tolerance: f64,
    },

    /// Point location failed.
    #[error("Point location failed: {source}")]
    Locate {
        /// The location failure
        source: LocateError,
    },
}

impl From<LocateError> for VolumeError {
    fn from(source: LocateError) -> Self {
        match source {
            LocateError::InvalidTolerance { tolerance } => Self::InvalidTolerance { tolerance },
            source => Self::Locate { source },
        }
    }
}

// =============================================================================
// QUERY SHAPES
// =============================================================================

/// Shapes of CIE xyY queries accepted by [`MacAdamLimits::is_within_macadam_limits`].
///
/// A single triplet yields a single `bool`; a batch yields one `bool` per
/// triplet, in input order.
pub trait XyyQuery {
    /// Result shape.
    type Output;

    /// The xyY triplets to test.
    fn samples(&self) -> &[[f64; 3]];

    /// Shapes per-sample results, given in [`Self::samples`] order.
    fn assemble(inside: Vec<bool>) -> Self::Output;
}

impl XyyQuery for [f64; 3] {
    type Output = bool;

    fn samples(&self) -> &[[f64; 3]] {
        std::slice::from_ref(self)
    }

    fn assemble(inside: Vec<bool>) -> bool {
        inside.first().copied().unwrap_or(false)
    }
}

impl XyyQuery for [[f64; 3]] {
    type Output = Vec<bool>;

    fn samples(&self) -> &[[f64; 3]] {
        self
    }

    fn assemble(inside: Vec<bool>) -> Vec<bool> {
        inside
    }
}

impl XyyQuery for Vec<[f64; 3]> {
    type Output = Vec<bool>;

    fn samples(&self) -> &[[f64; 3]] {
        self
    }

    fn assemble(inside: Vec<bool>) -> Vec<bool> {
        inside
    }
}

impl<const N: usize> XyyQuery for [[f64; 3]; N] {
    type Output = [bool; N];

    fn samples(&self) -> &[[f64; 3]] {
        self
    }

    fn assemble(inside: Vec<bool>) -> [bool; N] {
        std::array::from_fn(|i| inside.get(i).copied().unwrap_or(false))
    }
}

// =============================================================================
// MACADAM LIMITS
// =============================================================================

/// Optimal colour stimuli dataset with per-illuminant caches.
///
/// # Examples
///
/// ```rust
/// use macadam::volume::macadam_limits::MacAdamLimits;
///
/// let limits = MacAdamLimits::default();
/// assert!(limits.is_within_macadam_limits(&[0.4476, 0.4075, 0.5], "A", None).unwrap());
/// assert_eq!(
///     limits
///         .is_within_macadam_limits(&[[0.3205, 0.4131, 0.51], [0.0005, 0.0031, 0.001]], "A", None)
///         .unwrap(),
///     [true, false]
/// );
/// assert!(limits.is_within_macadam_limits(&[0.4476, 0.4075, 0.5], "F2", None).is_err());
/// ```
pub struct MacAdamLimits<L: PointLocation = DelaunayLocator> {
    dataset: ArcSwap<OptimalColourStimuliDataset>,
    locator: L,
    stimuli: BuildCache<Vec<Point>>,
    triangulations: BuildCache<L::Complex>,
}

impl Default for MacAdamLimits {
    fn default() -> Self {
        Self::new(OptimalColourStimuliDataset::default())
    }
}

impl MacAdamLimits {
    /// Creates an instance over `dataset` with the default locator.
    #[must_use]
    pub fn new(dataset: OptimalColourStimuliDataset) -> Self {
        Self::with_locator(dataset, DelaunayLocator::default())
    }
}

impl<L: PointLocation> MacAdamLimits<L> {
    /// Creates an instance over `dataset` using `locator` for the geometry.
    #[must_use]
    pub fn with_locator(dataset: OptimalColourStimuliDataset, locator: L) -> Self {
        Self {
            dataset: ArcSwap::from_pointee(dataset),
            locator,
            stimuli: BuildCache::new(),
            triangulations: BuildCache::new(),
        }
    }

    /// Snapshot of the reference dataset.
    #[must_use]
    pub fn dataset(&self) -> Arc<OptimalColourStimuliDataset> {
        self.dataset.load_full()
    }

    /// Modifies the reference dataset.
    ///
    /// Cached illuminants keep their entries until [`Self::reset_caches`];
    /// `update` may run more than once under concurrent updates.
    pub fn update_dataset<F>(&self, mut update: F)
    where
        F: FnMut(&mut OptimalColourStimuliDataset),
    {
        self.dataset.rcu(|current| {
            let mut next = (**current).clone();
            update(&mut next);
            next
        });
    }

    /// The point location backend.
    #[must_use]
    pub const fn locator(&self) -> &L {
        &self.locator
    }

    /// Cache of XYZ boundary points.
    #[must_use]
    pub const fn stimuli_cache(&self) -> &BuildCache<Vec<Point>> {
        &self.stimuli
    }

    /// Cache of boundary decompositions.
    #[must_use]
    pub const fn triangulation_cache(&self) -> &BuildCache<L::Complex> {
        &self.triangulations
    }

    /// Drops every cached entry.
    ///
    /// Stimuli go first: a triangulation build still running holds the
    /// triangulation cache until it finishes, and its result is dropped by the
    /// second clear.
    pub fn reset_caches(&self) {
        self.stimuli.clear();
        self.triangulations.clear();
        debug!("MacAdam limits caches reset");
    }

    fn not_found(&self, illuminant: &str) -> VolumeError {
        VolumeError::NotFound {
            illuminant: illuminant.to_owned(),
            available: self
                .dataset
                .load()
                .keys()
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Optimal colour stimuli of `illuminant` in CIE XYZ, with `Y = 1` for
    /// the perfect reflector.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::NotFound`] when the illuminant is unknown.
    pub fn xyz_optimal_colour_stimuli(&self, illuminant: &str) -> Result<Arc<Vec<Point>>, VolumeError> {
        self.stimuli.get_or_build(illuminant, || {
            let dataset = self.dataset.load();
            let samples = dataset
                .get(illuminant)
                .ok_or_else(|| self.not_found(illuminant))?;
            let points: Vec<Point> = samples
                .iter()
                .map(|xyy| {
                    Point::from(xyy_to_xyz(*xyy).map(|c| c / OPTIMAL_COLOUR_STIMULI_LUMINANCE_SCALE))
                })
                .collect();
            debug!(illuminant, points = points.len(), "optimal colour stimuli converted");
            Ok(points)
        })
    }

    /// Decomposition of the optimal colour stimuli solid of `illuminant`.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::NotFound`] when the illuminant is unknown and
    /// [`VolumeError::DegenerateGeometry`] when its samples do not span a volume.
    pub fn optimal_colour_stimuli_triangulation(
        &self,
        illuminant: &str,
    ) -> Result<Arc<L::Complex>, VolumeError> {
        self.triangulations.get_or_build(illuminant, || {
            let points = self.xyz_optimal_colour_stimuli(illuminant)?;
            let complex = self.locator.build(&points).map_err(|source| {
                VolumeError::DegenerateGeometry {
                    illuminant: illuminant.to_owned(),
                    source,
                }
            })?;
            debug!(illuminant, points = points.len(), "optimal colour stimuli triangulated");
            Ok(complex)
        })
    }

    /// Tests whether CIE xyY colours are within the MacAdam limits of `illuminant`.
    ///
    /// `query` is one xyY triplet or a batch of them, with `Y` on a 0 to 1
    /// scale. A colour on the boundary counts as within; `tolerance` (default
    /// [`crate::core::algorithms::locate::DEFAULT_TOLERANCE`]) is the slack
    /// allowed on each barycentric coordinate. Colours whose XYZ values are
    /// not finite are never within.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::NotFound`] for an unknown illuminant,
    /// [`VolumeError::DegenerateGeometry`] when the limits cannot be built and
    /// [`VolumeError::InvalidTolerance`] for a negative or NaN tolerance.
    pub fn is_within_macadam_limits<Q>(
        &self,
        query: &Q,
        illuminant: &str,
        tolerance: Option<f64>,
    ) -> Result<Q::Output, VolumeError>
    where
        Q: XyyQuery + ?Sized,
    {
        let complex = self.optimal_colour_stimuli_triangulation(illuminant)?;
        let points: Vec<Point> = query
            .samples()
            .iter()
            .map(|xyy| Point::from(xyy_to_xyz(*xyy)))
            .collect();
        let found = self.locator.locate(&complex, &points, tolerance)?;
        Ok(Q::assemble(found.iter().map(Option::is_some).collect()))
    }
}

// =============================================================================
// PROCESS-WIDE INSTANCE
// =============================================================================

static MACADAM_LIMITS: LazyLock<MacAdamLimits> = LazyLock::new(MacAdamLimits::default);

/// The process-wide instance used by the free functions of this module.
#[must_use]
pub fn macadam_limits() -> &'static MacAdamLimits {
    &MACADAM_LIMITS
}

/// [`MacAdamLimits::xyz_optimal_colour_stimuli`] on the process-wide instance.
///
/// # Errors
///
/// See [`MacAdamLimits::xyz_optimal_colour_stimuli`].
pub fn xyz_optimal_colour_stimuli(illuminant: &str) -> Result<Arc<Vec<Point>>, VolumeError> {
    MACADAM_LIMITS.xyz_optimal_colour_stimuli(illuminant)
}

/// [`MacAdamLimits::optimal_colour_stimuli_triangulation`] on the process-wide instance.
///
/// # Errors
///
/// See [`MacAdamLimits::optimal_colour_stimuli_triangulation`].
pub fn optimal_colour_stimuli_triangulation(
    illuminant: &str,
) -> Result<Arc<<DelaunayLocator as PointLocation>::Complex>, VolumeError> {
    MACADAM_LIMITS.optimal_colour_stimuli_triangulation(illuminant)
}

/// [`MacAdamLimits::is_within_macadam_limits`] on the process-wide instance.
///
/// # Errors
///
/// See [`MacAdamLimits::is_within_macadam_limits`].
///
/// # Examples
///
/// ```rust
/// use macadam::volume::macadam_limits::is_within_macadam_limits;
///
/// assert!(is_within_macadam_limits(&[0.3205, 0.4131, 0.51], "A", None).unwrap());
/// assert!(!is_within_macadam_limits(&[0.0005, 0.0031, 0.001], "A", None).unwrap());
/// ```
pub fn is_within_macadam_limits<Q>(
    query: &Q,
    illuminant: &str,
    tolerance: Option<f64>,
) -> Result<Q::Output, VolumeError>
where
    Q: XyyQuery + ?Sized,
{
    MACADAM_LIMITS.is_within_macadam_limits(query, illuminant, tolerance)
}

/// Drops the cached entries of the process-wide instance.
pub fn reset_macadam_limits_caches() {
    MACADAM_LIMITS.reset_caches();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::CellKey;
    use crate::core::triangulation::Triangulation;
    use crate::models::cie_xyy::xyz_to_xyy;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Mutex, mpsc};
    use std::thread;
    use std::time::{Duration, Instant};

    const WHITE: [f64; 2] = [1.0 / 3.0, 1.0 / 3.0];

    /// xyY samples (Y on 0..100) of the corners of the XYZ box
    /// `[0.1, 0.9]^3` scaled by `edge`.
    fn box_samples(edge: f64) -> Vec<[f64; 3]> {
        let mut samples = Vec::new();
        for x in [0.1, 0.9] {
            for y in [0.1, 0.9] {
                for z in [0.1, 0.9] {
                    let xyz = [x, y, z].map(|c| c * edge * 100.0);
                    samples.push(xyz_to_xyy(xyz, WHITE));
                }
            }
        }
        samples
    }

    fn box_limits() -> MacAdamLimits {
        let mut dataset = OptimalColourStimuliDataset::empty();
        dataset.insert("box", box_samples(1.0));
        MacAdamLimits::new(dataset)
    }

    #[test]
    fn stimuli_are_converted_and_normalized() {
        let limits = box_limits();
        let points = limits.xyz_optimal_colour_stimuli("box").unwrap();
        assert_eq!(points.len(), 8);
        assert!(
            points
                .iter()
                .all(|p| p.coords().iter().all(|c| (0.1 - 1e-12..=0.9 + 1e-12).contains(c)))
        );
        let again = limits.xyz_optimal_colour_stimuli("box").unwrap();
        assert!(Arc::ptr_eq(&points, &again));
        assert_eq!(limits.stimuli_cache().build_count(), 1);
    }

    #[test]
    fn membership_in_box() {
        let limits = box_limits();
        let inside = [xyz_to_xyy([0.5, 0.5, 0.5], WHITE), xyz_to_xyy([0.85, 0.85, 0.2], WHITE)];
        let outside = [xyz_to_xyy([1.2, 0.5, 0.5], WHITE), xyz_to_xyy([0.05, 0.05, 0.05], WHITE)];
        assert_eq!(limits.is_within_macadam_limits(&inside, "box", None).unwrap(), [true, true]);
        assert_eq!(
            limits.is_within_macadam_limits(&outside, "box", None).unwrap(),
            [false, false]
        );
        assert_eq!(limits.triangulation_cache().build_count(), 1);
    }

    #[test]
    fn shapes_are_preserved() {
        let limits = box_limits();
        let q = xyz_to_xyy([0.5, 0.5, 0.5], WHITE);
        let single: bool = limits.is_within_macadam_limits(&q, "box", None).unwrap();
        assert!(single);

        let vec_query = vec![q, [0.3, 0.3, 5.0], q];
        let vec_result: Vec<bool> = limits.is_within_macadam_limits(&vec_query, "box", None).unwrap();
        assert_eq!(vec_result, vec![true, false, true]);

        let slice_result = limits
            .is_within_macadam_limits(&vec_query[..2], "box", None)
            .unwrap();
        assert_eq!(slice_result, vec![true, false]);

        let empty: Vec<[f64; 3]> = Vec::new();
        assert!(limits.is_within_macadam_limits(&empty, "box", None).unwrap().is_empty());
    }

    #[test]
    fn unknown_illuminant_is_an_error() {
        let limits = box_limits();
        let err = limits
            .is_within_macadam_limits(&[0.3, 0.3, 0.5], "A", None)
            .unwrap_err();
        assert_eq!(
            err,
            VolumeError::NotFound {
                illuminant: "A".to_string(),
                available: vec!["box".to_string()],
            }
        );
        assert!(err.to_string().contains("box"));
        assert!(limits.stimuli_cache().is_empty());
    }

    #[test]
    fn invalid_tolerance_is_an_error() {
        let limits = box_limits();
        let q = [0.3, 0.3, 0.5];
        assert_eq!(
            limits.is_within_macadam_limits(&q, "box", Some(-1e-9)),
            Err(VolumeError::InvalidTolerance { tolerance: -1e-9 })
        );
        assert!(matches!(
            limits.is_within_macadam_limits(&q, "box", Some(f64::NAN)),
            Err(VolumeError::InvalidTolerance { .. })
        ));
    }

    #[test]
    fn degenerate_samples_fail_to_build() {
        let mut dataset = OptimalColourStimuliDataset::empty();
        // Constant luminance: every XYZ point lies on the plane Y = 0.5.
        dataset.insert(
            "flat",
            vec![[0.2, 0.3, 50.0], [0.4, 0.3, 50.0], [0.3, 0.5, 50.0], [0.35, 0.35, 50.0]],
        );
        dataset.insert("tiny", vec![[0.3, 0.3, 10.0], [0.3, 0.3, 20.0]]);
        let limits = MacAdamLimits::new(dataset);

        let err = limits
            .is_within_macadam_limits(&[0.3, 0.3, 0.5], "flat", None)
            .unwrap_err();
        assert!(matches!(
            err,
            VolumeError::DegenerateGeometry {
                ref illuminant,
                source: TriangulationError::GeometricDegeneracy { .. },
            } if illuminant == "flat"
        ));
        assert!(matches!(
            limits.optimal_colour_stimuli_triangulation("tiny"),
            Err(VolumeError::DegenerateGeometry {
                source: TriangulationError::InsufficientVertices { found: 2 },
                ..
            })
        ));
        assert!(limits.triangulation_cache().is_empty());
    }

    #[test]
    fn dataset_updates_apply_after_reset() {
        let limits = box_limits();
        let q = xyz_to_xyy([1.5, 1.5, 1.5], WHITE);
        assert!(!limits.is_within_macadam_limits(&q, "box", None).unwrap());

        limits.update_dataset(|dataset| {
            dataset.insert("box", box_samples(2.0));
        });
        assert!(!limits.is_within_macadam_limits(&q, "box", None).unwrap());
        assert_eq!(limits.triangulation_cache().build_count(), 1);

        limits.reset_caches();
        assert!(limits.is_within_macadam_limits(&q, "box", None).unwrap());
        assert_eq!(limits.triangulation_cache().build_count(), 2);
        assert_eq!(limits.stimuli_cache().build_count(), 2);
    }

    #[test]
    fn default_instance_uses_builtin_dataset_and_delaunay_locator() {
        let limits = MacAdamLimits::default();
        assert_eq!(limits.locator(), &DelaunayLocator::default());
        assert_eq!(limits.dataset().keys(), vec!["A", "C", "D65"]);
    }

    /// Delegates to [`DelaunayLocator`], holding its first build until released.
    struct GatedLocator {
        inner: DelaunayLocator,
        gated: AtomicBool,
        entered: Mutex<mpsc::Sender<()>>,
        release: Mutex<mpsc::Receiver<()>>,
    }

    impl PointLocation for GatedLocator {
        type Complex = Triangulation;
        type SimplexId = CellKey;

        fn build(&self, points: &[Point]) -> Result<Triangulation, TriangulationError> {
            if self.gated.swap(false, Ordering::SeqCst) {
                self.entered.lock().unwrap().send(()).unwrap();
                self.release.lock().unwrap().recv().unwrap();
            }
            self.inner.build(points)
        }

        fn locate(
            &self,
            complex: &Triangulation,
            points: &[Point],
            tolerance: Option<f64>,
        ) -> Result<Vec<Option<CellKey>>, LocateError> {
            self.inner.locate(complex, points, tolerance)
        }
    }

    #[test]
    fn reset_during_a_running_build_discards_stale_geometry() {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let mut dataset = OptimalColourStimuliDataset::empty();
        dataset.insert("box", box_samples(1.0));
        let limits = Arc::new(MacAdamLimits::with_locator(
            dataset,
            GatedLocator {
                inner: DelaunayLocator::default(),
                gated: AtomicBool::new(true),
                entered: Mutex::new(entered_tx),
                release: Mutex::new(release_rx),
            },
        ));
        let q = xyz_to_xyy([1.5, 1.5, 1.5], WHITE);

        let query = {
            let limits = Arc::clone(&limits);
            thread::spawn(move || limits.is_within_macadam_limits(&q, "box", None).unwrap())
        };
        entered_rx.recv().unwrap();
        limits.update_dataset(|dataset| {
            dataset.insert("box", box_samples(2.0));
        });
        let reset = {
            let limits = Arc::clone(&limits);
            thread::spawn(move || limits.reset_caches())
        };

        // The stale stimuli are dropped while the old build is still running.
        let deadline = Instant::now() + Duration::from_secs(10);
        while !limits.stimuli_cache().is_empty() {
            assert!(Instant::now() < deadline, "stimuli outlived a pending reset");
            thread::yield_now();
        }
        release_tx.send(()).unwrap();
        assert!(!query.join().unwrap());
        reset.join().unwrap();

        assert!(limits.triangulation_cache().is_empty());
        assert!(limits.is_within_macadam_limits(&q, "box", None).unwrap());
    }

    #[test]
    fn locate_errors_map_to_volume_errors() {
        assert_eq!(
            VolumeError::from(LocateError::InvalidTolerance { tolerance: -2.0 }),
            VolumeError::InvalidTolerance { tolerance: -2.0 }
        );
        assert_eq!(
            VolumeError::from(LocateError::EmptyTriangulation),
            VolumeError::Locate {
                source: LocateError::EmptyTriangulation
            }
        );
    }
}
