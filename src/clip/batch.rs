//! Clipping many segments against one window.

use super::{split_segment, ClipOptions, SegmentSplit};
use crate::primitives::Segment2;
use crate::window::ClipWindow;
use log::{debug, trace};
use num_traits::Float;

/// Summary of a batch clip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipStats {
    /// Segments processed.
    pub total: usize,
    /// Segments with a visible part (including single-point touches).
    pub accepted: usize,
    /// Segments entirely outside.
    pub rejected: usize,
    /// Accepted segments returned without any cut.
    pub unchanged: usize,
}

impl ClipStats {
    /// Tallies `results` against the `segments` they were computed from.
    pub fn collect<F: Float>(segments: &[Segment2<F>], results: &[Option<Segment2<F>>]) -> Self {
        let mut stats = Self::default();
        for (segment, result) in segments.iter().zip(results) {
            stats.total += 1;
            match result {
                Some(clipped) => {
                    stats.accepted += 1;
                    if clipped == segment {
                        stats.unchanged += 1;
                    }
                }
                None => stats.rejected += 1,
            }
        }
        stats
    }
}

/// Clips every segment, preserving order.
pub fn clip_all<F, W>(
    segments: &[Segment2<F>],
    window: &W,
    options: &ClipOptions<F>,
) -> Vec<Option<Segment2<F>>>
where
    F: Float,
    W: ClipWindow<F> + ?Sized,
{
    let results: Vec<_> = segments
        .iter()
        .enumerate()
        .map(|(index, &segment)| {
            let clipped = window.clip_segment(segment, options);
            if clipped.is_none() {
                trace!("segment {} lies outside the clip window", index);
            }
            clipped
        })
        .collect();

    log_stats(segments, &results);
    results
}

/// Splits every segment into before/inside/after pieces, preserving order.
pub fn split_all<F, W>(
    segments: &[Segment2<F>],
    window: &W,
    options: &ClipOptions<F>,
) -> Vec<SegmentSplit<F>>
where
    F: Float,
    W: ClipWindow<F> + ?Sized,
{
    let splits: Vec<_> = segments
        .iter()
        .map(|&segment| split_segment(segment, window, options))
        .collect();
    debug!(
        "split {} segments, {} visible",
        splits.len(),
        splits.iter().filter(|s| s.is_visible()).count()
    );
    splits
}

/// Parallel [`clip_all`]. Each segment is clipped independently.
#[cfg(feature = "rayon")]
pub fn par_clip_all<F, W>(
    segments: &[Segment2<F>],
    window: &W,
    options: &ClipOptions<F>,
) -> Vec<Option<Segment2<F>>>
where
    F: Float + Send + Sync,
    W: ClipWindow<F> + Sync + ?Sized,
{
    use rayon::prelude::*;

    let results: Vec<_> = segments
        .par_iter()
        .map(|&segment| window.clip_segment(segment, options))
        .collect();

    log_stats(segments, &results);
    results
}

fn log_stats<F: Float>(segments: &[Segment2<F>], results: &[Option<Segment2<F>>]) {
    if log::log_enabled!(log::Level::Debug) {
        let stats = ClipStats::collect(segments, results);
        debug!(
            "clipped {} segments: {} accepted ({} unchanged), {} rejected",
            stats.total, stats.accepted, stats.unchanged, stats.rejected
        );
    }
}
