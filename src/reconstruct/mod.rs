//! Line reconstruction from positioned PDF text fragments
//!
//! PDF text arrives as runs of glyphs with an origin and a width, in whatever
//! order the content stream drew them. There are no word or line boundaries.
//! This module recovers lines purely from geometry:
//!
//! 1. Order fragments top to bottom, left to right. Two fragments whose
//!    baselines are within `line_tolerance` count as the same line.
//! 2. Split the ordered run into lines wherever a fragment's baseline moves
//!    `line_tolerance` or more from the fragment before it. This is sequential:
//!    a line can drift by up to the tolerance per adjacent pair.
//! 3. Join each line's fragments, inserting a space only where the horizontal
//!    gap exceeds `word_gap`. Smaller or negative gaps are a word split across
//!    glyph runs ("Ye" + "s").

use std::cmp::Ordering;

use crate::config::ReconstructOptions;
use crate::models::{PositionedFragment, ReconstructedLine};

/// Reconstruct one page's lines with the default thresholds
pub fn reconstruct(fragments: &[PositionedFragment]) -> Vec<ReconstructedLine> {
    reconstruct_with(fragments, &ReconstructOptions::default())
}

/// Reconstruct one page's lines with explicit thresholds
pub fn reconstruct_with(
    fragments: &[PositionedFragment],
    opts: &ReconstructOptions,
) -> Vec<ReconstructedLine> {
    if fragments.is_empty() {
        return Vec::new();
    }

    let ordered = sort_reading_order(fragments, opts.line_tolerance);
    let lines: Vec<ReconstructedLine> = group_lines(&ordered, opts.line_tolerance)
        .iter()
        .map(|group| join_line(group, opts.word_gap))
        .filter(|text| !text.is_empty())
        .map(ReconstructedLine::from)
        .collect();

    log::debug!(
        "reconstructed {} lines from {} fragments",
        lines.len(),
        fragments.len()
    );
    lines
}

/// Reading-order comparison with a same-line tolerance on y.
///
/// Not a total order: a ~ b and b ~ c does not imply a ~ c.
fn reading_order(a: &PositionedFragment, b: &PositionedFragment, tolerance: f64) -> Ordering {
    if (a.y - b.y).abs() < tolerance {
        a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal)
    } else {
        b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal)
    }
}

/// Stable merge sort under `reading_order`.
///
/// The std sorts are allowed to panic when the comparator is inconsistent,
/// which the tolerance makes possible. A plain merge only ever asks "is the
/// right head strictly before the left head", so it terminates in
/// O(n log n) for any comparator. Same input, same order, always.
fn sort_reading_order(
    fragments: &[PositionedFragment],
    tolerance: f64,
) -> Vec<&PositionedFragment> {
    let mut sorted: Vec<&PositionedFragment> = fragments.iter().collect();
    let mut scratch: Vec<&PositionedFragment> = Vec::with_capacity(sorted.len());

    let mut width = 1;
    while width < sorted.len() {
        scratch.clear();
        for run in sorted.chunks(width * 2) {
            let (left, right) = run.split_at(width.min(run.len()));
            merge_runs(left, right, tolerance, &mut scratch);
        }
        std::mem::swap(&mut sorted, &mut scratch);
        width *= 2;
    }
    sorted
}

fn merge_runs<'a>(
    left: &[&'a PositionedFragment],
    right: &[&'a PositionedFragment],
    tolerance: f64,
    out: &mut Vec<&'a PositionedFragment>,
) {
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if reading_order(left[i], right[j], tolerance) == Ordering::Greater {
            out.push(right[j]);
            j += 1;
        } else {
            out.push(left[i]);
            i += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}

/// Split the ordered fragments into lines on baseline jumps
fn group_lines<'a>(
    ordered: &[&'a PositionedFragment],
    tolerance: f64,
) -> Vec<Vec<&'a PositionedFragment>> {
    let mut lines: Vec<Vec<&PositionedFragment>> = Vec::new();
    let mut current: Vec<&PositionedFragment> = Vec::new();

    for &fragment in ordered {
        if let Some(prev) = current.last() {
            if (fragment.y - prev.y).abs() >= tolerance {
                lines.push(std::mem::take(&mut current));
            }
        }
        current.push(fragment);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Concatenate one line's fragments and normalize its whitespace
fn join_line(group: &[&PositionedFragment], word_gap: f64) -> String {
    let mut text = String::new();
    for (i, fragment) in group.iter().enumerate() {
        text.push_str(&fragment.text);
        if let Some(next) = group.get(i + 1) {
            if fragment.gap_to(next) > word_gap {
                text.push(' ');
            }
        }
    }
    collapse_whitespace(&text)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
