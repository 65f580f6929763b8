//! Randomised integer compositions.
//!
//! A total is broken into a fixed number of non-negative pieces that always sum back
//! to the total. Small totals (0, 1, 2) have their own shapes; larger totals are cut
//! at positions drawn with replacement, so repeated cuts leave empty buckets.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{FixtureError, Result};

/// Split `total` into `bucket_count` non-negative pieces in random order.
pub fn partition<R: Rng + ?Sized>(total: i64, bucket_count: usize, rng: &mut R) -> Result<Vec<u64>> {
    if bucket_count == 0 {
        return Err(FixtureError::InvalidArgument(
            "bucket count must be at least 1".into(),
        ));
    }
    if total < 0 {
        return Err(FixtureError::InvalidArgument(format!(
            "cannot partition negative total {total}"
        )));
    }
    let total = total as u64;

    let mut pieces = match total {
        0 => vec![0; bucket_count],
        1 => with_leading(&[1], bucket_count),
        2 if bucket_count == 1 || rng.gen_bool(0.5) => with_leading(&[2], bucket_count),
        2 => with_leading(&[1, 1], bucket_count),
        _ => cut_segments(total, bucket_count, rng),
    };

    pieces.shuffle(rng);
    debug_assert_eq!(pieces.len(), bucket_count);
    debug_assert_eq!(pieces.iter().sum::<u64>(), total);
    Ok(pieces)
}

/// Partition `total` over `labels`, piece `i` going to `labels[i]`, values as decimal strings.
pub fn split_among<R: Rng + ?Sized>(
    total: i64,
    labels: &[String],
    rng: &mut R,
) -> Result<HashMap<String, String>> {
    let pieces = partition(total, labels.len(), rng)?;
    Ok(labels
        .iter()
        .cloned()
        .zip(pieces.into_iter().map(|p| p.to_string()))
        .collect())
}

fn with_leading(head: &[u64], bucket_count: usize) -> Vec<u64> {
    let mut pieces = head.to_vec();
    pieces.resize(bucket_count, 0);
    pieces
}

// total > 2: cuts land in [1, total - 2], sorted, duplicates allowed
fn cut_segments<R: Rng + ?Sized>(total: u64, bucket_count: usize, rng: &mut R) -> Vec<u64> {
    let mut cuts: Vec<u64> = (1..bucket_count)
        .map(|_| rng.gen_range(1..=total - 2))
        .collect();
    cuts.sort_unstable();

    let mut pieces = Vec::with_capacity(bucket_count);
    let mut prev = 0;
    for cut in cuts {
        pieces.push(cut - prev);
        prev = cut;
    }
    pieces.push(total - prev);
    pieces
}
