use std::collections::HashMap;

use crate::CoreError;

/// Smallest rendered font size, matching the `f11` stylesheet class.
pub const DEFAULT_MIN_SIZE: u32 = 11;
/// Largest rendered font size, matching the `f48` stylesheet class.
pub const DEFAULT_MAX_SIZE: u32 = 48;

/// A selected word with its count and rendered size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedWord {
    pub word: String,
    pub count: u32,
    pub size: u32,
}

/// Linearly maps each selected word's count into `[min_size, max_size]`.
///
/// The count range is taken over the selected words only, not the full
/// vocabulary. Every selected word must appear in `counts`; a miss is a
/// contract breach and fails before any sizing happens.
pub fn map_sizes(
    selected: &[String],
    counts: &HashMap<String, u32>,
    min_size: u32,
    max_size: u32,
) -> Result<Vec<SizedWord>, CoreError> {
    if min_size > max_size {
        return Err(CoreError::InvertedSizeRange {
            min: min_size,
            max: max_size,
        });
    }

    let mut entries = Vec::with_capacity(selected.len());
    for word in selected {
        let count = counts
            .get(word)
            .copied()
            .ok_or_else(|| CoreError::MissingCount { word: word.clone() })?;
        entries.push((word.clone(), count));
    }

    let Some(count_min) = entries.iter().map(|(_, count)| *count).min() else {
        return Ok(Vec::new());
    };
    let count_max = entries
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(count_min);

    let sized = entries
        .into_iter()
        .map(|(word, count)| SizedWord {
            size: interpolate(count, count_min, count_max, min_size, max_size),
            word,
            count,
        })
        .collect();
    Ok(sized)
}

/// When every selected word shares one count the min-max ratio is undefined;
/// the whole cloud then renders at the midpoint size instead.
fn interpolate(count: u32, count_min: u32, count_max: u32, min_size: u32, max_size: u32) -> u32 {
    if count_max == count_min {
        return (min_size + max_size) / 2;
    }

    let span = (max_size - min_size) as f64;
    let ratio = (count - count_min) as f64 / (count_max - count_min) as f64;
    // `as` truncates toward zero, which is the rounding policy here.
    let size = (min_size as f64 + span * ratio) as u32;
    size.clamp(min_size, max_size)
}
