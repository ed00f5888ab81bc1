//! Speaking-pace score: words-per-minute mapped through a five-band step
//! function. Discrete classification by design, mirroring pedagogical
//! pacing guidance; no interpolation between bands.

use crate::normalize::safe_ratio;

/// Words per minute, or 0 when the duration is zero.
pub fn words_per_minute(words: f64, duration_mins: f64) -> f64 {
    safe_ratio(words, duration_mins)
}

/// Band lookup: 100 for [120,160]; 85 for [100,120) and (160,180];
/// 70 for [80,100) and (180,200]; 50 otherwise. Bands are symmetric
/// around the 120-160 optimum.
pub fn band(wpm: f64) -> f64 {
    if (120.0..=160.0).contains(&wpm) {
        100.0
    } else if (100.0..120.0).contains(&wpm) || (wpm > 160.0 && wpm <= 180.0) {
        85.0
    } else if (80.0..100.0).contains(&wpm) || (wpm > 180.0 && wpm <= 200.0) {
        70.0
    } else {
        50.0
    }
}

/// Pace score for a speech sample. Zero duration yields 0, not the
/// else-band 50, so an absent sample reads as no signal.
pub fn score(words: f64, duration_mins: f64) -> f64 {
    if duration_mins <= 0.0 || !duration_mins.is_finite() {
        return 0.0;
    }
    band(words_per_minute(words, duration_mins))
}
