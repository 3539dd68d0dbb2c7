//! The host page structure a carousel is mounted on.
//!
//! The controller never creates or removes elements. It only writes the
//! track transform and the `active` marker of the indicator dots.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderMarkup {
    pub container: bool,
    pub track: Option<Track>,
    pub slides: Vec<Slide>,
    pub indicators: Vec<Indicator>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    /// `None` until the first navigation; renders as no offset
    pub transform: Option<TrackTransform>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slide {
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Indicator {
    /// Raw value of the `data-slide` attribute
    pub data_slide: Option<String>,
    pub active: bool,
}

/// Horizontal translation of the track, in percent of the track width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackTransform {
    pub translate_x_percent: f32,
}

impl TrackTransform {
    /// Offset that brings `index` into view when every slide takes
    /// `100 / slide_count` percent of the track.
    pub fn for_index(index: usize, slide_count: usize) -> Self {
        let percent = -((index as f32) * 100.0 / slide_count as f32);
        Self {
            // avoid rendering "-0"
            translate_x_percent: if percent == 0.0 { 0.0 } else { percent },
        }
    }
}

impl fmt::Display for TrackTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translateX({}%)", self.translate_x_percent)
    }
}

impl SliderMarkup {
    /// Complete markup for `count` slides with index-aligned indicators.
    pub fn for_slide_count(count: usize) -> Self {
        Self {
            container: true,
            track: Some(Track::default()),
            slides: (0..count)
                .map(|i| Slide { label: format!("Slide {}", i + 1) })
                .collect(),
            indicators: (0..count)
                .map(|i| Indicator { data_slide: Some(i.to_string()), active: false })
                .collect(),
        }
    }

    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slides: Vec<Slide> = labels.into_iter().map(|l| Slide { label: l.into() }).collect();
        let mut markup = Self::for_slide_count(slides.len());
        markup.slides = slides;
        markup
    }

    pub fn active_indicators(&self) -> impl Iterator<Item = usize> + '_ {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, dot)| dot.active)
            .map(|(i, _)| i)
    }

    pub fn track_offset_percent(&self) -> f32 {
        self.track
            .as_ref()
            .and_then(|t| t.transform)
            .map(|t| t.translate_x_percent)
            .unwrap_or(0.0)
    }
}

/// Parses an indicator attribute the way `parseInt(value, 10)` does:
/// leading whitespace, an optional sign, then at least one decimal digit.
/// Trailing garbage is ignored. Returns `None` where `parseInt` gives NaN.
pub fn parse_slide_index(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate absurdly long numbers; they are out of range either way
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
