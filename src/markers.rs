use crate::config::*;

/// Named colors used on the chart, as sRGB triples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartColor {
    Crimson,
    Orange,
    Green,
    Purple,
}

impl ChartColor {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            ChartColor::Crimson => [220, 20, 60],
            ChartColor::Orange => [255, 165, 0],
            ChartColor::Green => [0, 128, 0],
            ChartColor::Purple => [128, 0, 128],
        }
    }
}

/// Which of the three annotated positions a point is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Burst,
    Mid,
    Fade,
}

impl SampleKind {
    pub fn label(self) -> &'static str {
        match self {
            SampleKind::Burst => "Burst (High Output)",
            SampleKind::Mid => "Mid Output",
            SampleKind::Fade => "Fade (Low Output)",
        }
    }

    pub fn color(self) -> ChartColor {
        match self {
            SampleKind::Burst => ChartColor::Orange,
            SampleKind::Mid => ChartColor::Green,
            SampleKind::Fade => ChartColor::Purple,
        }
    }
}

/// An annotated point on the uses curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub kind: SampleKind,
    pub index: usize,
    pub output: f64,
    pub uses: f64,
}

impl SamplePoint {
    /// Legend text, e.g. `Burst (High Output): 26.5x @ 12.4`
    pub fn legend_label(&self) -> String {
        format!("{}: {:.1}x @ {:.1}", self.kind.label(), self.uses, self.output)
    }
}

/// Indices of the burst, mid and fade points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleIndices {
    pub burst: usize,
    pub mid: usize,
    pub fade: usize,
}

/// First index whose sample reaches `threshold`, or 0 when none does
pub fn first_index_at_or_above(samples: &[f64], threshold: f64) -> usize {
    for (index, &value) in samples.iter().enumerate() {
        if value >= threshold {
            return index;
        }
    }
    0
}

pub fn sample_indices(outputs: &[f64], stat_level: u8) -> SampleIndices {
    let stat = f64::from(stat_level);
    let burst = first_index_at_or_above(outputs, stat * BURST_THRESHOLD);
    let fade = first_index_at_or_above(outputs, stat * FADE_THRESHOLD);
    SampleIndices {
        burst,
        mid: (burst + fade) / 2,
        fade,
    }
}

/// Burst, mid and fade points, in that order.
///
/// `outputs` and `uses` must be the same non-empty length; indices found on
/// `outputs` are read back from both.
pub fn select_sample_points(outputs: &[f64], uses: &[f64], stat_level: u8) -> [SamplePoint; 3] {
    let indices = sample_indices(outputs, stat_level);
    let point = |kind: SampleKind, index: usize| SamplePoint {
        kind,
        index,
        output: outputs[index],
        uses: uses[index],
    };
    [
        point(SampleKind::Burst, indices.burst),
        point(SampleKind::Mid, indices.mid),
        point(SampleKind::Fade, indices.fade),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::efficiency::{output_samples, uses_curve};

    #[test]
    fn first_index_falls_back_to_zero() {
        assert_eq!(first_index_at_or_above(&[1.0, 2.0, 3.0], 2.5), 2);
        assert_eq!(first_index_at_or_above(&[1.0, 2.0, 3.0], 0.5), 0);
        assert_eq!(first_index_at_or_above(&[1.0, 2.0, 3.0], 9.0), 0);
        assert_eq!(first_index_at_or_above(&[], 1.0), 0);
    }

    #[test]
    fn stat_thirteen_crossings() {
        let outputs = output_samples(13);
        let indices = sample_indices(&outputs, 13);

        assert!(outputs[indices.burst] >= 13.0 * 0.95);
        assert!(outputs[indices.burst - 1] < 13.0 * 0.95);
        // every sample is already above 0.65
        assert_eq!(indices.fade, 0);
        assert_eq!(indices.mid, (indices.burst + indices.fade) / 2);
        for index in [indices.burst, indices.mid, indices.fade] {
            assert!(index < OUTPUT_SAMPLE_COUNT);
        }
    }

    #[test]
    fn burst_index_for_stat_thirteen_is_first_sample_past_threshold() {
        let outputs = output_samples(13);
        // step = 12 / 299, need 1 + i * step >= 12.35
        let expected = outputs.iter().position(|&v| v >= 12.35).unwrap();
        assert_eq!(sample_indices(&outputs, 13).burst, expected);
        assert_eq!(expected, 283);
    }

    #[test]
    fn stat_one_collapses_all_markers() {
        let outputs = output_samples(1);
        let indices = sample_indices(&outputs, 1);
        assert_eq!(indices, SampleIndices { burst: 0, mid: 0, fade: 0 });
    }

    #[test]
    fn points_carry_labels_colors_and_values() {
        let outputs = output_samples(13);
        let uses = uses_curve(100.0, &outputs);
        let [burst, mid, fade] = select_sample_points(&outputs, &uses, 13);

        assert_eq!(burst.kind, SampleKind::Burst);
        assert_eq!(mid.kind.color(), ChartColor::Green);
        assert_eq!(fade.kind.label(), "Fade (Low Output)");
        assert_eq!(burst.output, outputs[burst.index]);
        assert_eq!(fade.uses, 100.0);
        assert!(burst.uses < mid.uses && mid.uses < fade.uses);
    }

    #[test]
    fn legend_label_uses_one_decimal() {
        let point = SamplePoint {
            kind: SampleKind::Mid,
            index: 0,
            output: 6.6789,
            uses: 49.06,
        };
        assert_eq!(point.legend_label(), "Mid Output: 49.1x @ 6.7");
    }
}
