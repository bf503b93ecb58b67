use crate::config::*;
use crate::efficiency::{
    control_complexity_multiplier, endurance_pool, output_samples, uses_curve, Inputs,
};
use crate::markers::{select_sample_points, SamplePoint};

/// Everything needed to draw one chart for one set of inputs
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub inputs: Inputs,
    pub endurance_pool: f64,
    pub multiplier: f64,
    pub adjusted_pool: f64,
    pub outputs: Vec<f64>,
    pub uses: Vec<f64>,
    pub samples: [SamplePoint; 3],
    pub max_uses: f64,
    pub min_uses: f64,
}

/// Build the full chart model from scratch
pub fn compute_chart(inputs: Inputs) -> ChartModel {
    let endurance_pool = endurance_pool(inputs.endurance_level());
    let multiplier = control_complexity_multiplier(inputs.control(), inputs.complexity());
    let adjusted_pool = endurance_pool * multiplier;

    let outputs = output_samples(inputs.stat_level());
    let uses = uses_curve(adjusted_pool, &outputs);
    let samples = select_sample_points(&outputs, &uses, inputs.stat_level());

    let max_uses = uses.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_uses = uses.iter().copied().fold(f64::INFINITY, f64::min);

    ChartModel {
        inputs,
        endurance_pool,
        multiplier,
        adjusted_pool,
        outputs,
        uses,
        samples,
        max_uses,
        min_uses,
    }
}

impl ChartModel {
    /// Upper y bound; never below `MIN_VISUAL_Y`
    pub fn y_limit(&self) -> f64 {
        (self.max_uses * Y_HEADROOM).max(MIN_VISUAL_Y)
    }

    pub fn x_range(&self) -> (f64, f64) {
        (X_AXIS_MIN, X_AXIS_MAX)
    }

    /// Plot-space anchor of the summary box
    pub fn summary_anchor(&self) -> [f64; 2] {
        [SUMMARY_BOX_X, self.y_limit() * SUMMARY_BOX_Y_FRACTION]
    }

    pub fn title(&self) -> String {
        format!(
            "Stat={}, Control={}, Complexity={}, Endurance={}",
            self.inputs.stat_level(),
            self.inputs.control(),
            self.inputs.complexity(),
            self.endurance_pool.trunc() as i64
        )
    }

    pub fn summary_text(&self) -> String {
        format!(
            "Max Uses: {:.1}x\nMin Uses: {:.1}x\nAdjusted Pool: {:.1}",
            self.max_uses, self.min_uses, self.adjusted_pool
        )
    }

    /// `(output, uses)` pairs along the curve
    pub fn curve_points(&self) -> Vec<[f64; 2]> {
        self.outputs
            .iter()
            .zip(&self.uses)
            .map(|(&output, &uses)| [output, uses])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::SampleKind;

    #[test]
    fn default_scenario() {
        let chart = compute_chart(Inputs::default());

        assert!((chart.endurance_pool - 327.6923).abs() < 1e-3);
        assert_eq!(chart.multiplier, 1.0);
        assert_eq!(chart.adjusted_pool, chart.endurance_pool);
        assert!((chart.uses[0] - 327.6923).abs() < 1e-3);
        assert!((chart.uses[299] - 25.2071).abs() < 1e-3);
        assert_eq!(chart.max_uses, chart.uses[0]);
        assert_eq!(chart.min_uses, chart.uses[299]);
    }

    #[test]
    fn default_scenario_strings() {
        let chart = compute_chart(Inputs::default());

        assert_eq!(chart.title(), "Stat=13, Control=11, Complexity=0, Endurance=327");
        assert_eq!(
            chart.summary_text(),
            "Max Uses: 327.7x\nMin Uses: 25.2x\nAdjusted Pool: 327.7"
        );
        assert!((chart.y_limit() - 327.6923 * 1.1).abs() < 1e-3);
        assert_eq!(chart.x_range(), (0.0, 13.0));
    }

    #[test]
    fn low_usage_keeps_minimum_y_limit() {
        // pool 20, control 0 against complexity 13 zeroes the multiplier
        let chart = compute_chart(Inputs::new(0, 0, 13, 13).unwrap());
        assert_eq!(chart.adjusted_pool, 0.0);
        assert_eq!(chart.max_uses, 0.0);
        assert_eq!(chart.y_limit(), MIN_VISUAL_Y);
        assert_eq!(chart.summary_anchor(), [1.0, 17.0]);
    }

    #[test]
    fn multiplier_scales_pool() {
        let chart = compute_chart(Inputs::new(13, 5, 10, 13).unwrap());
        assert_eq!(chart.endurance_pool, 520.0);
        assert_eq!(chart.multiplier, 0.5);
        assert_eq!(chart.adjusted_pool, 260.0);
        assert_eq!(chart.title(), "Stat=13, Control=5, Complexity=10, Endurance=520");
    }

    #[test]
    fn curve_is_non_increasing() {
        let chart = compute_chart(Inputs::new(3, 2, 9, 7).unwrap());
        assert!(chart.uses.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(chart.curve_points().len(), OUTPUT_SAMPLE_COUNT);
        assert_eq!(chart.curve_points()[0], [1.0, chart.uses[0]]);
    }

    #[test]
    fn stat_one_renders_overlapping_markers() {
        let chart = compute_chart(Inputs::new(8, 11, 0, 1).unwrap());
        let kinds: Vec<_> = chart.samples.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![SampleKind::Burst, SampleKind::Mid, SampleKind::Fade]);
        assert!(chart.samples.iter().all(|p| p.index == 0 && p.output == 1.0));
        assert_eq!(chart.max_uses, chart.min_uses);
    }
}
