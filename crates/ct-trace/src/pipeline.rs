//! End-to-end per-vehicle processing: sort, filter, resample.

use log::debug;

use ct_core::regions::{CARLA_DOMAIN, SF_REGION};
use ct_core::{BoundingBox, Cadence, Fix, OutputPoint, Remapper, TimeWindow};

use crate::{Fleet, Resampler, TraceResult, filter_trace};

/// Everything the core needs to turn raw fixes into output points.
///
/// Build with [`PipelineBuilder`], which validates the combination.  A config
/// assembled by hand is checked again by [`process_vehicle`] and [`run`].
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Fixes outside this box are re-anchored or dropped.
    pub region:  BoundingBox,
    pub window:  TimeWindow,
    /// `None` disables gap filling.
    pub cadence: Option<Cadence>,
    /// `None` keeps raw latitude/longitude in the output.
    pub remap:   Option<Remapper>,
}

impl PipelineConfig {
    /// Reject a region with non-positive span or a window whose `min` is
    /// after its `max`.
    ///
    /// `Cadence` and `Remapper` can only be constructed valid, so they need
    /// no re-check here.
    pub fn validate(&self) -> TraceResult<()> {
        self.region.validate()?;
        self.window.validate()?;
        Ok(())
    }

    pub fn resampler(&self) -> Resampler {
        Resampler::new(self.cadence, self.remap)
    }
}

/// Fluent builder for [`PipelineConfig`].
///
/// | Method               | Default                                  |
/// |----------------------|------------------------------------------|
/// | `.region(b)`         | `SF_REGION`                              |
/// | `.window(min, max)`  | unbounded                                |
/// | `.cadence_ms(ms)`    | no gap filling                           |
/// | `.remap(src, dst)`   | `SF_REGION` → `CARLA_DOMAIN`             |
/// | `.raw()`             | (disables the remap)                     |
#[derive(Clone, Debug)]
pub struct PipelineBuilder {
    region:     BoundingBox,
    window:     TimeWindow,
    cadence_ms: Option<i64>,
    remap:      Option<(BoundingBox, BoundingBox)>,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            region:     SF_REGION,
            window:     TimeWindow::UNBOUNDED,
            cadence_ms: None,
            remap:      Some((SF_REGION, CARLA_DOMAIN)),
        }
    }
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region: BoundingBox) -> Self {
        self.region = region;
        self
    }

    pub fn window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }

    pub fn cadence_ms(mut self, ms: Option<i64>) -> Self {
        self.cadence_ms = ms;
        self
    }

    pub fn remap(mut self, source: BoundingBox, target: BoundingBox) -> Self {
        self.remap = Some((source, target));
        self
    }

    pub fn raw(mut self) -> Self {
        self.remap = None;
        self
    }

    /// Validate and assemble the configuration.
    ///
    /// # Errors
    ///
    /// - region with non-positive span
    /// - window whose `min` is after its `max`
    /// - non-positive cadence
    /// - degenerate remap source or target box
    pub fn build(self) -> TraceResult<PipelineConfig> {
        let cadence = self.cadence_ms.map(Cadence::from_millis).transpose()?;
        let remap = self
            .remap
            .map(|(source, target)| Remapper::new(source, target))
            .transpose()?;

        let config = PipelineConfig { region: self.region, window: self.window, cadence, remap };
        config.validate()?;
        Ok(config)
    }
}

/// Sort, filter, and resample one vehicle's fixes.
///
/// The sort is stable, so fixes sharing a timestamp keep their input order.
pub fn process_vehicle(fixes: Vec<Fix>, config: &PipelineConfig) -> TraceResult<Vec<OutputPoint>> {
    config.validate()?;
    Ok(resample_vehicle(fixes, config))
}

/// Process every vehicle in `raw`, dropping those left with no points.
///
/// The config is validated once, before any vehicle is touched.
pub fn run(raw: Fleet<Vec<Fix>>, config: &PipelineConfig) -> TraceResult<Fleet<Vec<OutputPoint>>> {
    config.validate()?;

    let step = |name: &str, fixes: Vec<Fix>| {
        let input = fixes.len();
        let points = resample_vehicle(fixes, config);
        debug!("{name}: {input} fixes -> {} points", points.len());
        points
    };

    #[cfg(not(feature = "parallel"))]
    let processed = raw.map(step);
    #[cfg(feature = "parallel")]
    let processed = raw.par_map(step);

    Ok(processed.retain(|name, points| {
        if points.is_empty() {
            debug!("{name}: no fixes survived filtering, dropped");
        }
        !points.is_empty()
    }))
}

fn resample_vehicle(mut fixes: Vec<Fix>, config: &PipelineConfig) -> Vec<OutputPoint> {
    fixes.sort_by_key(|f| f.time);
    let kept = filter_trace(&fixes, config.region, config.window);
    config.resampler().resample(&kept)
}
