//! cabtrace — turn CRAWDAD San Francisco cab traces into a replay dataset.
//!
//! ```text
//! cabtrace <DIRECTORY> limits
//! cabtrace <DIRECTORY> generate --min-time 1211018404 --max-time 1211022004 --time-delta 1000
//! ```
//!
//! The second form produces the first hour of the dataset (328 cabs) at a
//! 1 s cadence, remapped into the CARLA frame, under `/tmp/crawdad_processed`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use ct_core::{TimeWindow, Timestamp};
use ct_output::{CsvDatasetWriter, compute_limits, export_dataset};
use ct_trace::{PipelineBuilder, PipelineConfig, run, scan_directory};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Print global coordinate and time bounds.
    Limits,
    /// Write one normalized trace file per cab.
    Generate,
}

#[derive(Parser, Debug)]
#[command(name = "cabtrace", version, about)]
struct Args {
    /// Directory holding `new_<cab>.txt` trace files.
    directory: PathBuf,

    #[arg(value_enum)]
    mode: Mode,

    /// Drop fixes before this Unix time (seconds).
    #[arg(long, value_name = "UNIX_SECS")]
    min_time: Option<i64>,

    /// Drop fixes after this Unix time (seconds).
    #[arg(long, value_name = "UNIX_SECS")]
    max_time: Option<i64>,

    /// Fill gaps between fixes with points this many milliseconds apart.
    /// Zero or negative disables gap filling.
    #[arg(long, value_name = "MILLIS", allow_negative_numbers = true)]
    time_delta: Option<i64>,

    /// Where `generate` writes its files.
    #[arg(long, default_value = "/tmp/crawdad_processed")]
    output: PathBuf,

    /// Keep raw latitude/longitude instead of remapping into the CARLA frame.
    #[arg(long)]
    raw: bool,
}

impl Args {
    fn pipeline_config(&self) -> Result<PipelineConfig> {
        let window = TimeWindow::new(unix_secs(self.min_time)?, unix_secs(self.max_time)?);
        // A non-positive delta never yields synthetic points, so treat it as off.
        let cadence_ms = self.time_delta.filter(|&ms| ms > 0);
        let mut builder = PipelineBuilder::new().window(window).cadence_ms(cadence_ms);
        if self.raw {
            builder = builder.raw();
        }
        builder.build().context("invalid configuration")
    }
}

fn unix_secs(secs: Option<i64>) -> Result<Option<Timestamp>> {
    secs.map(|s| {
        Timestamp::from_unix_secs(s).with_context(|| format!("time {s}s is out of range"))
    })
    .transpose()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.pipeline_config()?;

    let raw = scan_directory(&args.directory)
        .with_context(|| format!("loading traces from {}", args.directory.display()))?;
    info!("loaded {} cabs", raw.len());

    let fleet = run(raw, &config)?;

    match args.mode {
        Mode::Limits => match compute_limits(&fleet) {
            Some(limits) => println!("{limits}"),
            None => println!("Total traces: 0"),
        },
        Mode::Generate => {
            let mut writer = CsvDatasetWriter::new(&args.output)
                .with_context(|| format!("creating {}", args.output.display()))?;
            export_dataset(&fleet, &mut writer)
                .with_context(|| format!("writing dataset to {}", args.output.display()))?;
            println!("Data generated in {}", args.output.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn unknown_mode_rejected() {
        assert!(Args::try_parse_from(["cabtrace", "data", "summarize"]).is_err());
    }

    #[test]
    fn first_hour_invocation() {
        let args = Args::try_parse_from([
            "cabtrace", "data", "generate",
            "--min-time", "1211018404",
            "--max-time", "1211022004",
            "--time-delta", "1000",
        ])
        .unwrap();
        assert_eq!(args.mode, Mode::Generate);
        assert_eq!(args.output, PathBuf::from("/tmp/crawdad_processed"));

        let config = args.pipeline_config().unwrap();
        assert_eq!(config.window.min, Some(Timestamp(1_211_018_404_000)));
        assert_eq!(config.window.max, Some(Timestamp(1_211_022_004_000)));
        assert_eq!(config.cadence.map(|c| c.millis()), Some(1_000));
        assert!(config.remap.is_some());
    }

    #[test]
    fn raw_and_invalid_options() {
        let args = Args::try_parse_from(["cabtrace", "data", "limits", "--raw"]).unwrap();
        assert!(args.pipeline_config().unwrap().remap.is_none());

        let args = Args::try_parse_from(["cabtrace", "data", "limits", "--min-time", "9223372036854775807"])
            .unwrap();
        assert!(args.pipeline_config().is_err());
    }

    #[test]
    fn non_positive_time_delta_disables_gap_filling() {
        for delta in ["0", "-1000"] {
            let args = Args::try_parse_from(["cabtrace", "data", "generate", "--time-delta", delta]).unwrap();
            assert_eq!(args.time_delta.map(|d| d.to_string()).as_deref(), Some(delta));
            assert!(args.pipeline_config().unwrap().cadence.is_none());
        }
    }
}
