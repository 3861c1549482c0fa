//! Command-line front end.
//!
//! Parameters are resolved in three layers: built-in defaults, the
//! configuration file, then any flags given on the command line.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use fingerbox_camtools::tabbed_box::round3;
use fingerbox_camtools::{
    export_filename, export_svg_with, generate_box, BoxLayout, BoxParameters, EdgeStyle,
};
use fingerbox_settings::Config;

/// Output document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Laser cut sheet
    #[default]
    Svg,
    /// Panel geometry as JSON
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Parser, Debug, Default)]
#[clap(author, version, about = "Generate finger-jointed box cut sheets", long_about = None)]
pub struct Cli {
    /// Configuration file (.toml or .json)
    #[clap(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Outer width in mm
    #[clap(long)]
    pub width: Option<f64>,
    /// Outer depth in mm
    #[clap(long)]
    pub depth: Option<f64>,
    /// Outer height in mm
    #[clap(long)]
    pub height: Option<f64>,
    /// Material thickness in mm
    #[clap(long)]
    pub thickness: Option<f64>,
    /// Nominal finger width in mm
    #[clap(long)]
    pub finger_width: Option<f64>,
    /// Laser kerf in mm (recorded in the output only)
    #[clap(long)]
    pub kerf: Option<f64>,
    /// Hole inset in multiples of thickness
    #[clap(long)]
    pub edge_width: Option<f64>,
    /// Corner margin in multiples of finger width
    #[clap(long)]
    pub surrounding_spaces: Option<f64>,
    /// Joint play in mm (recorded in the output only)
    #[clap(long)]
    pub play: Option<f64>,
    /// Top edge style: finger, holes, flush-holes, open (or F, h, s, e)
    #[clap(long, value_name = "STYLE")]
    pub top: Option<EdgeStyle>,
    /// Bottom edge style: finger, holes, flush-holes, open (or F, h, s, e)
    #[clap(long, value_name = "STYLE")]
    pub bottom: Option<EdgeStyle>,

    /// Clamp out-of-range values instead of rejecting them
    #[clap(long)]
    pub clamp: bool,

    /// Write the output to this file
    #[clap(short, long, value_name = "PATH", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,
    /// Write the output into this directory under a generated name
    #[clap(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,
    /// Print the derived summary and panel table instead of a document
    #[clap(long)]
    pub summary: bool,

    /// Enable debug logging
    #[clap(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Explicit `--config`, else the platform default if it exists.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("loading config {}", path.display())),
            None => match Config::default_path() {
                Ok(path) => Config::load_or_default(&path)
                    .with_context(|| format!("loading config {}", path.display())),
                Err(e) => {
                    tracing::debug!("{e}, using built-in defaults");
                    Ok(Config::default())
                }
            },
        }
    }

    /// Config defaults with command-line overrides applied, then validated
    /// or clamped.
    pub fn box_parameters(&self, config: &Config) -> anyhow::Result<BoxParameters> {
        let mut params = config.box_defaults.clone();
        let fj = &mut params.finger_joint;

        override_with(&mut params.width, self.width);
        override_with(&mut params.depth, self.depth);
        override_with(&mut params.height, self.height);
        override_with(&mut params.thickness, self.thickness);
        override_with(&mut params.kerf, self.kerf);
        override_with(&mut fj.finger_width, self.finger_width);
        override_with(&mut fj.edge_width, self.edge_width);
        override_with(&mut fj.surrounding_spaces, self.surrounding_spaces);
        override_with(&mut fj.play, self.play);
        override_with(&mut params.top_edge, self.top);
        override_with(&mut params.bottom_edge, self.bottom);

        match params.validate() {
            Ok(()) => Ok(params),
            Err(e) if self.clamp => {
                tracing::warn!("{e}; clamping parameters into range");
                Ok(params.clamped())
            }
            Err(e) => Err(e).context("invalid box parameters (use --clamp to force)"),
        }
    }

    /// Where to write the document, if anywhere: `--output`, then
    /// `--output-dir`, then the configured export directory.
    pub fn output_path(&self, params: &BoxParameters, config: &Config) -> Option<PathBuf> {
        if let Some(path) = &self.output {
            return Some(path.clone());
        }
        let dir = self
            .output_dir
            .as_ref()
            .or(config.export.output_directory.as_ref());
        dir.map(|dir| {
            let name = Path::new(&export_filename(params)).with_extension(self.format.extension());
            dir.join(name)
        })
    }
}

fn override_with<T: Copy>(field: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *field = v;
    }
}

/// Run one invocation, printing to `out` whatever is not written to a file.
pub fn run<W: Write>(args: &Cli, out: &mut W) -> anyhow::Result<()> {
    let config = args.load_config()?;
    let params = args.box_parameters(&config)?;
    let layout = generate_box(&params);

    if args.summary {
        write_summary(out, &params, &layout)?;
        return Ok(());
    }

    let document = match args.format {
        OutputFormat::Svg => export_svg_with(&layout, &params, &config.export.svg_options()),
        OutputFormat::Json => layout.to_json()?,
    };

    match args.output_path(&params, &config) {
        Some(path) => {
            std::fs::write(&path, document)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), format = ?args.format, "wrote box layout");
        }
        None => {
            out.write_all(document.as_bytes())?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Human-readable overview of the inputs, derived values and panels.
pub fn write_summary<W: Write>(
    out: &mut W,
    params: &BoxParameters,
    layout: &BoxLayout,
) -> std::io::Result<()> {
    let summary = params.summary();
    writeln!(
        out,
        "Box {}x{}x{}mm, material {}mm",
        params.width, params.depth, params.height, params.thickness
    )?;
    writeln!(
        out,
        "Top: {}, bottom: {}",
        params.top_edge.description(),
        params.bottom_edge.description()
    )?;
    writeln!(out, "Fingers per height edge: {}", summary.height_fingers)?;
    writeln!(out, "Finger pitch: {}mm", summary.height_finger_pitch)?;
    writeln!(out, "Corner margin: {}mm", summary.margin)?;
    writeln!(out, "Hole inset: {}mm", summary.hole_inset)?;
    writeln!(out, "Side panel width: {}mm", summary.side_width)?;
    writeln!(
        out,
        "Sheet: {}x{}mm",
        round3(layout.bounds.width),
        round3(layout.bounds.height)
    )?;
    writeln!(out)?;
    writeln!(out, "{:<8} {:>10} {:>10} {:>6}", "Panel", "Width", "Height", "Holes")?;
    for panel in &layout.panels {
        writeln!(
            out,
            "{:<8} {:>10} {:>10} {:>6}",
            panel.label,
            round3(panel.width),
            round3(panel.height),
            panel.holes.len()
        )?;
    }
    Ok(())
}
