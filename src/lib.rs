//! # Fingerbox
//!
//! Finger-jointed box generator for laser cutters. Given the outer
//! dimensions of a box and the material thickness, it computes the six
//! interlocking panels, lays them out flat and exports them as an SVG cut
//! sheet.
//!
//! ## Architecture
//!
//! Fingerbox is organized as a workspace with multiple crates:
//!
//! 1. **fingerbox-camtools** - Box geometry, panel layout and SVG export
//! 2. **fingerbox-settings** - Persisted configuration (JSON/TOML)
//! 3. **fingerbox** - Command-line binary that integrates both crates

pub mod cli;

pub use fingerbox_camtools::{
    export_filename, export_svg, export_svg_with, generate_box, write_svg, BoxLayout,
    BoxParameters, BoxSummary, Bounds, CamToolError, EdgeJoint, EdgeStyle, FingerJointSettings,
    Hole, Panel, PanelId, ParameterError, Point, SvgOptions,
};

pub use fingerbox_settings::{Config, ConfigError, ExportSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr so the cut sheet on stdout stays clean
/// - RUST_LOG environment variable support
/// - `info` by default, `debug` when `verbose` is set
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .with_line_number(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
