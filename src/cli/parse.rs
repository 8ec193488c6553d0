use clap::{Args, Parser, Subcommand};

use crate::core::{config::Config, error::PlotError};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "box-chart",
    about = "Line charts of numeric series drawn with box-drawing characters"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,

    /// Emit scale and timing diagnostics on stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot numbers read from a file or stdin
    Plot(PlotArgs),
    /// Plot a sampled sine wave
    Demo(DemoArgs),
    /// Print example invocations
    Examples,
}

/// Options shared by every chart-drawing subcommand.
#[derive(Args, Debug, Default)]
pub struct ChartArgs {
    /// Lower bound of the value axis (smallest sample if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub minimum: Option<f64>,
    /// Upper bound of the value axis (largest sample if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub maximum: Option<f64>,

    /// Rows, title line included
    #[arg(short = 'H', long)]
    pub height: Option<usize>,
    /// Total columns; older samples are dropped to fit
    #[arg(short, long, conflicts_with = "fit")]
    pub width: Option<usize>,
    /// Use the terminal width as `--width`
    #[arg(long)]
    pub fit: bool,

    /// Label template, e.g. "{:8.2f} "
    #[arg(short, long)]
    pub format: Option<String>,
    /// Spaces in front of every label
    #[arg(short, long)]
    pub offset: Option<usize>,

    /// Title centred above the chart
    #[arg(short, long)]
    pub title: Option<String>,
}

impl ChartArgs {
    /// `terminal_width` is only consulted with `--fit`.
    pub fn config(&self, terminal_width: impl FnOnce() -> usize) -> Result<Config, PlotError> {
        let mut b = Config::builder();
        if let Some(v) = self.minimum {
            b = b.minimum(v);
        }
        if let Some(v) = self.maximum {
            b = b.maximum(v);
        }
        if let Some(rows) = self.height {
            b = b.height(rows);
        }
        if let Some(cols) = self.width {
            b = b.width(cols);
        } else if self.fit {
            b = b.width(terminal_width());
        }
        if let Some(t) = &self.format {
            b = b.format(t.as_str());
        }
        if let Some(n) = self.offset {
            b = b.offset(n);
        }
        b.build()
    }
}

/// `box-chart plot …`
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Input path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    #[command(flatten)]
    pub chart: ChartArgs,
}

/// `box-chart demo …`
#[derive(Args, Debug)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 120)]
    pub steps: usize,
    /// Samples per full wave
    #[arg(long, default_value_t = 60.0)]
    pub period: f64,
    #[arg(long, default_value_t = 5.0)]
    pub amplitude: f64,

    #[command(flatten)]
    pub chart: ChartArgs,
}
