use std::{
    io::{Write, stdout},
    time::Instant,
};

use log::debug;

use crate::{
    core::{bounds::terminal_width, data::read_series_from_path, error::ChartError},
    render::plot,
};

use super::parse::{ChartArgs, DemoArgs, PlotArgs};

fn draw(series: &[f64], chart: &ChartArgs) -> Result<(), ChartError> {
    let cfg = chart.config(terminal_width)?;
    let t_render = Instant::now();
    let text = plot(series, &cfg, chart.title.as_deref())?;
    debug!(
        "render: {} µs   ({} samples)",
        t_render.elapsed().as_micros(),
        series.len()
    );
    let mut term = stdout().lock();
    writeln!(term, "{text}")?;
    term.flush()?;
    Ok(())
}

pub fn plot_file(a: &PlotArgs) -> Result<(), ChartError> {
    // Bounds are checked before any input is read.
    a.chart.config(terminal_width)?;

    let t_ingest = Instant::now();
    let series = read_series_from_path(&a.file)?;
    debug!(
        "ingest: {} µs   ({} samples)",
        t_ingest.elapsed().as_micros(),
        series.len()
    );
    draw(&series, &a.chart)
}

#[allow(clippy::cast_precision_loss)]
pub fn demo(a: &DemoArgs) -> Result<(), ChartError> {
    let step = std::f64::consts::TAU / a.period;
    let series: Vec<f64> = (0..a.steps)
        .map(|i| a.amplitude * (i as f64 * step).sin())
        .collect();
    draw(&series, &a.chart)
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "box-chart";
    println!(
        "
Example invocations
-------------------
• From a file      : {bin} plot readings.txt
• From stdin       : seq 1 20 | {bin} plot
• Fixed height     : {bin} plot readings.txt --height 10
• Fixed bounds     : {bin} plot readings.txt --minimum 0 --maximum 100
• Last N columns   : {bin} plot readings.txt --width 60
• Terminal width   : {bin} plot readings.txt --fit
• Label format     : {bin} plot readings.txt --format \"{{:8.3f}} \" --offset 0
• Titled           : {bin} plot readings.txt --title \"Load average\"
• Sine wave        : {bin} demo --steps 200 --period 40 --height 12
• Diagnostics      : {bin} plot readings.txt --debug
"
    );
}
