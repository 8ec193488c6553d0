use std::io::Write;

use box_chart::{Config, plot, read_series, read_series_from_path};

#[test]
fn ingested_numbers_plot_like_literals() {
    let series = read_series("1\n3\n10\n7\n".as_bytes()).unwrap();
    let cfg = Config::builder().height(4).build().unwrap();
    assert_eq!(
        plot(&series, &cfg, None).unwrap(),
        plot(&[1.0, 3.0, 10.0, 7.0], &cfg, None).unwrap()
    );
}

#[test]
fn reads_from_a_file_path() {
    let path = std::env::temp_dir().join(format!("box-chart-ingest-{}.txt", std::process::id()));
    {
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "# samples").unwrap();
        writeln!(f, "−1.5, 2; 4").unwrap();
    }
    let series = read_series_from_path(path.to_str().unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(series, vec![-1.5, 2.0, 4.0]);
}

#[test]
fn missing_file_is_an_error() {
    let err = read_series_from_path("/definitely/not/here.txt").unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}
