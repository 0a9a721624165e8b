use std::{fs, path::PathBuf, process::ExitCode, time::{SystemTime, UNIX_EPOCH}};

use goray::{config::RenderConfig, gradient::gradient, Canvas};
use log::{error, info};

struct Args {
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: goray [--config <file.json>] [--output <file.png>]");
            return ExitCode::FAILURE;
        }
    };

    let secs = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
    match run(args, secs) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, unix_seconds: u64) -> goray::Result<PathBuf> {
    let config = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)?,
        None => RenderConfig::default(),
    };
    let output = args.output.unwrap_or_else(|| config.output_path(unix_seconds));
    if let Some(dir) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    info!("rendering {}x{} gradient", config.width, config.height);
    let mut canvas = Canvas::new(config.width, config.height)?;
    canvas.each_pixel(gradient(config.width, config.height, config.blue));
    canvas.save(&output)?;
    Ok(output)
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Args, String> {
    let mut parsed = Args { config: None, output: None };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => parsed.config = Some(args.next().ok_or("missing value for --config")?.into()),
            "--output" => parsed.output = Some(args.next().ok_or("missing value for --output")?.into()),
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::tempdir;

    use super::{parse_args, run, Args};

    fn args(list: &[&str]) -> Result<Args, String> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_both_flags() {
        let parsed = args(&["--config", "render.json", "--output", "out/a.png"]).unwrap();
        assert_eq!(parsed.config.unwrap().to_str(), Some("render.json"));
        assert_eq!(parsed.output.unwrap().to_str(), Some("out/a.png"));

        let parsed = args(&[]).unwrap();
        assert!(parsed.config.is_none() && parsed.output.is_none());
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(args(&["--output"]).err().unwrap(), "missing value for --output");
        assert_eq!(args(&["--config"]).err().unwrap(), "missing value for --config");
        assert_eq!(args(&["--width", "10"]).err().unwrap(), "unknown argument: --width");
    }

    #[test]
    fn timestamped_output_in_created_directory() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("renders").join("nested");
        let config = dir.path().join("config.json");
        fs::write(&config, format!(r#"{{ "width": 8, "height": 4, "output_dir": {:?} }}"#, out_dir)).unwrap();

        let output = run(Args { config: Some(config), output: None }, 1700000000).unwrap();
        assert_eq!(output, out_dir.join("1700000000.png"));
        assert_eq!(image::open(&output).unwrap().to_rgba8().dimensions(), (8, 4));
    }

    #[test]
    fn explicit_output_creates_parent() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("a").join("b").join("gradient.png");
        let written = run(Args { config: None, output: Some(output.clone()) }, 0).unwrap();
        assert_eq!(written, output);
        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (400, 200));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 100, 255]);
    }
}
