use anyhow::Result;
use clap::Parser;

use mockdb::config::{Config, OutputFormat};
use mockdb::fixture::build_fixture_with;
use mockdb::logger::{error, info, init};
use mockdb::summary::removal_notice;

fn main() -> Result<()> {
    let config = Config::parse();
    init(config.log_level, config.log_file.as_deref())?;

    let result = run(&config);
    // stderr already gets the error from main's return
    if let (Err(err), Some(_)) = (&result, &config.log_file) {
        error(&format!("fatal error: {:?}", err));
    }
    result
}

fn run(config: &Config) -> Result<()> {
    let target = config.target_path()?;
    info(&format!("building fixture at {}", target.display()));

    let text = config.format == OutputFormat::Text;
    let summary = build_fixture_with(&target, |path| {
        if text {
            println!("{}", removal_notice(path));
        }
    })?;
    match config.format {
        OutputFormat::Text => print!("{}", summary.render_text()),
        OutputFormat::Yaml => print!("{}", summary.render_yaml()?),
    }
    Ok(())
}
