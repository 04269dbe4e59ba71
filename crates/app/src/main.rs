use std::{
    fs::File,
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use clap::Parser;

use crate::{
    error::Result,
    jobs::Costed,
    settings::{Args, Settings},
};

mod error;
mod jobs;
mod report;
mod settings;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let settings = match Settings::new(&args) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("failed to load settings: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(format!(
            "costing={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let today = chrono::Local::now().date_naive();
    let results = jobs::run_all(args.inputs, &settings, today).await;

    let mut failed = false;
    for result in results {
        match result.and_then(|costed| emit(&costed, &settings)) {
            Ok(()) => {}
            Err(err) => {
                tracing::error!("{err}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn emit(costed: &Costed, settings: &Settings) -> Result<()> {
    let format = settings.report.format;
    match &settings.report.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let path = jobs::report_path(dir, costed.year, format.extension());
            let mut out = BufWriter::new(File::create(&path)?);
            report::write(&costed.report, format, &mut out)?;
            out.flush()?;
            tracing::info!("wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            report::write(&costed.report, format, &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}
