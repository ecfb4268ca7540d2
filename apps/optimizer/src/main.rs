use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use optimizer::intake::{IntakeController, Slot};
use optimizer::views::console::ConsoleView;
use optimizer::views::{DownloadKind, ViewPorts};
use optimizer::{Config, HttpOptimizationService, SelectedFile, SubmissionOrchestrator, SubmitOptions};

#[derive(Parser, Debug)]
#[command(name = "optimizer", version, about = "Submit a resume and job description for optimization")]
struct Cli {
    #[arg(long, help = "Resume file (PDF, DOCX or TXT)")]
    resume: PathBuf,
    #[arg(long, help = "Job description file (TXT, DOCX or PDF)")]
    job_file: Option<PathBuf>,
    #[arg(long, help = "Job description text; overrides text read from --job-file")]
    job_text: Option<String>,
    #[arg(long, default_value = "modern")]
    template: String,
    #[arg(long, default_value = "technology")]
    industry: String,
    #[arg(long, default_value_t = false)]
    download_report: bool,
    #[arg(long, default_value_t = false)]
    download_resume: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Resume Optimizer v{}", env!("CARGO_PKG_VERSION"));
    info!("Optimization endpoint: {}", config.endpoint);

    let views = ViewPorts::shared(Arc::new(ConsoleView::stdout()));
    let service = HttpOptimizationService::new(config.endpoint.clone(), config.request_timeout)?;
    let mut orchestrator = SubmissionOrchestrator::new(Arc::new(service), views.clone(), &config);
    let mut intake = IntakeController::new(views);

    let resume = SelectedFile::from_path(&cli.resume).await?;
    intake.on_file_selected(Slot::Resume, resume);

    if let Some(path) = &cli.job_file {
        let job = SelectedFile::from_path(path).await?;
        if let Some(pending) = intake.on_file_selected(Slot::JobDescription, job) {
            let decoded = pending
                .read()
                .await
                .context("failed to decode job description file")?;
            intake.apply_decoded(decoded);
        }
    }

    if let Some(text) = cli.job_text {
        intake.on_job_text_input(text);
    }

    let options = SubmitOptions {
        template: cli.template,
        industry: cli.industry,
    };

    if let Err(e) = orchestrator.submit(&intake, &options).await {
        bail!("optimization failed: {e}");
    }

    if cli.download_report {
        orchestrator.download(DownloadKind::Report);
    }
    if cli.download_resume {
        orchestrator.download(DownloadKind::OptimizedResume);
    }

    Ok(())
}
