use std::fs::File;
use std::io::BufReader;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loomledger::config::Config;
use loomledger::core::{AppError, Result};
use loomledger::billing;
use loomledger::exports::{ExcelWriter, PdfWriter, ReportLayout, TableRenderer};
use loomledger::reconcile::Reconciler;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loomledger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    let bills_path = std::env::args().nth(1).ok_or_else(|| {
        AppError::validation("usage: loomledger <bills.json>")
    })?;

    tracing::info!("Loading bills from {}", bills_path);
    let bills = billing::load_bills(BufReader::new(File::open(&bills_path)?))?;
    tracing::info!("Loaded {} bills", bills.len());

    let report = Reconciler::new().reconcile(&bills);
    let title = format!("{} - Profit Report", config.app.shop_name);
    let layout = ReportLayout::from_report(&report, title);

    // On-screen surface
    print!("{}", TableRenderer::new().render(&layout));

    // Export surfaces
    std::fs::create_dir_all(&config.export.output_dir)?;
    let xlsx_path = config.export.output_dir.join("profit-report.xlsx");
    let pdf_path = config.export.output_dir.join("profit-report.pdf");
    ExcelWriter::new().write_file(&layout, &xlsx_path)?;
    PdfWriter::new().write_file(&layout, &pdf_path)?;

    tracing::info!(
        bills = report.per_bill.len(),
        items = report.item_count(),
        "Report complete"
    );

    Ok(())
}
