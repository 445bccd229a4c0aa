use std::env;
use std::path::Path;
use std::process;

use anyhow::Result;
use rejection_report::config::ReportConfig;
use rejection_report::generate_report;

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    anyhow::ensure!(args.len() == 2, "La cantidad de argumentos es incorrecta");

    let config = ReportConfig::default();
    let summary = generate_report(Path::new(&args[1]), &config)?;

    println!(
        "El informe {} del cliente {} se ha creado exitosamente",
        config.output_path.display(),
        summary.full_name
    );

    Ok(())
}

fn main() {
    // Only the top-level message reaches the user, not the cause chain
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
