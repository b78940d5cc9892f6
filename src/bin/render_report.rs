//! Render a report JSON file to a PDF.
//!
//! Usage: `render_report <input.json> [output.pdf]`

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: render_report <input.json> [output.pdf]");
        return ExitCode::from(2);
    };
    let output = args.next().unwrap_or_else(|| "report.pdf".to_string());

    match run(&input, &output) {
        Ok(bytes) => {
            println!("wrote {} ({} bytes)", output, bytes);
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn run(input: &str, output: &str) -> Result<usize, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(input)?;
    let report: pawreport::ReportData = serde_json::from_str(&json)?;
    let pdf = pawreport::render(&report)?;
    std::fs::write(output, &pdf)?;
    Ok(pdf.len())
}
