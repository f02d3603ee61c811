//! Terminal output helpers.

use colored::Colorize;
use color_eyre::Result;
use dpu_protocol::report_models::LaunchReport;

pub fn print_report(report: &LaunchReport, json: bool, dry_run: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let headline = if dry_run { "Prepared" } else { "Launched" };
    println!("{} {}", headline.green().bold(), report.dpu_name.bold());
    println!("  {} {}", "config:".dimmed(), report.config_path.display());
    if !report.config_written {
        print_warning("application.conf could not be written");
    }
    println!("  {} {}", "vm arguments:".dimmed(), report.vm_arguments);

    Ok(())
}

/// Shows the command a dry run would have started.
pub fn print_command(program: &str, args: &[String]) {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    println!("{} {}", "would run:".cyan(), line);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}
