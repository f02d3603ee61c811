use colored::Colorize;
use color_eyre::eyre::bail;
use color_eyre::Result;
use dpu_core::environment::{check_descriptor_path, check_execution_path};

/// Runs the edit-time checks. Problems are reported, never fatal.
pub fn check_command(exec_path: Option<&str>, descriptor: Option<&str>) -> Result<()> {
    if exec_path.is_none() && descriptor.is_none() {
        bail!("Nothing to check: pass --exec-path and/or --descriptor");
    }

    if let Some(path) = exec_path {
        print_result("Execution path", path, check_execution_path(path));
    }
    if let Some(path) = descriptor {
        print_result("DPU", path, check_descriptor_path(path));
    }

    Ok(())
}

fn print_result(label: &str, value: &str, message: Option<String>) {
    match message {
        None => println!("{} {label}: {value}", "ok".green().bold()),
        Some(message) => println!("{} {label}: {message}", "warning".yellow().bold()),
    }
}
