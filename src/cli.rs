//! One-shot commands. Each returns the text to print on stdout.
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::device::DeviceClient;
use crate::document::{ConfigDocument, ValidationIssue};
use crate::error::{EspmanError, Result};
use crate::registry::BoardProfile;
use crate::{log_info, log_warn};

/// Subcommands besides the interactive UI
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    GetConfig,
    SetConfig(PathBuf),
    Check(PathBuf),
    Files,
    Remove(String),
    Upload(Vec<PathBuf>),
    Restart,
    Board,
}

pub async fn run(command: CliCommand, client: &DeviceClient, profile: &BoardProfile) -> Result<String> {
    match command {
        CliCommand::GetConfig => {
            let fetched = client.get_config().await?;
            fetched.document.to_pretty_json()
        }
        CliCommand::SetConfig(path) => {
            let document = read_checked(&path, profile)?;
            client.set_config(&document).await
        }
        CliCommand::Check(path) => {
            let document = read_document(&path)?;
            let issues = document.validate(profile);
            report_issues(&issues)?;
            Ok(format!(
                "{}: {} sensors, {} warnings",
                path.display(),
                document.sensors.len(),
                issues.len()
            ))
        }
        CliCommand::Files => {
            let list = client.list_files().await?;
            let mut out = String::new();
            for (name, size) in list.rows() {
                let _ = writeln!(out, "{:<32} {:>12}", name, size);
            }
            if let Some(summary) = list.disk_summary() {
                let _ = writeln!(out, "{}", summary);
            }
            Ok(out.trim_end().to_string())
        }
        CliCommand::Remove(name) => client.remove_file(&name).await,
        CliCommand::Upload(paths) => client.upload_files(&paths).await,
        CliCommand::Restart => client.restart().await,
        CliCommand::Board => Ok(describe_board(profile)),
    }
}

pub fn read_document(path: &Path) -> Result<ConfigDocument> {
    let raw = std::fs::read_to_string(path)?;
    ConfigDocument::from_json(&raw)
}

/// Read a document and refuse it when validation finds errors
fn read_checked(path: &Path, profile: &BoardProfile) -> Result<ConfigDocument> {
    let document = read_document(path)?;
    report_issues(&document.validate(profile))?;
    Ok(document)
}

fn report_issues(issues: &[ValidationIssue]) -> Result<()> {
    for issue in issues {
        log_warn!("{}", issue);
    }
    if ConfigDocument::has_errors(issues) {
        let errors: Vec<String> = issues
            .iter()
            .filter(|i| i.severity == crate::document::IssueSeverity::Error)
            .map(|i| i.to_string())
            .collect();
        return Err(EspmanError::InvalidDocument(errors.join("; ")));
    }
    log_info!("Document passed validation with {} warnings", issues.len());
    Ok(())
}

pub fn describe_board(profile: &BoardProfile) -> String {
    let mut out = format!("Board: {}\n\nSensor types:\n", profile.name);
    for def in &profile.sensor_types {
        let pins = if def.has_pins() { def.pins.join(", ") } else { "-".to_string() };
        let _ = writeln!(out, "  {:<12} {:<24} pins: {}", def.key, def.label, pins);
    }
    out.push_str("\nPins:\n");
    for pin in &profile.pins {
        let _ = writeln!(out, "  {:<4} {}", pin.label, pin.id);
    }
    out.trim_end().to_string()
}
