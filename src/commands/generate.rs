use crate::cli::Cli;
use crate::domain::constants::NEXT_STEPS;
use crate::domain::models::{GenerateReport, ReplacementReport};
use crate::services::files::{
    absolute, ensure_data_file, ensure_template, load_data, load_template, template_path,
    write_output,
};
use crate::services::output::print_one;
use crate::services::replacements::resolve_replacements;
use crate::services::substitute::substitute;
use std::path::Path;
use tracing::debug;

pub fn handle_generate(cli: &Cli) -> anyhow::Result<()> {
    if !cli.extra.is_empty() {
        debug!(ignored = ?cli.extra, "extra positional arguments ignored");
    }
    let template = template_path()?;
    let report = generate(&template, &cli.data_file, &cli.output_file, cli.json)?;
    print_one(cli.json, report, success_lines)
}

/// Runs the whole pipeline; nothing is written unless every earlier step succeeded.
pub fn generate(
    template: &Path,
    data_file: &Path,
    output_file: &Path,
    json: bool,
) -> anyhow::Result<GenerateReport> {
    ensure_template(template)?;
    ensure_data_file(data_file)?;

    let text = load_template(template)?;
    let data = load_data(data_file)?;

    if !json {
        println!("Generating dashboard...");
        println!("Template: {}", template.display());
        println!("Data: {}", data_file.display());
        println!("Output: {}", output_file.display());
    }

    let table = resolve_replacements(&data);
    let substituted = substitute(&text, &table);
    write_output(output_file, &substituted.text)?;

    let replacements = table
        .entries
        .into_iter()
        .zip(substituted.occurrences)
        .map(|(entry, occurrences)| ReplacementReport {
            search: entry.search.to_string(),
            value: entry.value,
            source: entry.source,
            occurrences,
        })
        .collect();

    Ok(GenerateReport {
        template: template.to_path_buf(),
        data: data_file.to_path_buf(),
        output: absolute(output_file),
        replacements,
    })
}

fn success_lines(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "✓ Dashboard generated successfully!".to_string(),
        format!("Open in browser: {}", report.output.display()),
        String::new(),
        "Next steps:".to_string(),
    ];
    lines.extend(NEXT_STEPS.iter().map(|s| s.to_string()));
    lines
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::domain::models::ValueSource;
    use std::fs;
    use tempfile::tempdir;

    const TEMPLATE: &str = "<title>BookingBrain | Database Analysis</title>\n\
        <h1>BookingBrain</h1><p>October 30, 2025 by Leonid Shvorob</p>\n";

    #[test]
    fn full_client_replaces_all_literals() {
        let dir = tempdir().unwrap();
        let template = dir.path().join("t.html");
        let data = dir.path().join("data.json");
        let out = dir.path().join("out.html");
        fs::write(&template, TEMPLATE).unwrap();
        fs::write(
            &data,
            r#"{"client":{"name":"Acme","projectType":"Ops Review","date":"May 1, 2026","analyst":"Jo"}}"#,
        )
        .unwrap();

        let report = generate(&template, &data, &out, true).unwrap();

        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "<title>Acme | Ops Review</title>\n<h1>Acme</h1><p>May 1, 2026 by Jo</p>\n"
        );
        assert!(report.output.is_absolute());
        assert!(report
            .replacements
            .iter()
            .all(|r| r.source == ValueSource::Data));
        assert_eq!(report.replacements[0].occurrences, 2);
    }

    #[test]
    fn missing_data_file_writes_nothing() {
        let dir = tempdir().unwrap();
        let template = dir.path().join("t.html");
        let out = dir.path().join("out.html");
        fs::write(&template, TEMPLATE).unwrap();

        let err = generate(&template, &dir.path().join("nope.json"), &out, true).unwrap_err();

        assert_eq!(crate::error::error_code(&err), "MISSING_DATA_FILE");
        assert!(!out.exists());
    }

    #[test]
    fn missing_template_is_checked_before_data() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.html");

        let err = generate(
            &dir.path().join("t.html"),
            &dir.path().join("nope.json"),
            &out,
            true,
        )
        .unwrap_err();

        assert_eq!(crate::error::error_code(&err), "MISSING_TEMPLATE");
        assert!(!out.exists());
    }

    #[test]
    fn parse_error_leaves_existing_output_untouched() {
        let dir = tempdir().unwrap();
        let template = dir.path().join("t.html");
        let data = dir.path().join("data.json");
        let out = dir.path().join("out.html");
        fs::write(&template, TEMPLATE).unwrap();
        fs::write(&data, "not json").unwrap();
        fs::write(&out, "previous").unwrap();

        let err = generate(&template, &data, &out, true).unwrap_err();

        assert_eq!(crate::error::error_code(&err), "PARSE_ERROR");
        assert_eq!(fs::read_to_string(&out).unwrap(), "previous");
    }
}
