use clap::Parser;
use formflow::seed::sample_templates;
use std::fs;

/// A CLI tool to write the sample flow templates as JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "templates.json")]
    output: String,

    /// Only write the template with this name
    #[arg(long)]
    only: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let templates: Vec<_> = sample_templates()
        .into_iter()
        .filter(|t| cli.only.as_ref().is_none_or(|name| &t.name == name))
        .collect();

    if templates.is_empty() {
        eprintln!("Error: no sample template named '{}'", cli.only.unwrap_or_default());
        std::process::exit(1);
    }

    for template in &templates {
        println!(
            "-> {} ({} fields, {} criteria, {} forms)",
            template.name,
            template.survey.fields.len(),
            template.criteria.len(),
            template.forms.len()
        );
    }

    let json_output = serde_json::to_string_pretty(&templates)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved {} template(s) to '{}'",
        templates.len(),
        cli.output
    );

    Ok(())
}
