use anyhow::Context;
use briefgen_core::audit::audit_field_mappings;
use briefgen_core::questionnaire::{
    questionnaire_by_template_id, validate_answers, QUESTIONNAIRES,
};
use briefgen_core::{generate_brief, generate_validated_brief, TEMPLATES};
use briefgen_pdf::{export_to_file, theme_by_name, RenderOptions, PDF_THEMES};
use briefgen_types::AnswerSet;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "briefgen")]
#[command(about = "Briefgen marketing-brief generator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available brief templates
    Templates,
    /// Generate a markdown brief from an answers JSON file
    Generate {
        /// Template identifier (e.g. web-development)
        template: String,
        /// Path to a JSON file of questionnaire answers
        answers: PathBuf,
        /// Write the markdown here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Fail on questionnaire validation issues before generating
        #[arg(long)]
        validate: bool,
    },
    /// Validate answers against a template's questionnaire
    Validate {
        /// Template identifier
        template: String,
        /// Path to a JSON file of questionnaire answers
        answers: PathBuf,
    },
    /// Export a markdown brief as a themed PDF
    ExportPdf {
        /// Path to the markdown file
        markdown: PathBuf,
        /// Document title (used for the filename)
        #[arg(long, default_value = "Brief")]
        title: String,
        /// Theme name (see `themes`)
        #[arg(long, default_value = "light")]
        theme: String,
        /// Output directory
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Optional header logo (PNG)
        #[arg(long)]
        logo: Option<PathBuf>,
    },
    /// List PDF themes
    Themes,
    /// Report field mappings that reference undeclared questions
    Audit,
}

fn read_answers(path: &PathBuf) -> anyhow::Result<AnswerSet> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse answers file {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Templates) => {
            for template in TEMPLATES {
                println!("{:<28} {}", template.id, template.title);
            }
        }
        Some(Commands::Generate {
            template,
            answers,
            out,
            validate,
        }) => {
            let answers = read_answers(&answers)?;
            let markdown = if validate {
                generate_validated_brief(&template, &answers)?
            } else {
                generate_brief(&template, &answers)?
            };
            match out {
                Some(path) => {
                    std::fs::write(&path, markdown)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{markdown}"),
            }
        }
        Some(Commands::Validate { template, answers }) => {
            let questionnaire = questionnaire_by_template_id(&template)
                .with_context(|| format!("no questionnaire defined for template '{template}'"))?;
            let answers = read_answers(&answers)?;
            let issues = validate_answers(questionnaire, &answers);
            if issues.is_empty() {
                println!("All answers valid.");
            } else {
                for issue in &issues {
                    println!("{}: {}", issue.question_id, issue.message);
                }
                anyhow::bail!("{} validation issue(s)", issues.len());
            }
        }
        Some(Commands::ExportPdf {
            markdown,
            title,
            theme,
            out_dir,
            logo,
        }) => {
            let content = std::fs::read_to_string(&markdown)
                .with_context(|| format!("failed to read {}", markdown.display()))?;
            let options = RenderOptions {
                title: &title,
                theme: theme_by_name(&theme),
                generated_on: chrono::Utc::now().date_naive(),
                logo_path: logo.as_deref(),
            };
            let path = export_to_file(&content, &options, &out_dir)?;
            println!("Exported {}", path.display());
        }
        Some(Commands::Themes) => {
            for theme in PDF_THEMES {
                println!("{:<12} {}", theme.name, theme.description);
            }
        }
        Some(Commands::Audit) => {
            let mut total = 0;
            for questionnaire in QUESTIONNAIRES {
                for record in audit_field_mappings(questionnaire) {
                    println!("{record}");
                    total += 1;
                }
            }
            if total == 0 {
                println!("No mapping drift found.");
            }
        }
        None => {
            println!("Use --help to see available commands.");
        }
    }

    Ok(())
}
