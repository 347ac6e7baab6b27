//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use stopa_annotate::ProviderKind;
use stopa_core::{LabelStyle, Poem, StressAnnotator};

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::output::{create_formatter, FormatOptions, OutputFormat, PoemOutput};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Poem files or patterns (supports glob)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Poem text given inline
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: from config, else text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Stress annotator: web, dictionary or none [default: from config, else web]
    #[arg(short, long, value_name = "KIND")]
    pub annotator: Option<ProviderKind>,

    /// Dictionary file; implies the dictionary annotator unless one is given
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Stress-marking page for the web annotator
    #[arg(long, value_name = "URL", env = "STOPA_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Attempts per poem for the web annotator
    #[arg(long, value_name = "N")]
    pub attempts: Option<u32>,

    /// Print meter names in Ukrainian
    #[arg(long)]
    pub native_labels: bool,

    /// Echo the original text before the analysis
    #[arg(long)]
    pub show_text: bool,

    /// Echo the stress-annotated text before the analysis
    #[arg(long)]
    pub show_annotated: bool,

    /// Configuration file [default: ./stopa.toml if present]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// One poem to analyze
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoemInput {
    /// Inline text
    Text(String),
    /// Poem file
    File(PathBuf),
}

impl PoemInput {
    /// Name shown in headers and errors
    pub fn source(&self) -> String {
        match self {
            PoemInput::Text(_) => "<text>".to_string(),
            PoemInput::File(path) => path.display().to_string(),
        }
    }

    /// Load, annotate and classify the poem
    pub fn analyze<A: StressAnnotator + ?Sized>(&self, annotator: &A) -> stopa_core::Result<Poem> {
        let builder = match self {
            PoemInput::Text(text) => Poem::builder().text(text.as_str()),
            PoemInput::File(path) => Poem::builder().file(path),
        };
        builder.build(annotator)
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting poem analysis");
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let annotator = config
            .annotation
            .build()
            .context("Failed to set up stress annotation")?;

        let inputs = self.inputs()?;
        let options = FormatOptions {
            labels: config.output.labels,
            headers: inputs.len() > 1,
            pretty_json: config.output.pretty_json,
        };
        let mut formatter = create_formatter(config.output.format, self.writer()?, options);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        let mut failed = 0;
        for input in &inputs {
            let source = input.source();
            match input.analyze(annotator.as_ref()) {
                Ok(poem) => {
                    log::info!(
                        "{source}: {} with probability {}",
                        poem.meter(),
                        poem.probability()
                    );
                    let output = PoemOutput::new(
                        source.as_str(),
                        &poem,
                        config.output.labels,
                        config.output.show_text,
                        config.output.show_annotated,
                    );
                    formatter.format_poem(&output)?;
                }
                Err(e) => {
                    failed += 1;
                    progress.println(&format!("error: {source}: {e}"));
                }
            }
            progress.file_completed(&source);
        }

        progress.finish();
        formatter.finish()?;

        if failed > 0 {
            return Err(CliError::AnalysisFailed {
                failed,
                total: inputs.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Configuration file merged with command-line overrides
    pub fn effective_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref())?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut CliConfig) {
        let annotation = &mut config.annotation;
        if let Some(dictionary) = &self.dictionary {
            annotation.dictionary = Some(dictionary.clone());
            annotation.provider = ProviderKind::Dictionary;
        }
        if let Some(kind) = self.annotator {
            annotation.provider = kind;
        }
        if let Some(endpoint) = &self.endpoint {
            annotation.web.endpoint = endpoint.clone();
        }
        if let Some(attempts) = self.attempts {
            annotation.web.retry.attempts = attempts;
        }

        let output = &mut config.output;
        if let Some(format) = self.format {
            output.format = format;
        }
        if self.native_labels {
            output.labels = LabelStyle::Native;
        }
        output.show_text |= self.show_text;
        output.show_annotated |= self.show_annotated;
    }

    /// Inline text, or the files the patterns resolve to
    pub fn inputs(&self) -> Result<Vec<PoemInput>> {
        if let Some(text) = &self.text {
            return Ok(vec![PoemInput::Text(text.clone())]);
        }
        if self.input.is_empty() {
            return Err(CliError::NoInput.into());
        }

        let files = resolve_patterns(&self.input)?;
        log::debug!("resolved {} input files", files.len());
        Ok(files.into_iter().map(PoemInput::File).collect())
    }

    fn writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        })
    }
}
