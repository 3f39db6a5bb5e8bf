//! Compress hooks
//!
//! The builder hands every compressor an ordered list of input files and one
//! output path. What "compress" means is up to the implementation:
//!
//! - [`ConcatCompressor`] joins the inputs as-is (the default)
//! - [`CommandCompressor`] runs an external minifier from a command template

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::AssetKind;
use crate::error::{self, Result};

/// Placeholder expanded to every input file
pub const INPUTS_PLACEHOLDER: &str = "{from}";
/// Placeholder expanded to the output file
pub const OUTPUT_PLACEHOLDER: &str = "{to}";

/// Combines an ordered list of input files into one output file
pub trait Compressor {
    fn compress(&self, inputs: &[PathBuf], output: &Path) -> Result<()>;
}

/// One compress hook per asset type
pub struct Compressors {
    pub script: Box<dyn Compressor>,
    pub style: Box<dyn Compressor>,
}

impl Compressors {
    /// Use external commands where a template is given, concatenation otherwise
    pub fn from_templates(js: Option<String>, css: Option<String>) -> Self {
        fn pick(template: Option<String>) -> Box<dyn Compressor> {
            match template {
                Some(template) => Box::new(CommandCompressor::new(template)),
                None => Box::new(ConcatCompressor),
            }
        }

        Self {
            script: pick(js),
            style: pick(css),
        }
    }

    /// The hook for `kind`
    pub fn for_kind(&self, kind: AssetKind) -> &dyn Compressor {
        match kind {
            AssetKind::Script => self.script.as_ref(),
            AssetKind::Style => self.style.as_ref(),
        }
    }
}

/// Concatenates inputs in order, newline-separated
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcatCompressor;

impl Compressor for ConcatCompressor {
    fn compress(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        ensure_parent_dir(output)?;

        let file = File::create(output).map_err(|e| error::file_write_failed(output, e))?;
        let mut writer = BufWriter::new(file);

        for input in inputs {
            let content = fs::read(input).map_err(|e| error::file_read_failed(input, e))?;
            writer
                .write_all(&content)
                .map_err(|e| error::file_write_failed(output, e))?;
            if !content.ends_with(b"\n") {
                writer
                    .write_all(b"\n")
                    .map_err(|e| error::file_write_failed(output, e))?;
            }
        }

        writer
            .flush()
            .map_err(|e| error::file_write_failed(output, e))
    }
}

/// Runs an external tool, e.g. `uglifyjs {from} -o {to}`
///
/// A token that is exactly `{from}` expands to one argument per input file;
/// `{to}` is substituted anywhere inside a token.
#[derive(Debug, Clone)]
pub struct CommandCompressor {
    template: String,
}

impl CommandCompressor {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Program and arguments for one invocation
    pub fn command_line(&self, inputs: &[PathBuf], output: &Path) -> Result<Vec<String>> {
        let output = output.display().to_string();
        let mut argv = Vec::new();

        for token in self.template.split_whitespace() {
            if token == INPUTS_PLACEHOLDER {
                argv.extend(inputs.iter().map(|p| p.display().to_string()));
            } else {
                argv.push(token.replace(OUTPUT_PLACEHOLDER, &output));
            }
        }

        if argv.is_empty() {
            return Err(error::compressor_failed(
                self.template.clone(),
                "empty command template",
            ));
        }
        Ok(argv)
    }
}

impl Compressor for CommandCompressor {
    fn compress(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        ensure_parent_dir(output)?;

        let argv = self.command_line(inputs, output)?;
        let (program, args) = argv.split_at(1);
        let program = &program[0];

        tracing::debug!("Running compressor: {}", argv.join(" "));
        let result = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| error::compressor_failed(program.clone(), e.to_string()))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(error::compressor_failed(
                program.clone(),
                format!("{}: {}", result.status, stderr.trim()),
            ));
        }

        Ok(())
    }
}

fn ensure_parent_dir(output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| error::file_write_failed(parent, e))?;
    }
    Ok(())
}
