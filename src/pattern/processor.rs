//! Pattern processing API
//!
//! This module maps format strings such as `token-simple` or `ast-treeviz` onto the
//! lexer, the parser and the output formats. A format string is `<stage>-<format>`:
//!
//! | Format          | Output                                             |
//! |-----------------|----------------------------------------------------|
//! | `token-simple`  | `<slash><any:a><asterisk>` style token stream       |
//! | `token-json`    | tokens as pretty JSON                              |
//! | `ast-treeviz`   | box-drawing outline of the rule nodes              |
//! | `ast-tag`       | XML-like tag tree                                  |
//! | `ast-json`      | the full parse tree as pretty JSON                 |
//! | `ast-yaml`      | the full parse tree as YAML                        |
//! | `ast-position`  | the nodes covering a byte offset (needs a position)|

use crate::pattern::formats::{format_at_position, serialize_tag, to_treeviz_str};
use crate::pattern::lexer::{tokenize, Token};
use crate::pattern::parser::{parse, ParseError};
use thiserror::Error;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    AstTag,
    AstTreeviz,
    AstPosition,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("invalid stage: {0}")]
    InvalidStage(String),

    #[error("invalid format type: {0}")]
    InvalidFormatType(String),

    #[error("format 'ast-position' requires a position")]
    MissingPosition,

    #[error("no node found at offset {0}")]
    NoNodeAtPosition(usize),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match (stage, format) {
            (_, "json") => OutputFormat::Json,
            (ProcessingStage::Token, "simple") => OutputFormat::Simple,
            (ProcessingStage::Ast, "yaml") => OutputFormat::Yaml,
            (ProcessingStage::Ast, "tag") => OutputFormat::AstTag,
            (ProcessingStage::Ast, "treeviz") => OutputFormat::AstTreeviz,
            (ProcessingStage::Ast, "position") => OutputFormat::AstPosition,
            (_, other) => return Err(ProcessingError::InvalidFormatType(other.to_string())),
        };

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let token = |format| ProcessingSpec {
            stage: ProcessingStage::Token,
            format,
        };
        let ast = |format| ProcessingSpec {
            stage: ProcessingStage::Ast,
            format,
        };
        vec![
            token(OutputFormat::Simple),
            token(OutputFormat::Json),
            ast(OutputFormat::AstTreeviz),
            ast(OutputFormat::AstTag),
            ast(OutputFormat::Json),
            ast(OutputFormat::Yaml),
            ast(OutputFormat::AstPosition),
        ]
    }

    /// The format string this spec was parsed from
    pub fn name(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::AstTag => "tag",
            OutputFormat::AstTreeviz => "treeviz",
            OutputFormat::AstPosition => "position",
        };
        format!("{}-{}", stage, format)
    }
}

/// Process a single pattern according to the given specification
///
/// `position` is the byte offset used by `ast-position`; other formats ignore it.
pub fn process_pattern(
    source: &str,
    spec: &ProcessingSpec,
    position: Option<usize>,
) -> Result<String, ProcessingError> {
    log::debug!("processing {:?} as {}", source, spec.name());

    match spec.stage {
        ProcessingStage::Token => format_tokens(&tokenize(source), spec.format),
        ProcessingStage::Ast => {
            let tree = parse(source)?;
            match spec.format {
                OutputFormat::AstTreeviz => Ok(to_treeviz_str(&tree)),
                OutputFormat::AstTag => Ok(serialize_tag(&tree)),
                OutputFormat::Json => serde_json::to_string_pretty(&tree)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                OutputFormat::Yaml => serde_yaml::to_string(&tree)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                OutputFormat::AstPosition => {
                    let offset = position.ok_or(ProcessingError::MissingPosition)?;
                    format_at_position(&tree, offset)
                }
                OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
                    "simple format only works with token stage".to_string(),
                )),
            }
        }
    }
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens.iter().map(|token| token.to_string()).collect()),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{:?} only works with ast stage",
            other
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}
