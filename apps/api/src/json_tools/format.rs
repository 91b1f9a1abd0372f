use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::json_tools::{parse_document, JsonToolError, ParseLocation};

pub const MAX_INDENT: usize = 8;

fn default_indent() -> usize {
    2
}

/// What the formatter endpoint should do with the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum JsonFormatMode {
    Pretty {
        #[serde(default = "default_indent")]
        indent: usize,
    },
    Minify,
    Validate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedJson {
    pub output: String,
    pub input_bytes: usize,
    pub output_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ParseLocation>,
}

/// Re-indents `input` with `indent` spaces per level. Key order is preserved.
pub fn pretty_print(input: &str, indent: usize) -> Result<FormattedJson, JsonToolError> {
    if !(1..=MAX_INDENT).contains(&indent) {
        return Err(JsonToolError::InvalidIndent {
            given: indent,
            max: MAX_INDENT,
        });
    }
    let value = parse_document("input", input)?;

    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value
        .serialize(&mut ser)
        .map_err(|e| JsonToolError::Serialize(e.to_string()))?;
    let output = String::from_utf8(buf).map_err(|e| JsonToolError::Serialize(e.to_string()))?;

    Ok(FormattedJson {
        input_bytes: input.len(),
        output_bytes: output.len(),
        output,
    })
}

pub fn minify(input: &str) -> Result<FormattedJson, JsonToolError> {
    let value = parse_document("input", input)?;
    let output =
        serde_json::to_string(&value).map_err(|e| JsonToolError::Serialize(e.to_string()))?;

    Ok(FormattedJson {
        input_bytes: input.len(),
        output_bytes: output.len(),
        output,
    })
}

/// Never fails: a parse error is reported inside the result.
pub fn validate(input: &str) -> ValidationReport {
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(_) => ValidationReport {
            valid: true,
            error: None,
        },
        Err(e) => ValidationReport {
            valid: false,
            error: Some(ParseLocation::from(&e)),
        },
    }
}
