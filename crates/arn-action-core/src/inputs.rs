//! Step input resolution
//!
//! Turns the raw values handed over by the runner into validated [`RunInputs`].
//! Nothing here touches the network or the filesystem: credentials are checked
//! before any later stage can run.

use crate::error::{ActionError, Result};

/// Default `--mode` passed to the CLI
pub const DEFAULT_MODE: &str = "tag";

/// Default `--template` passed to the CLI
pub const DEFAULT_TEMPLATE: &str = "Standard Changelog";

/// Version selector that resolves through the release API
pub const LATEST: &str = "latest";

/// Raw step inputs as provided by the runner
///
/// Every field is optional; empty strings are treated the same as absent
/// values once trimmed.
#[derive(Debug, Clone, Default)]
pub struct RawInputs {
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub mode: Option<String>,
    pub template: Option<String>,
    pub output_url: Option<String>,
    pub from_ref: Option<String>,
    pub to_ref: Option<String>,
    pub cli_version: Option<String>,
}

/// Where the effective `to` ref came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToRef {
    /// Provided through the `to_ref` input
    Input(String),
    /// Taken from the runner's current ref name
    Environment(String),
}

impl ToRef {
    pub fn as_str(&self) -> &str {
        match self {
            ToRef::Input(value) | ToRef::Environment(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ToRef::Environment(_))
    }
}

/// Validated inputs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInputs {
    pub api_key: String,
    pub project_id: String,
    pub mode: String,
    pub template: String,
    pub output_url: bool,
    pub from_ref: Option<String>,
    pub to_ref: Option<ToRef>,
    pub cli_version: String,
}

impl RunInputs {
    /// Resolves raw inputs into a validated run configuration
    ///
    /// `ref_fallback` is the runner's current ref name and is only consulted
    /// when `to_ref` is blank.
    ///
    /// # Errors
    ///
    /// - [`ActionError::MissingApiKey`] if the API key is blank (checked first)
    /// - [`ActionError::MissingProjectId`] if the project id is blank
    /// - [`ActionError::InvalidBooleanInput`] if `output_url` is not a YAML boolean
    pub fn resolve(raw: RawInputs, ref_fallback: Option<&str>) -> Result<Self> {
        let api_key = non_empty(raw.api_key.as_deref()).ok_or(ActionError::MissingApiKey)?;
        let project_id =
            non_empty(raw.project_id.as_deref()).ok_or(ActionError::MissingProjectId)?;

        let output_url = parse_bool_input("output_url", raw.output_url.as_deref())?;

        let to_ref = match non_empty(raw.to_ref.as_deref()) {
            Some(value) => Some(ToRef::Input(value)),
            None => non_empty(ref_fallback).map(ToRef::Environment),
        };

        Ok(Self {
            api_key,
            project_id,
            mode: non_empty(raw.mode.as_deref()).unwrap_or_else(|| DEFAULT_MODE.to_string()),
            template: non_empty(raw.template.as_deref())
                .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
            output_url,
            from_ref: non_empty(raw.from_ref.as_deref()),
            to_ref,
            cli_version: non_empty(raw.cli_version.as_deref())
                .unwrap_or_else(|| LATEST.to_string()),
        })
    }
}

/// Parses a boolean input using the runner's YAML 1.2 core schema
///
/// Blank or missing values are `false`.
pub fn parse_bool_input(name: &str, value: Option<&str>) -> Result<bool> {
    match value.map(str::trim).unwrap_or_default() {
        "" | "false" | "False" | "FALSE" => Ok(false),
        "true" | "True" | "TRUE" => Ok(true),
        _ => Err(ActionError::InvalidBooleanInput {
            input: name.to_string(),
        }),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
