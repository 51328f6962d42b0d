//! Interactive collection of license parameters

use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::application::{ApplicationError, Prompter};
use crate::generation::{DEFAULT_VARIANT, GenerationError, RawLicenseParams, parse_year};

/// Prompt for every license parameter, offering `known` values as defaults.
///
/// Empty year answers stay absent so the normalizer applies `reference_year`.
pub fn collect_interactive(
    prompter: &mut dyn Prompter,
    known: &RawLicenseParams,
    reference_year: i32,
    variants: &[String],
) -> Result<RawLicenseParams, ApplicationError> {
    let copyright = prompter.required("Copyright holder", known.copyright.as_deref())?;
    let email = prompter.optional("Email (optional)", known.email.as_deref())?;
    let url = prompter.optional("Website URL (optional)", known.url.as_deref())?;

    let start_year = prompt_year(
        prompter,
        &format!("Start year (default {reference_year})"),
        known.start_year.or(known.year),
    )?;
    let end_year = prompt_year(
        prompter,
        &format!("End year (default {reference_year})"),
        known.end_year.or(known.year),
    )?;

    let wanted = known
        .license
        .as_deref()
        .unwrap_or(DEFAULT_VARIANT)
        .to_uppercase();
    if variants.is_empty() {
        return Err(GenerationError::unsupported(wanted, Vec::new()).into());
    }
    let default = variants
        .iter()
        .position(|v| *v == wanted)
        .or_else(|| variants.iter().position(|v| v == DEFAULT_VARIANT))
        .unwrap_or(0);
    let selection = prompter.select("License", variants, default)?;
    let license = variants
        .get(selection)
        .cloned()
        .ok_or_else(|| ApplicationError::PromptError(format!("invalid selection {selection}")))?;

    Ok(RawLicenseParams {
        copyright: Some(copyright),
        email,
        url,
        year: None,
        start_year,
        end_year,
        license: Some(license),
    })
}

fn prompt_year(
    prompter: &mut dyn Prompter,
    prompt: &str,
    known: Option<i32>,
) -> Result<Option<i32>, ApplicationError> {
    let default = known.map(|year| year.to_string());
    match prompter.optional(prompt, default.as_deref())? {
        Some(answer) => Ok(Some(parse_year(&answer)?)),
        None => Ok(None),
    }
}

/// Terminal prompter backed by `dialoguer`
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn required(&mut self, prompt: &str, default: Option<&str>) -> Result<String, ApplicationError> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        let answer = input.interact_text().map_err(prompt_error)?;
        Ok(answer.trim().to_string())
    }

    fn optional(
        &mut self,
        prompt: &str,
        default: Option<&str>,
    ) -> Result<Option<String>, ApplicationError> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        let answer = input.interact_text().map_err(prompt_error)?;
        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<usize, ApplicationError> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}

fn prompt_error(error: dialoguer::Error) -> ApplicationError {
    ApplicationError::PromptError(error.to_string())
}
