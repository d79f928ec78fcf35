use crate::ports::outbound::LicensePageFormatter;
use crate::resolution::domain::ResolutionOutcome;
use crate::shared::Result;

/// Placeholder replaced with the package name in the default license URL
pub const PACKAGE_NAME_PLACEHOLDER: &str = "{pkg_name}";

/// License URL used when a package has none recorded
pub const DEFAULT_LICENSE_URL_TEMPLATE: &str = "https://www.npmjs.com/package/{pkg_name}";

const ATTRIBUTION: &str = "This page is generated by [license-page-generator](https://github.com/LaunchPlatform/license-page-generator)";

/// MarkdownFormatter adapter for rendering the license page as a Markdown list
///
/// One bullet per package: `- {name}: [{license}]({license_url})`.
pub struct MarkdownFormatter {
    default_license_url: String,
    attribution: bool,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self {
            default_license_url: DEFAULT_LICENSE_URL_TEMPLATE.to_string(),
            attribution: true,
        }
    }

    /// Template for packages without a license URL; `{pkg_name}` is substituted
    pub fn with_default_license_url(mut self, template: impl Into<String>) -> Self {
        self.default_license_url = template.into();
        self
    }

    pub fn with_attribution(mut self, attribution: bool) -> Self {
        self.attribution = attribution;
        self
    }

    /// Escapes characters that would end the link text early
    fn escape_link_text(text: &str) -> String {
        text.replace('[', "\\[")
            .replace(']', "\\]")
            .replace('\n', " ")
    }

    fn license_url(&self, outcome: &ResolutionOutcome) -> String {
        if outcome.license_url().is_empty() {
            self.default_license_url
                .replace(PACKAGE_NAME_PLACEHOLDER, outcome.name())
        } else {
            outcome.license_url().to_string()
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LicensePageFormatter for MarkdownFormatter {
    fn format(&self, outcomes: &[ResolutionOutcome]) -> Result<String> {
        let mut output = String::new();

        for outcome in outcomes {
            output.push_str(&format!(
                "- {}: [{}]({})\n",
                outcome.name(),
                Self::escape_link_text(outcome.license()),
                self.license_url(outcome)
            ));
        }

        if self.attribution {
            output.push('\n');
            output.push_str(ATTRIBUTION);
            output.push('\n');
        }

        Ok(output)
    }
}
