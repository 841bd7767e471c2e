//! Site configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is static and has no server to ask at runtime, so mail
//! credentials and asset locations come from `FOLIO_*` environment
//! variables read by `option_env!` when the wasm bundle is built.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default EmailJS REST endpoint.
pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Default résumé location, served from the site root.
pub const DEFAULT_RESUME_URL: &str = "/resume.pdf";

/// Mail delivery credentials and static asset locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub emailjs_service_id: Option<String>,
    pub emailjs_template_id: Option<String>,
    pub emailjs_public_key: Option<String>,
    pub emailjs_endpoint: String,
    pub resume_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            emailjs_service_id: None,
            emailjs_template_id: None,
            emailjs_public_key: None,
            emailjs_endpoint: DEFAULT_EMAILJS_ENDPOINT.to_owned(),
            resume_url: DEFAULT_RESUME_URL.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Read the configuration captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("FOLIO_EMAILJS_SERVICE_ID"),
            option_env!("FOLIO_EMAILJS_TEMPLATE_ID"),
            option_env!("FOLIO_EMAILJS_PUBLIC_KEY"),
            option_env!("FOLIO_EMAILJS_ENDPOINT"),
            option_env!("FOLIO_RESUME_URL"),
        )
    }

    /// Build from raw values. Blank values count as unset.
    pub fn from_values(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
        endpoint: Option<&str>,
        resume_url: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            emailjs_service_id: non_blank(service_id),
            emailjs_template_id: non_blank(template_id),
            emailjs_public_key: non_blank(public_key),
            emailjs_endpoint: non_blank(endpoint).unwrap_or(defaults.emailjs_endpoint),
            resume_url: non_blank(resume_url).unwrap_or(defaults.resume_url),
        }
    }

    /// All three EmailJS credentials are present.
    pub fn mail_configured(&self) -> bool {
        self.emailjs_service_id.is_some() && self.emailjs_template_id.is_some() && self.emailjs_public_key.is_some()
    }

    /// File name offered when downloading the résumé.
    pub fn resume_file_name(&self) -> &str {
        self.resume_url
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or("resume.pdf")
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}
