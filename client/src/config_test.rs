use super::*;

#[test]
fn default_config_has_no_mail_credentials() {
    let config = SiteConfig::default();
    assert!(!config.mail_configured());
    assert_eq!(config.emailjs_endpoint, DEFAULT_EMAILJS_ENDPOINT);
    assert_eq!(config.resume_url, DEFAULT_RESUME_URL);
}

#[test]
fn from_values_requires_all_three_credentials() {
    let partial = SiteConfig::from_values(Some("svc"), Some("tpl"), None, None, None);
    assert!(!partial.mail_configured());
    let full = SiteConfig::from_values(Some("svc"), Some("tpl"), Some("key"), None, None);
    assert!(full.mail_configured());
}

#[test]
fn blank_values_count_as_unset() {
    let config = SiteConfig::from_values(Some("  "), Some(""), Some("key"), Some(" "), Some(""));
    assert_eq!(config.emailjs_service_id, None);
    assert_eq!(config.emailjs_template_id, None);
    assert_eq!(config.emailjs_endpoint, DEFAULT_EMAILJS_ENDPOINT);
    assert_eq!(config.resume_url, DEFAULT_RESUME_URL);
}

#[test]
fn values_are_trimmed() {
    let config = SiteConfig::from_values(Some(" svc "), None, None, Some(" https://mail.test/send "), None);
    assert_eq!(config.emailjs_service_id.as_deref(), Some("svc"));
    assert_eq!(config.emailjs_endpoint, "https://mail.test/send");
}

#[test]
fn resume_file_name_is_last_path_segment() {
    let config = SiteConfig::from_values(None, None, None, None, Some("/files/Jane-Doe-CV.pdf"));
    assert_eq!(config.resume_file_name(), "Jane-Doe-CV.pdf");
}

#[test]
fn resume_file_name_falls_back_for_directory_urls() {
    let config = SiteConfig::from_values(None, None, None, None, Some("/files/"));
    assert_eq!(config.resume_file_name(), "resume.pdf");
}
