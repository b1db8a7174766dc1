//! Banner and reusable code snippet generation.

use logo_rendr::RESET;

/// Default title color.
pub const CYAN: &str = "\x1b[36m";

/// Bright black, used for version and subtitle.
pub const GREY: &str = "\x1b[90m";

/// Text printed around the rendered art
#[derive(Debug, Clone)]
pub struct Banner {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub version: Option<String>,
    pub border_color: &'static str,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            version: None,
            border_color: CYAN,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Wrap rendered art in a banner with optional title, version and subtitle
pub fn generate_banner(art: &str, banner: &Banner) -> String {
    let mut out = String::from("\n");
    out.push_str(art);

    if let Some(title) = non_empty(&banner.title) {
        out.push('\n');
        out.push_str(&format!("{}{}{}", banner.border_color, title, RESET));
        if let Some(version) = non_empty(&banner.version) {
            out.push_str(&format!(" {GREY}v{version}{RESET}"));
        }
        out.push('\n');
    }

    if let Some(subtitle) = non_empty(&banner.subtitle) {
        out.push_str(&format!("{GREY}{subtitle}{RESET}\n"));
    }

    out.push('\n');
    out
}

/// Escape text for a JavaScript template literal.
pub(crate) fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace('$', "\\$")
}

/// Escape text for a single-quoted JavaScript string.
pub(crate) fn escape_js_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Generate a CommonJS module that prints the logo
///
/// # Arguments
/// * `art` - Rendered terminal art
/// * `title` - Title shown after the logo
/// * `version` - Version shown next to the title
/// * `subtitle` - Optional line below the title
pub fn generate_code(art: &str, title: &str, version: &str, subtitle: Option<&str>) -> String {
    let logo = escape_template_literal(art);
    let title = escape_js_string(title);
    let version = escape_js_string(version);
    let subtitle_line = subtitle
        .filter(|s| !s.is_empty())
        .map(|s| format!(r"console.log('\x1b[90m{}\x1b[0m');", escape_js_string(s)))
        .unwrap_or_default();

    format!(
        r"// Generated by cli-logo
// Copy this to your CLI app to display the logo

const LOGO = `{logo}`;

function showBanner() {{
  console.log(LOGO);
  console.log('\x1b[36m{title}\x1b[0m \x1b[90mv{version}\x1b[0m');
  {subtitle_line}
  console.log();
}}

module.exports = {{ LOGO, showBanner }};

// Run directly to test
if (require.main === module) {{
  showBanner();
}}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ART: &str = "@@\n..\n";

    #[test]
    fn test_banner_art_only() {
        let out = generate_banner(ART, &Banner::default());
        assert_eq!(out, "\n@@\n..\n\n");
    }

    #[test]
    fn test_banner_with_title_version_subtitle() {
        let banner = Banner {
            title: Some("Acme".into()),
            version: Some("1.2.3".into()),
            subtitle: Some("Rocket skates".into()),
            ..Default::default()
        };
        let out = generate_banner(ART, &banner);
        assert_eq!(
            out,
            "\n@@\n..\n\n\x1b[36mAcme\x1b[0m \x1b[90mv1.2.3\x1b[0m\n\x1b[90mRocket skates\x1b[0m\n\n"
        );
    }

    #[test]
    fn test_banner_version_needs_title() {
        let banner = Banner {
            version: Some("1.2.3".into()),
            ..Default::default()
        };
        assert!(!generate_banner(ART, &banner).contains("v1.2.3"));
    }

    #[test]
    fn test_banner_empty_title_ignored() {
        let banner = Banner {
            title: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(generate_banner(ART, &banner), "\n@@\n..\n\n");
    }

    #[test]
    fn test_escape_template_literal() {
        assert_eq!(escape_template_literal(r"a\b`c${d}"), r"a\\b\`c\${d}");
    }

    #[test]
    fn test_escape_js_string() {
        assert_eq!(escape_js_string(r"it's a\b"), r"it\'s a\\b");
    }

    #[test]
    fn test_generate_code() {
        let code = generate_code("`$\n", "My CLI", "1.0.0", Some("Tools"));
        assert!(code.contains("const LOGO = `\\`\\$\n`;"));
        assert!(code.contains(r"console.log('\x1b[36mMy CLI\x1b[0m \x1b[90mv1.0.0\x1b[0m');"));
        assert!(code.contains(r"console.log('\x1b[90mTools\x1b[0m');"));
        assert!(code.contains("module.exports = { LOGO, showBanner };"));
    }

    #[test]
    fn test_generate_code_without_subtitle() {
        let code = generate_code(ART, "My CLI", "1.0.0", None);
        assert!(!code.contains(r"\x1b[90mTools"));
        assert_eq!(code.matches("console.log(").count(), 3);
    }
}
