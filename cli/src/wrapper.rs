//! Branded wrapper scripts that print the logo before running a shell or command.

use std::fs;
use std::path::{Path, PathBuf};

use crate::args::WrapperType;
use crate::banner::{escape_js_string, escape_template_literal};
use crate::error::CliError;

/// Fallback when neither `--shell` nor `$SHELL` is set.
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Script flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
    Bash,
    Node,
}

impl WrapperKind {
    pub fn extension(&self) -> &'static str {
        match self {
            WrapperKind::Bash => ".sh",
            WrapperKind::Node => ".js",
        }
    }

    /// Render the script for `kind` around `art`.
    pub fn generate(&self, art: &str, options: &WrapperOptions) -> String {
        match self {
            WrapperKind::Bash => generate_shell_wrapper(art, options),
            WrapperKind::Node => generate_node_wrapper(art, options),
        }
    }
}

impl WrapperType {
    /// Script kinds selected by `--type`, bash first.
    pub fn kinds(&self) -> Vec<WrapperKind> {
        match self {
            WrapperType::Bash => vec![WrapperKind::Bash],
            WrapperType::Node => vec![WrapperKind::Node],
            WrapperType::Both => vec![WrapperKind::Bash, WrapperKind::Node],
        }
    }
}

#[derive(Debug, Clone)]
pub struct WrapperOptions {
    pub name: String,
    pub title: String,
    pub version: String,
    pub subtitle: Option<String>,
    pub shell: String,
}

impl WrapperOptions {
    fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|s| !s.is_empty())
    }
}

/// Quote `text` for a single-quoted shell word.
fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

/// Quote each whitespace-separated word of a command line, so `bash -l` stays two words.
fn shell_words(command: &str) -> String {
    command
        .split_whitespace()
        .map(shell_quote)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate a bash script that shows the banner, then `exec`s its arguments or a shell
pub fn generate_shell_wrapper(art: &str, options: &WrapperOptions) -> String {
    let mut script = format!(
        "#!/bin/bash
# Generated by cli-logo
# A branded CLI wrapper for {name}

show_banner() {{
  echo {art}
",
        name = options.name,
        art = shell_quote(art),
    );

    if !options.title.is_empty() {
        let line = if options.version.is_empty() {
            format!(r"\033[36m{}\033[0m", options.title)
        } else {
            format!(
                r"\033[36m{}\033[0m \033[90mv{}\033[0m",
                options.title, options.version
            )
        };
        script.push_str(&format!("  echo -e {}\n", shell_quote(&line)));
    }

    if let Some(subtitle) = options.subtitle() {
        let line = format!(r"\033[90m{}\033[0m", subtitle);
        script.push_str(&format!("  echo -e {}\n", shell_quote(&line)));
    }

    script.push_str(&format!(
        r#"  echo
}}

# Show banner on startup
show_banner

# Execute remaining arguments or start interactive shell
if [ $# -gt 0 ]; then
  exec "$@"
else
  exec {shell}
fi
"#,
        shell = shell_words(&options.shell),
    ));

    script
}

/// Generate a Node.js script that shows the banner, then runs its arguments or a shell
pub fn generate_node_wrapper(art: &str, options: &WrapperOptions) -> String {
    format!(
        r"#!/usr/bin/env node
// Generated by cli-logo
// A branded CLI wrapper: {name}

const {{ spawn }} = require('child_process');

const LOGO = `{logo}`;
const TITLE = '{title}';
const VERSION = '{version}';
const SUBTITLE = '{subtitle}';
const SHELL = process.env.SHELL || '{default_shell}';

function showBanner() {{
  console.log(LOGO);
  if (TITLE) {{
    process.stdout.write('\x1b[36m' + TITLE + '\x1b[0m');
    if (VERSION) process.stdout.write(' \x1b[90mv' + VERSION + '\x1b[0m');
    console.log();
  }}
  if (SUBTITLE) console.log('\x1b[90m' + SUBTITLE + '\x1b[0m');
  console.log();
}}

function main() {{
  showBanner();

  // If arguments provided, run as command
  if (process.argv.length > 2) {{
    const cmd = process.argv.slice(2).join(' ');
    const child = spawn(cmd, {{
      stdio: 'inherit',
      shell: true
    }});
    child.on('exit', (code) => process.exit(code || 0));
    return;
  }}

  // Start interactive shell
  const child = spawn(SHELL, [], {{
    stdio: 'inherit'
  }});

  child.on('exit', (code) => process.exit(code || 0));
}}

main();
",
        name = options.name,
        logo = escape_template_literal(art),
        title = escape_js_string(&options.title),
        version = escape_js_string(&options.version),
        subtitle = escape_js_string(options.subtitle().unwrap_or_default()),
        default_shell = DEFAULT_SHELL,
    )
}

/// Write `contents` to `<dir>/<name><ext>` and mark it executable
///
/// # Returns
/// The path of the written script
pub fn write_wrapper(
    dir: &Path,
    name: &str,
    kind: WrapperKind,
    contents: &str,
) -> Result<PathBuf, CliError> {
    let path = dir.join(format!("{}{}", name, kind.extension()));
    fs::write(&path, contents).map_err(|e| CliError::write(&path, e))?;
    make_executable(&path)?;
    log::debug!("wrote {:?} wrapper to {}", kind, path.display());
    Ok(path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), CliError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| CliError::write(path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), CliError> {
    Ok(())
}
