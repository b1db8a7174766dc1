//! Command handlers for `convert` and `init`.

use std::fs;
use std::path::{Path, PathBuf};

use logo_rendr::{RESET, RenderOptions, process_path};

use crate::args::{ConvertArgs, InitArgs, WrapperType};
use crate::banner::{Banner, CYAN, generate_banner, generate_code};
use crate::error::CliError;
use crate::wrapper::{DEFAULT_SHELL, WrapperKind, WrapperOptions, write_wrapper};

pub const GREEN: &str = "\x1b[32m";

/// Title used by `--code` when none is given.
const DEFAULT_CODE_TITLE: &str = "My CLI";
const DEFAULT_CODE_VERSION: &str = "1.0.0";

/// Resolve `image` and render it with `options`
pub fn render_image(image: &Path, options: &RenderOptions) -> Result<String, CliError> {
    options.validate()?;

    let resolved = std::path::absolute(image).unwrap_or_else(|_| image.to_path_buf());
    if !resolved.exists() {
        return Err(CliError::ImageNotFound(resolved));
    }

    Ok(process_path(&resolved, options)?)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Build the text `convert` emits for already rendered art
pub fn convert_output(art: &str, args: &ConvertArgs) -> String {
    if args.code {
        generate_code(
            art,
            non_empty(&args.title).unwrap_or(DEFAULT_CODE_TITLE),
            non_empty(&args.ver).unwrap_or(DEFAULT_CODE_VERSION),
            args.subtitle.as_deref(),
        )
    } else {
        let banner = Banner {
            title: args.title.clone(),
            subtitle: args.subtitle.clone(),
            version: args.ver.clone(),
            ..Default::default()
        };
        generate_banner(art, &banner)
    }
}

/// Run the `convert` command
pub fn convert(args: &ConvertArgs) -> Result<(), CliError> {
    let art = render_image(&args.image, &args.render.to_options(args.width))?;
    let output = convert_output(&art, args);

    match &args.output {
        Some(path) => {
            fs::write(path, &output).map_err(|e| CliError::write(path, e))?;
            println!("{GREEN}✓ Saved to {}{RESET}", path.display());
        }
        None => println!("{output}"),
    }
    Ok(())
}

/// Wrapper settings for `init`, falling back to `env_shell` then `/bin/bash`
pub fn wrapper_options(args: &InitArgs, env_shell: Option<String>) -> WrapperOptions {
    let title = if args.title.is_empty() {
        args.name.clone()
    } else {
        args.title.clone()
    };

    WrapperOptions {
        name: args.name.clone(),
        title,
        version: args.ver.clone(),
        subtitle: args.subtitle.clone(),
        shell: args
            .shell
            .clone()
            .or(env_shell)
            .unwrap_or_else(|| DEFAULT_SHELL.to_string()),
    }
}

/// Write the selected wrapper scripts into `dir`, creating it if needed
pub fn create_wrappers(
    art: &str,
    options: &WrapperOptions,
    dir: &Path,
    kind: WrapperType,
) -> Result<Vec<(WrapperKind, PathBuf)>, CliError> {
    fs::create_dir_all(dir).map_err(|e| CliError::write(dir, e))?;

    kind.kinds()
        .into_iter()
        .map(|script_kind| {
            let script = script_kind.generate(art, options);
            write_wrapper(dir, &options.name, script_kind, &script).map(|path| (script_kind, path))
        })
        .collect()
}

/// Usage and install hints printed after `init`
pub fn usage_hint(name: &str, created: &[(WrapperKind, PathBuf)]) -> String {
    let mut out = format!("\n{CYAN}Usage:{RESET}\n");
    for (kind, _) in created {
        let ext = kind.extension();
        out.push_str(&format!(
            "  ./{name}{ext}              # Start interactive shell with banner\n"
        ));
        out.push_str(&format!("  ./{name}{ext} ls -la       # Run a command with banner\n"));
    }

    if let Some((_, main_file)) = created.first() {
        out.push_str(&format!("\n{CYAN}To install globally:{RESET}\n"));
        out.push_str(&format!(
            "  sudo cp {} /usr/local/bin/{name}\n",
            main_file.display()
        ));
        out.push_str(&format!("  # Then just run: {name}\n"));
    }
    out
}

/// Run the `init` command
pub fn init(args: &InitArgs) -> Result<(), CliError> {
    let art = render_image(&args.image, &args.render.to_options(args.width))?;
    let options = wrapper_options(args, std::env::var("SHELL").ok());
    let dir = std::path::absolute(&args.dir).unwrap_or_else(|_| args.dir.clone());

    let created = create_wrappers(&art, &options, &dir, args.kind)?;
    for (_, path) in &created {
        println!("{GREEN}✓ Created {}{RESET}", path.display());
    }
    print!("{}", usage_hint(&args.name, &created));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Cli, Command};
    use clap::Parser;
    use image::{Rgba, RgbaImage};

    fn write_logo(dir: &Path) -> PathBuf {
        let path = dir.join("logo.png");
        let mut img = RgbaImage::from_pixel(40, 40, Rgba([255, 255, 255, 255]));
        for y in 15..25 {
            for x in 15..25 {
                img.put_pixel(x, y, Rgba([200, 30, 30, 255]));
            }
        }
        img.save(&path).unwrap();
        path
    }

    fn convert_args(args: &[&str]) -> ConvertArgs {
        match Cli::try_parse_from(args).unwrap().command {
            Command::Convert(args) => args,
            other => panic!("expected convert, got {other:?}"),
        }
    }

    fn init_args(args: &[&str]) -> InitArgs {
        match Cli::try_parse_from(args).unwrap().command {
            Command::Init(args) => args,
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn test_render_image_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        let result = render_image(&missing, &RenderOptions::default());
        assert!(matches!(result, Err(CliError::ImageNotFound(path)) if path == missing));
    }

    #[test]
    fn test_render_image_background_removed() {
        let dir = tempfile::tempdir().unwrap();
        let logo = write_logo(dir.path());
        let options = RenderOptions {
            width: 20,
            background_transparent: true,
            ..Default::default()
        };
        let art = render_image(&logo, &options).unwrap();
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), 10);
        // Top row is pure canvas
        assert_eq!(lines[0], "\x1b[0m ".repeat(20));
        assert!(art.contains("\x1b[38;2;"));
    }

    #[test]
    fn test_convert_output_code_defaults() {
        let args = convert_args(&["cli-logo", "convert", "logo.png", "--code"]);
        let out = convert_output("@\n", &args);
        assert!(out.contains("My CLI"));
        assert!(out.contains("v1.0.0"));
    }

    #[test]
    fn test_convert_output_code_empty_values_fall_back() {
        let args = convert_args(&["cli-logo", "convert", "logo.png", "--code", "-t", "", "-v", ""]);
        let out = convert_output("@\n", &args);
        assert!(out.contains("My CLI"));
        assert!(out.contains("v1.0.0"));
    }

    #[test]
    fn test_convert_output_banner() {
        let args = convert_args(&["cli-logo", "convert", "logo.png", "-t", "Acme"]);
        let out = convert_output("@\n", &args);
        assert_eq!(out, "\n@\n\n\x1b[36mAcme\x1b[0m\n\n");
    }

    #[test]
    fn test_convert_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let logo = write_logo(dir.path());
        let out_path = dir.path().join("banner.txt");
        let args = convert_args(&[
            "cli-logo",
            "convert",
            logo.to_str().unwrap(),
            "-w",
            "10",
            "-c",
            "none",
            "-s",
            "detailed",
            "-o",
            out_path.to_str().unwrap(),
        ]);

        convert(&args).unwrap();

        let written = fs::read_to_string(&out_path).unwrap();
        assert!(written.starts_with('\n'));
        assert_eq!(written.trim_matches('\n').lines().count(), 5);
        assert!(!written.contains('\x1b'));
    }

    #[test]
    fn test_wrapper_options_fallbacks() {
        let args = init_args(&["cli-logo", "init", "logo.png", "acme"]);
        let opts = wrapper_options(&args, Some("/usr/bin/fish".into()));
        assert_eq!(opts.title, "acme");
        assert_eq!(opts.version, "1.0.0");
        assert_eq!(opts.shell, "/usr/bin/fish");

        let opts = wrapper_options(&args, None);
        assert_eq!(opts.shell, DEFAULT_SHELL);

        let args = init_args(&[
            "cli-logo", "init", "logo.png", "acme", "-t", "ACME", "--shell", "/bin/sh",
        ]);
        let opts = wrapper_options(&args, Some("/usr/bin/fish".into()));
        assert_eq!(opts.title, "ACME");
        assert_eq!(opts.shell, "/bin/sh");
    }

    #[test]
    fn test_create_wrappers_both() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("bin");
        let args = init_args(&["cli-logo", "init", "logo.png", "acme"]);
        let opts = wrapper_options(&args, None);

        let created = create_wrappers("@\n", &opts, &target, WrapperType::Both).unwrap();

        assert_eq!(created.len(), 2);
        assert_eq!(created[0], (WrapperKind::Bash, target.join("acme.sh")));
        assert_eq!(created[1], (WrapperKind::Node, target.join("acme.js")));
        let bash = fs::read_to_string(target.join("acme.sh")).unwrap();
        assert!(bash.contains("exec '/bin/bash'"));
    }

    #[test]
    fn test_init_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let logo = write_logo(dir.path());
        let out_dir = dir.path().join("out");
        let args = init_args(&[
            "cli-logo",
            "init",
            logo.to_str().unwrap(),
            "acme",
            "--type",
            "node",
            "-d",
            out_dir.to_str().unwrap(),
        ]);

        init(&args).unwrap();

        assert!(out_dir.join("acme.js").exists());
        assert!(!out_dir.join("acme.sh").exists());
    }

    #[test]
    fn test_usage_hint() {
        let created = vec![
            (WrapperKind::Bash, PathBuf::from("/tmp/acme.sh")),
            (WrapperKind::Node, PathBuf::from("/tmp/acme.js")),
        ];
        let hint = usage_hint("acme", &created);
        assert!(hint.contains("./acme.sh ls -la"));
        assert!(hint.contains("./acme.js              # Start interactive shell"));
        assert!(hint.contains("sudo cp /tmp/acme.sh /usr/local/bin/acme"));
        assert!(hint.contains("# Then just run: acme"));
    }
}
