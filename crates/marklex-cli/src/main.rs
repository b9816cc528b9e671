use anyhow::{Context, Result, bail};
use marklex_config::Config;
use marklex_syntax::{MarkerCatalog, Token, tokenize};
use std::{
    env,
    io::{self, BufWriter, Read, Write},
    path::{Path, PathBuf},
    process,
};

/// Parsed command-line options.
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    config: Option<PathBuf>,
    /// Write the default config instead of tokenizing.
    init_config: bool,
    /// `None` reads stdin.
    input: Option<PathBuf>,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--config <path>] [<file>|-]\n       {program} [--config <path>] --init-config"
    )
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = rest.next().context("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--init-config" => options.init_config = true,
            "-" => options.input = None,
            flag if flag.starts_with('-') => bail!("unknown option: {flag}"),
            path => {
                if options.input.is_some() {
                    bail!("only one input file may be given");
                }
                options.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(options)
}

/// Explicit config path, else the default config file, else the built-in catalog.
fn load_catalog(config: Option<&PathBuf>) -> Result<MarkerCatalog> {
    let loaded = match config {
        Some(path) => {
            let config = Config::load_from_path(path)?
                .with_context(|| format!("config file not found: {}", path.display()))?;
            Some(config)
        }
        None => Config::load()?,
    };

    match loaded {
        Some(config) => {
            log::info!("Using marker catalog from config");
            Ok(config.catalog()?)
        }
        None => {
            log::info!("No config file, using the markdown catalog");
            Ok(MarkerCatalog::markdown())
        }
    }
}

/// Writes the built-in catalog as a config file, refusing to overwrite one.
fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("config file already exists: {}", path.display());
    }
    Config::default()
        .save_to_path(path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    log::info!("Wrote default config to {}", path.display());
    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// One token per line: kind, tab, debug-quoted text.
fn write_tokens(out: &mut impl Write, tokens: &[Token<'_>]) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{}\t{:?}", token.kind(), token.text())?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", usage(&args[0]));
        return Ok(());
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(&args[0]));
            process::exit(2);
        }
    };

    if options.init_config {
        let path = options.config.unwrap_or_else(Config::config_path);
        init_config(&path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let catalog = load_catalog(options.config.as_ref())?;
    let text = read_input(options.input.as_ref())?;

    let tokens = tokenize(&catalog, &text);
    log::debug!("{} tokens", tokens.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_tokens(&mut out, &tokens)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("marklex")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parse_no_args_reads_stdin() {
        assert_eq!(parse_args(&args(&[])).unwrap(), Options::default());
        assert_eq!(parse_args(&args(&["-"])).unwrap(), Options::default());
    }

    #[test]
    fn parse_config_and_file() {
        let options = parse_args(&args(&["--config", "m.toml", "doc.md"])).unwrap();
        assert_eq!(
            options,
            Options {
                config: Some(PathBuf::from("m.toml")),
                input: Some(PathBuf::from("doc.md")),
                ..Options::default()
            }
        );
    }

    #[test]
    fn parse_init_config() {
        let options = parse_args(&args(&["--init-config", "--config", "m.toml"])).unwrap();
        assert!(options.init_config);
        assert_eq!(options.config, Some(PathBuf::from("m.toml")));
    }

    #[test]
    fn parse_rejects_bad_args() {
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--verbose"])).is_err());
        assert!(parse_args(&args(&["a.md", "b.md"])).is_err());
    }

    #[test]
    fn write_tokens_format() {
        let tokens = tokenize(&MarkerCatalog::markdown(), "# _a_\n");
        let mut out = Vec::new();
        write_tokens(&mut out, &tokens).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "BlockMarker\t\"# \"\n\
             OpenDelimiter\t\"_\"\n\
             Text\t\"a\"\n\
             CloseDelimiter\t\"_\"\n\
             Text\t\"\\n\"\n"
        );
    }

    #[test]
    fn load_catalog_from_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[catalog]\npaired = [\"==\"]\n").unwrap();

        let catalog = load_catalog(Some(&config_file)).unwrap();
        let tokens = tokenize(&catalog, "==hi==\n");
        assert_eq!(tokens[0], Token::OpenDelimiter("=="));
    }

    #[test]
    fn load_catalog_missing_explicit_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(load_catalog(Some(&missing)).is_err());
    }

    #[test]
    fn init_config_writes_loadable_markdown_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        init_config(&config_file).unwrap();
        let catalog = load_catalog(Some(&config_file)).unwrap();

        let input = "# _a_ **b**\n";
        assert_eq!(
            tokenize(&catalog, input),
            tokenize(&MarkerCatalog::markdown(), input)
        );
    }

    #[test]
    fn init_config_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[catalog]\npaired = [\"==\"]\n").unwrap();

        assert!(init_config(&config_file).is_err());
        assert_eq!(
            std::fs::read_to_string(&config_file).unwrap(),
            "[catalog]\npaired = [\"==\"]\n"
        );
    }

    #[test]
    fn read_input_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let doc = temp_dir.path().join("doc.md");
        std::fs::write(&doc, "_x_\n").unwrap();

        assert_eq!(read_input(Some(&doc)).unwrap(), "_x_\n");
    }
}
