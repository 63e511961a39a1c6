use crate::cli::Arguments;
use crate::error::runner_error;
use anyhow::{Context, Result};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use uniqname_registry::{NameRegistry, RegistryConfig};

/// Read candidates, issue a name for each and print them to stdout
pub fn run(args: &Arguments) -> Result<()> {
    let config = registry_config(args)?;
    let mut registry = NameRegistry::from_config(&config).context("invalid registry config")?;
    log::debug!("created registry ({} reserved names)", registry.len());
    let input = read_input(args.input.as_deref())?;
    log::debug!("read input");
    let names = uniquify(&mut registry, &input)?;
    log::debug!("issued {} names", names.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Load a `RegistryConfig` from a json file
pub fn load_config<P: AsRef<Path>>(filepath: P) -> Result<RegistryConfig> {
    let path = filepath.as_ref();
    let txt = fs::read_to_string(path).context(format!("failed to read {}", path.display()))?;
    let config = serde_json::from_str(&txt)
        .context(format!("failed to parse {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Config file (or the default) with the command line overrides applied
pub fn registry_config(args: &Arguments) -> Result<RegistryConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RegistryConfig::default(),
    };
    if let Some(sep) = &args.separator {
        config.separator = sep.clone();
    }
    if let Some(marker) = &args.empty_marker {
        config.empty_marker = marker.clone();
    }
    config.reserved.extend(args.reserved.iter().cloned());
    Ok(config)
}

/// Issue one name per line of `input`, in order.
///
/// A line is either `candidate` or `candidate<TAB>prefix`; an empty line is an
/// empty candidate.
pub fn uniquify(registry: &mut NameRegistry, input: &str) -> Result<Vec<String>> {
    let mut names = vec![];
    for (i, line) in input.lines().enumerate() {
        let lineno = i + 1;
        let (candidate, prefix) = parse_line(line, lineno)?;
        let name = registry
            .add_name_with_prefix(candidate, prefix)
            .context(format!("line {}", lineno))?;
        if name != candidate {
            log::trace!("line {}: `{}' -> `{}'", lineno, candidate, name);
        }
        names.push(name);
    }
    Ok(names)
}

fn parse_line(line: &str, lineno: usize) -> Result<(&str, &str)> {
    let mut fields = line.split('\t');
    let candidate = fields.next().unwrap_or_default();
    let prefix = fields.next().unwrap_or(candidate);
    if fields.next().is_some() {
        return Err(runner_error("expected at most one tab", lineno));
    }
    Ok((candidate, prefix))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).context(format!("failed to read {}", path.display()))
        }
        None => {
            let mut txt = String::new();
            std::io::stdin()
                .read_to_string(&mut txt)
                .context("failed to read stdin")?;
            Ok(txt)
        }
    }
}
