//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::dictionary::RadixTrie;
use crate::transducer::{Correction, Transducer};

use super::args::Commands;
use super::config::{default_config_path, CliConfig};
use super::input::{normalize, ProtocolReader};

/// Execute a CLI command.
///
/// `config_path` is the `--config` override; settings from the file are
/// merged under the command's own flags.
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<()> {
    let case_fold = command.case_fold_override();
    let skip_blank_lines = command.skip_blank_lines_override();
    let load = || -> Result<CliConfig> {
        Ok(CliConfig::load_from(config_path)?.merge_with_cli(case_fold, skip_blank_lines))
    };

    match command {
        Commands::Check { input, .. } => cmd_check(input, &load()?),
        Commands::Query { terms, dict, .. } => cmd_query(&terms, &dict, &load()?),
        Commands::Info { dict, .. } => cmd_info(&dict, &load()?),
        Commands::Settings {
            set_case_fold,
            set_skip_blank_lines,
            reset,
        } => cmd_settings(config_path, set_case_fold, set_skip_blank_lines, reset),
    }
}

/// Render one classified query the way the line protocol prints it
pub fn render(query: &str, correction: &Correction) -> String {
    match correction {
        Correction::Exact(_) => format!("{} - ok", query),
        Correction::Suggestions(words) => format!("{} -> {}", query, words.join(", ")),
        Correction::NoMatch => format!("{} -?", query),
    }
}

/// Run the line protocol from `reader`, writing one line per query to `out`.
///
/// Queries are looked up normalized but echoed as typed.
pub fn run_check<R: BufRead, W: Write>(reader: R, out: &mut W, config: &CliConfig) -> Result<()> {
    let mut protocol = ProtocolReader::new(reader, config.case_fold());
    let words = protocol.read_dictionary()?;
    let transducer = Transducer::new(RadixTrie::from_terms(&words));

    let mut checked = 0usize;
    while let Some(line) = protocol.next_query()? {
        if line.is_empty() && config.skip_blank_lines() {
            continue;
        }
        let correction = transducer.correct(&normalize(&line, config.case_fold()));
        writeln!(out, "{}", render(&line, &correction))?;
        checked += 1;
    }

    debug!("Checked {} queries against {} words", checked, words.len());
    out.flush()?;
    Ok(())
}

/// Load dictionary words from a file, one per line.
///
/// Blank lines and lines starting with `#` are ignored.
pub fn load_terms(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dictionary file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut terms = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!("Failed to read line {} from {}", line_num + 1, path.display())
        })?;
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            terms.push(trimmed.to_string());
        }
    }

    if terms.is_empty() {
        bail!("Dictionary file is empty: {}", path.display());
    }

    Ok(terms)
}

/// Build the trie for a dictionary file, normalized the way queries are.
pub fn load_dictionary(path: &Path, config: &CliConfig) -> Result<RadixTrie> {
    let terms = load_terms(path)?;
    Ok(terms
        .iter()
        .map(|word| normalize(word, config.case_fold()))
        .collect())
}

/// Apply settings changes to the config file at `path` and return the result.
///
/// A missing file starts from defaults. The file is only written when
/// something changed.
pub fn update_settings(
    path: &Path,
    set_case_fold: Option<bool>,
    set_skip_blank_lines: Option<bool>,
    reset: bool,
) -> Result<CliConfig> {
    if reset {
        let config = CliConfig::default();
        config.save_to(path)?;
        return Ok(config);
    }

    let mut config = if path.exists() {
        CliConfig::load_from(Some(path))?
    } else {
        CliConfig::default()
    };

    if set_case_fold.is_some() || set_skip_blank_lines.is_some() {
        config = config.merge_with_cli(set_case_fold, set_skip_blank_lines);
        config.save_to(path)?;
    }

    Ok(config)
}

fn cmd_check(input: Option<PathBuf>, config: &CliConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            run_check(BufReader::new(file), &mut out, config)
        }
        None => run_check(io::stdin().lock(), &mut out, config),
    }
}

fn cmd_query(terms: &[String], dict_path: &Path, config: &CliConfig) -> Result<()> {
    let transducer = Transducer::new(load_dictionary(dict_path, config)?);

    for term in terms {
        let correction = transducer.correct(&normalize(term, config.case_fold()));
        let line = render(term, &correction);
        match correction {
            Correction::Exact(_) => println!("{}", line.green()),
            Correction::Suggestions(_) => println!("{}", line.yellow()),
            Correction::NoMatch => println!("{}", line.red()),
        }
    }

    Ok(())
}

fn cmd_info(dict_path: &Path, config: &CliConfig) -> Result<()> {
    let trie = load_dictionary(dict_path, config)?;

    println!("{}", "Dictionary Information".bold().underline());
    println!();
    println!("  Path:    {}", dict_path.display().to_string().cyan());
    println!("  Terms:   {}", trie.len().to_string().green());
    println!("  Nodes:   {}", trie.node_count().to_string().green());
    if !trie.is_empty() {
        let ratio = trie.node_count() as f64 / trie.len() as f64;
        println!("  Ratio:   {:.2}x", ratio);
    }
    println!();

    Ok(())
}

fn cmd_settings(
    config_path: Option<&Path>,
    set_case_fold: Option<bool>,
    set_skip_blank_lines: Option<bool>,
    reset: bool,
) -> Result<()> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };
    let changed = reset || set_case_fold.is_some() || set_skip_blank_lines.is_some();
    let config = update_settings(&path, set_case_fold, set_skip_blank_lines, reset)?;

    if reset {
        println!("{}", "Configuration reset to defaults".green().bold());
    } else if changed {
        println!("{}", "Configuration saved".green().bold());
    }

    println!("{}", "Current Configuration:".bold().underline());
    println!();
    println!("  File:             {}", path.display().to_string().cyan());
    println!("  Case fold:        {}", config.case_fold().to_string().green());
    println!(
        "  Skip blank lines: {}",
        config.skip_blank_lines().to_string().green()
    );
    println!();

    Ok(())
}
