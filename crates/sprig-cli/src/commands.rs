//! Subcommand implementations.

use anyhow::{Context, Result};
use sprig_codegen::{Compilation, CompileOptions, Compiler, PageDocument};
use sprig_design::{embed_url, extract_file_key, read_document};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::{Cli, Commands, OptionArgs, OutputArgs};

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Compile {
            input,
            output,
            options,
        } => {
            let compiler = Compiler::new(load_options(&options)?);
            let compilation = compiler
                .compile_json(&read_input(&input)?)
                .with_context(|| format!("Failed to compile {}", input.display()))?;
            emit(&compilation, &output, &compiler)
        }
        Commands::Analyze { input, options } => {
            let compiler = Compiler::new(load_options(&options)?);
            let file = read_document(&read_input(&input)?)
                .with_context(|| format!("Failed to read design export {}", input.display()))?;
            let frames = compiler.analyze(file.document.as_ref());
            println!("{}", serde_json::to_string_pretty(&frames)?);
            Ok(())
        }
        Commands::Generate {
            frames,
            output,
            options,
        } => {
            let compiler = Compiler::new(load_options(&options)?);
            let compilation = compiler
                .generate_json(&read_input(&frames)?)
                .with_context(|| format!("Failed to generate from {}", frames.display()))?;
            emit(&compilation, &output, &compiler)
        }
        Commands::FileKey { url } => {
            println!("{}", extract_file_key(&url)?);
            println!("{}", embed_url(&url)?);
            Ok(())
        }
    }
}

/// Read a file, or stdin for `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Options from the `--config` file, if any, with flags applied on top.
fn load_options(args: &OptionArgs) -> Result<CompileOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => CompileOptions::default(),
    };
    if let Some(title) = &args.title {
        options.page.title = title.clone();
    }
    if args.no_tailwind {
        options.page.tailwind_cdn = None;
    }
    Ok(options)
}

fn emit(compilation: &Compilation, output: &OutputArgs, compiler: &Compiler) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(compilation)?);
        return Ok(());
    }
    let written = write_page(
        &compilation.page,
        &output.out,
        &compiler.options().page.components_dir,
    )?;
    info!(files = written.len(), out = %output.out.display(), "wrote page");
    eprintln!(
        "Generated {} components from {} frames ({} skipped, {} duplicates)",
        compilation.diagnostics.generated_components,
        compilation.diagnostics.total_frames,
        compilation.diagnostics.skipped_frames,
        compilation.diagnostics.rejected_duplicates,
    );
    Ok(())
}

/// Write the page and its components under `out`, returning the paths
/// written.
///
/// Components go into `components_dir` resolved against `out`, matching the
/// page's import paths.
fn write_page(page: &PageDocument, out: &Path, components_dir: &str) -> Result<Vec<PathBuf>> {
    let dir = out.join(components_dir);
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut written = Vec::with_capacity(page.components.len() + 1);
    for component in &page.components {
        let path = dir.join(component.file_name());
        fs::write(&path, &component.source)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    let index = out.join(PageDocument::FILE_NAME);
    fs::write(&index, &page.source).with_context(|| format!("Failed to write {}", index.display()))?;
    written.push(index);
    Ok(written)
}
