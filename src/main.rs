//! Perun CLI - Command-line tool for DDS texture inspection and conversion.
//!
//! This is the main entry point for the Perun command-line application.

use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use perun::prelude::*;

/// Perun - DDS texture inspection and conversion tool
#[derive(Parser)]
#[command(name = "perun")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show texture layout for a DDS file
    Info {
        /// Input DDS file
        #[arg(short, long)]
        input: PathBuf,

        /// Show per-level dimensions and sizes
        #[arg(short, long)]
        detailed: bool,
    },

    /// Extract every mip level of every DDS file under a folder
    Extract {
        /// Folder scanned recursively for DDS files
        #[arg(short, long, env = "INPUT_FOLDER")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, env = "OUTPUT_FOLDER")]
        output: PathBuf,

        /// Filter pattern for file names (glob-style)
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Convert an uncompressed DDS image to PNG
    ToPng {
        /// Input DDS file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Mip level to convert
        #[arg(short, long, default_value_t = 0)]
        level: u32,
    },

    /// Rewrite a DDS file with its mip chain stripped
    Flatten {
        /// Input DDS file
        #[arg(short, long)]
        input: PathBuf,

        /// Output DDS file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input, detailed } => {
            cmd_info(&input, detailed)?;
        }
        Commands::Extract { input, output, filter } => {
            cmd_extract(&input, &output, filter.as_deref())?;
        }
        Commands::ToPng { input, output, level } => {
            cmd_to_png(&input, &output, level)?;
        }
        Commands::Flatten { input, output } => {
            cmd_flatten(&input, &output)?;
        }
    }

    Ok(())
}

fn cmd_info(input: &PathBuf, detailed: bool) -> Result<()> {
    let texture = read_texture(input)?;

    println!(
        "{}: {} texture, {}, {} images",
        input.display(),
        texture.kind().as_str(),
        texture.format().as_str(),
        texture.images().len()
    );

    if detailed {
        for image in texture.images() {
            println!(
                "  level {:>2}: {:>5} x {:<5} depth {:>4} {:>10} bytes",
                image.level(),
                image.width(),
                image.height(),
                image.depth(),
                image.data().capacity()
            );
        }
    }

    Ok(())
}

fn cmd_extract(input: &PathBuf, output: &PathBuf, filter: Option<&str>) -> Result<()> {
    println!("Scanning: {}", input.display());

    let start = Instant::now();
    let mut files = Vec::new();
    for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        let is_dds = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("dds"))
            .unwrap_or(false);
        if !is_dds {
            continue;
        }
        if let Some(pattern) = filter {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if !name_matches(pattern, name) {
                continue;
            }
        }
        files.push(path);
    }

    println!("Found {} texture files in {:?}", files.len(), start.elapsed());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    fs::create_dir_all(output)?;

    let start = Instant::now();
    let mut extracted = 0;
    let mut errors = 0;

    for path in &files {
        match extract_levels(path, output) {
            Ok(count) => extracted += count,
            Err(e) => {
                eprintln!("Error extracting {}: {}", path.display(), e);
                errors += 1;
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");
    println!(
        "Extracted {} mip levels in {:?} ({} errors)",
        extracted,
        start.elapsed(),
        errors
    );

    Ok(())
}

/// Write each mip level of one texture as a standalone single-level DDS file.
fn extract_levels(path: &Path, output: &Path) -> Result<usize> {
    let texture = read_texture(path)?;
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("texture");
    let kind = texture.kind();
    let format = texture.format();

    let mut written = 0;
    for image in texture.into_images() {
        let level = image.level();
        let (width, height, depth) = (image.width(), image.height(), image.depth());
        let base = Image::new(format, width, height, depth, 0, image.into_data());
        let single = DdsTexture::new(kind, format, vec![base]);

        let output_path = output.join(format!("{stem}.{level}.dds"));
        let mut file = fs::File::create(&output_path)
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        single.write_to(&mut file)?;
        written += 1;
    }

    Ok(written)
}

fn cmd_to_png(input: &PathBuf, output: &PathBuf, level: u32) -> Result<()> {
    println!("Converting: {} -> {}", input.display(), output.display());

    let texture = read_texture(input)?;
    let format = texture.format();

    if texture.kind() != TextureKind::Tex2D {
        anyhow::bail!("Only 2D textures convert to PNG");
    }

    let image = texture
        .into_images()
        .into_iter()
        .find(|image| image.level() == level)
        .with_context(|| format!("Texture has no mip level {}", level))?;

    let width = image.width();
    let height = image.height();
    let data = image.into_data().into_vec();

    match format {
        ImageFormat::Red => {
            let img = image::GrayImage::from_raw(width, height, data)
                .context("Payload size does not match image dimensions")?;
            img.save(output).context("Failed to write PNG")?;
        }
        ImageFormat::Rg => {
            let img = image::GrayAlphaImage::from_raw(width, height, data)
                .context("Payload size does not match image dimensions")?;
            img.save(output).context("Failed to write PNG")?;
        }
        ImageFormat::Rgb => {
            let img = image::RgbImage::from_raw(width, height, data)
                .context("Payload size does not match image dimensions")?;
            img.save(output).context("Failed to write PNG")?;
        }
        ImageFormat::Rgba => {
            let img = image::RgbaImage::from_raw(width, height, data)
                .context("Payload size does not match image dimensions")?;
            img.save(output).context("Failed to write PNG")?;
        }
        _ => anyhow::bail!(
            "{} is block compressed; only uncompressed formats convert to PNG",
            format.as_str()
        ),
    }

    println!("Conversion complete");

    Ok(())
}

fn cmd_flatten(input: &PathBuf, output: &PathBuf) -> Result<()> {
    println!("Flattening: {} -> {}", input.display(), output.display());

    let texture = read_texture(input)?;
    let kind = texture.kind();
    let format = texture.format();
    let total = texture.images().len();

    let base: Vec<Image> = texture
        .into_images()
        .into_iter()
        .filter(|image| image.level() == 0)
        .collect();
    let dropped = total - base.len();

    let flattened = DdsTexture::new(kind, format, base);
    let mut file = fs::File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    flattened.write_to(&mut file)?;

    println!("Dropped {} mip levels", dropped);

    Ok(())
}

fn read_texture(path: &Path) -> Result<DdsTexture> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);
    DdsTexture::read(&mut reader)
        .with_context(|| format!("Failed to decode {}", path.display()))
}

/// Simple wildcard matching for file name filters.
fn name_matches(pattern: &str, name: &str) -> bool {
    let pattern = pattern.to_lowercase();
    let name = name.to_lowercase();

    if !pattern.contains('*') {
        return name.contains(&pattern);
    }

    let anchored_start = !pattern.starts_with('*');
    let anchored_end = !pattern.ends_with('*');
    let mut rest = name.as_str();

    for (i, part) in pattern.split('*').filter(|p| !p.is_empty()).enumerate() {
        match rest.find(part) {
            Some(at) if i == 0 && anchored_start && at != 0 => return false,
            Some(at) => rest = &rest[at + part.len()..],
            None => return false,
        }
    }

    !anchored_end || rest.is_empty()
}
