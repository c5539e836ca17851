use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cardsmith", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a card to a PNG.
    Render(RenderArgs),
    /// Print the share string for a card JSON file.
    Encode(EncodeArgs),
    /// Print the card JSON for a share string.
    Decode(DecodeArgs),
    /// Print the default card as JSON.
    Template,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Card JSON or share string file.
    #[arg(long)]
    card: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Studio options JSON.
    #[arg(long)]
    opts: Option<PathBuf>,

    /// Artwork image (PNG, JPEG or SVG).
    #[arg(long)]
    artwork: Option<PathBuf>,

    /// Overrides `global_scale` from the options.
    #[arg(long)]
    scale: Option<f64>,

    /// Overlay readable fields on the default card instead of rejecting bad input.
    #[arg(long)]
    lenient: bool,
}

#[derive(Parser, Debug)]
struct EncodeArgs {
    /// Card JSON file.
    #[arg(long)]
    card: PathBuf,
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// Share string.
    data: String,

    #[arg(long)]
    lenient: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Encode(args) => cmd_encode(args),
        Command::Decode(args) => cmd_decode(args),
        Command::Template => {
            println!("{}", serde_json::to_string_pretty(&cardsmith::Card::default())?);
            Ok(())
        }
    }
}

fn decode_mode(lenient: bool) -> cardsmith::DecodeMode {
    if lenient {
        cardsmith::DecodeMode::Lenient
    } else {
        cardsmith::DecodeMode::Strict
    }
}

fn read_card(path: &Path, mode: cardsmith::DecodeMode) -> anyhow::Result<cardsmith::Card> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read card '{}'", path.display()))?;
    let trimmed = text.trim();
    if trimmed.starts_with('{') && mode == cardsmith::DecodeMode::Strict {
        let card: cardsmith::Card = serde_json::from_str(trimmed)
            .with_context(|| format!("parse card JSON '{}'", path.display()))?;
        card.validate()
            .with_context(|| format!("invalid card '{}'", path.display()))?;
        return Ok(card);
    }
    Ok(cardsmith::decode_card(trimmed, mode)?)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut opts = match &args.opts {
        Some(path) => cardsmith::StudioOpts::from_json_file(path)?,
        None => cardsmith::StudioOpts::default(),
    };
    if let Some(scale) = args.scale {
        opts.global_scale = scale;
    }
    opts.validate()?;

    let card = read_card(&args.card, decode_mode(args.lenient))?;
    let fonts = cardsmith::FontBook::load(&opts.fonts_dir)?;
    let backend = cardsmith::CpuBackend::new(fonts, opts.global_scale)?;
    let compositor = cardsmith::Compositor::new(backend, opts.clear_color);

    let out_dir = args
        .out
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = args
        .out
        .file_name()
        .and_then(|n| n.to_str())
        .map_or_else(|| opts.output_file_name.clone(), str::to_owned);

    let studio = cardsmith::CardStudio::new(
        compositor,
        cardsmith::FsAssetSource::new(&opts.assets_root),
        cardsmith::FileSink::new(out_dir),
        card,
        file_name,
    );
    if let Some(path) = &args.artwork {
        let bytes =
            std::fs::read(path).with_context(|| format!("read artwork '{}'", path.display()))?;
        let image = cardsmith::assets::decode::decode_asset(&path.to_string_lossy(), &bytes)?;
        studio.set_artwork(Some(image));
    }

    studio.request_export();
    futures::executor::block_on(studio.pump())?;
    for layer in studio.last_report().iter().filter(|l| !l.assets_ok) {
        eprintln!("warning: layer {:?} is missing assets", layer.id);
    }

    match studio.download()? {
        cardsmith::DownloadOutcome::Saved => eprintln!("wrote {}", args.out.display()),
        other => anyhow::bail!("card was not saved: {other:?}"),
    }
    Ok(())
}

fn cmd_encode(args: EncodeArgs) -> anyhow::Result<()> {
    let card = read_card(&args.card, cardsmith::DecodeMode::Strict)?;
    println!("{}", cardsmith::encode_card(&card)?);
    Ok(())
}

fn cmd_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let card = cardsmith::decode_card(args.data.trim(), decode_mode(args.lenient))?;
    println!("{}", serde_json::to_string_pretty(&card)?);
    Ok(())
}
