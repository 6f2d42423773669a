//! bracket-drawer CLI entry point.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use bracket_drawer::{DrawRequest, Format, RegionSeeding, RenderConfig, SwapPair, render_rosters};

/// Draw a 16- or 32-team single-elimination bracket from two seeded rosters.
#[derive(Parser, Debug)]
#[command(
    name = "bracket-drawer",
    version,
    about = "Draw a single-elimination tournament bracket as SVG, text or JSON"
)]
struct Cli {
    /// Total number of entrants (16 or 32)
    #[arg(short = 's', long = "size", default_value = "32")]
    size: u32,

    /// CSV roster for the left region, in seed order, with a `Team` column
    #[arg(long = "left")]
    left: PathBuf,

    /// CSV roster for the right region, in seed order, with a `Team` column
    #[arg(long = "right")]
    right: PathBuf,

    /// Title drawn across the top
    #[arg(short = 't', long = "title")]
    title: Option<String>,

    /// Image placed in the centre of the bracket
    #[arg(long = "logo")]
    logo: Option<PathBuf>,

    #[arg(long = "subtitle-left")]
    subtitle_left: Option<String>,

    #[arg(long = "subtitle-right")]
    subtitle_right: Option<String>,

    /// Social handle for the corner credit (needs --website too)
    #[arg(long = "social")]
    social_handle: Option<String>,

    /// Website for the corner credit (needs --social too)
    #[arg(long = "website")]
    website: Option<String>,

    /// Text inserted into every seed label, e.g. a class name
    #[arg(long = "suffix", default_value = "")]
    suffix: String,

    /// Swap the labels of two left-region seeds, e.g. `1,2`
    #[arg(long = "swap-left")]
    swap_left: Option<String>,

    /// Swap the labels of two right-region seeds, e.g. `1,2`
    #[arg(long = "swap-right")]
    swap_right: Option<String>,

    /// Output format: svg, text or json
    #[arg(short = 'f', long = "format", default_value = "svg")]
    format: Format,

    /// Use plain ASCII instead of Unicode box-drawing characters (text format)
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Pixels per figure inch (svg format)
    #[arg(long = "dpi", default_value = "100")]
    dpi: f64,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

fn read_roster(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("cannot read '{}': {e}", path.display())))
}

fn parse_swap(arg: Option<&str>) -> Option<SwapPair> {
    arg.map(|s| s.parse::<SwapPair>().unwrap_or_else(|e| fail(e)))
}

fn main() {
    env_logger::builder().format_target(false).init();
    let cli = Cli::parse();

    let left_csv = read_roster(&cli.left);
    let right_csv = read_roster(&cli.right);

    let left_seeding = RegionSeeding {
        swap: parse_swap(cli.swap_left.as_deref()),
        suffix: cli.suffix.clone(),
    };
    let right_seeding = RegionSeeding {
        swap: parse_swap(cli.swap_right.as_deref()),
        suffix: cli.suffix.clone(),
    };

    let request = DrawRequest {
        title: cli.title,
        logo_path: cli.logo,
        subtitle_left: cli.subtitle_left,
        subtitle_right: cli.subtitle_right,
        social_handle: cli.social_handle,
        website: cli.website,
        ..DrawRequest::default()
    };
    let config = RenderConfig {
        unicode: !cli.use_ascii,
        dpi: cli.dpi,
        ..RenderConfig::default()
    };

    let mut rendered = render_rosters(
        cli.size,
        &left_csv,
        &right_csv,
        (&left_seeding, &right_seeding),
        request,
        cli.format,
        &config,
    )
    .unwrap_or_else(|e| fail(e));
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, &rendered) {
            fail(format!("cannot write '{}': {e}", path.display()));
        }
        log::info!("wrote {}", path.display());
    } else {
        print!("{rendered}");
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {e}"));
        }
    }
}
