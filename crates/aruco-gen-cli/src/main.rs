//! `aruco-gen`: render ArUco markers to PNG files, optionally arranged on
//! print-ready pages.

use aruco_gen_print::{
    compose_page, render_marker, LayoutError, MarkerSpec, PageLayoutSpec, PaperFormat,
    RenderError,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aruco-gen")]
#[command(about = "Generate ArUco markers for computer vision applications", version)]
struct Args {
    /// Marker ID to generate (start ID in batch mode)
    #[arg(long, default_value_t = 0)]
    id: u32,

    /// ArUco dictionary to use, e.g. DICT_4X4_50 or DICT_6X6_250
    #[arg(long, default_value = "DICT_4X4_50")]
    dict: String,

    /// Marker size in pixels
    #[arg(long, default_value_t = 200)]
    size: u32,

    /// Output file path (default: aruco_marker_<ID>.png, or
    /// aruco_print_<format>.png in layout mode)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Generate this many markers, with IDs starting from --id
    #[arg(long, value_name = "COUNT", conflicts_with = "print_layout")]
    multiple: Option<u32>,

    /// Output directory for batch mode
    #[arg(long, default_value = "aruco_markers")]
    output_dir: PathBuf,

    /// Arrange markers on a print-ready page of the given format
    #[arg(long, value_enum, value_name = "FORMAT")]
    print_layout: Option<FormatArg>,

    /// Markers per layout page (default depends on the format)
    #[arg(long)]
    count: Option<u32>,

    /// Layout resolution in dots per inch
    #[arg(long, default_value_t = 300)]
    dpi: u32,

    /// Layout page margin in millimeters
    #[arg(long, default_value_t = 10.0)]
    margin: f64,

    /// Skip the ID caption beneath each marker in layout mode
    #[arg(long)]
    no_labels: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Creditcard,
    A4,
    A5,
}

impl From<FormatArg> for PaperFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Creditcard => PaperFormat::CreditCard,
            FormatArg::A4 => PaperFormat::A4,
            FormatArg::A5 => PaperFormat::A5,
        }
    }
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::debug!("parsed arguments: {args:?}");
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    if let Some(format) = args.print_layout {
        print_layout(args, format.into())
    } else if let Some(count) = args.multiple {
        generate_multiple(args, count)
    } else {
        generate_single(args)
    }
}

fn generate_single(args: &Args) -> Result<(), CliError> {
    let spec = MarkerSpec::new(&args.dict, args.id, args.size)?;
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("aruco_marker_{}.png", args.id)));

    render_marker(&spec).save(&path)?;
    println!("ArUco marker {} saved to {}", args.id, path.display());
    Ok(())
}

fn generate_multiple(args: &Args, count: u32) -> Result<(), CliError> {
    // Validate the whole ID range up front so a bad range writes nothing.
    // Saturating add: a wrapped id is out of range for every dictionary.
    let specs: Vec<MarkerSpec> = (0..count)
        .map(|i| MarkerSpec::new(&args.dict, args.id.saturating_add(i), args.size))
        .collect::<Result<_, _>>()?;

    std::fs::create_dir_all(&args.output_dir)?;
    for spec in &specs {
        let path = args
            .output_dir
            .join(format!("aruco_marker_{}.png", spec.id));
        render_marker(spec).save(&path)?;
        println!("ArUco marker {} saved to {}", spec.id, path.display());
    }

    println!(
        "Generated {count} markers in '{}' directory",
        args.output_dir.display()
    );
    Ok(())
}

fn print_layout(args: &Args, format: PaperFormat) -> Result<(), CliError> {
    let count = args.count.unwrap_or_else(|| format.default_count());
    let mut layout = PageLayoutSpec::new(format, args.dpi, args.margin, count)?;
    if args.no_labels {
        layout = layout.without_labels();
    }

    let markers: Vec<(u32, image::GrayImage)> = (0..count)
        .map(|i| {
            let spec = MarkerSpec::new(&args.dict, args.id.saturating_add(i), args.size)?;
            Ok((spec.id, render_marker(&spec)))
        })
        .collect::<Result<_, RenderError>>()?;

    let page = compose_page(&layout, &markers)?;
    let path = default_layout_path(args, format);
    page.save(&path)?;
    println!(
        "{} layout with {} marker(s) saved to {}",
        format,
        count,
        path.display()
    );
    Ok(())
}

fn default_layout_path(args: &Args, format: PaperFormat) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("aruco_print_{format}.png")))
}
