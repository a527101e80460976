use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use starbright::{
    ColorToken, ContactForm, ContactSubmitter, DividerSpec, FrameIndex, FrameRange, HeightClass,
    HttpTransport, Scene, ShapeKind, StarburstMotion, StarburstPose, StarburstSpec, SubmitOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "starbright", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a section divider as SVG.
    Divider(DividerArgs),
    /// Write a starburst as SVG.
    Starburst(StarburstArgs),
    /// Render one scene frame as SVG or PNG (chosen by the output extension).
    Frame(FrameArgs),
    /// Render a range of scene frames as numbered PNGs.
    Frames(FramesArgs),
    /// Validate the contact form and post it to the form host.
    Contact(ContactArgs),
}

#[derive(Parser, Debug)]
struct DividerArgs {
    #[arg(long, value_enum, default_value_t = ShapeChoice::Wave)]
    shape: ShapeChoice,

    #[arg(long, value_enum, default_value_t = HeightChoice::Md)]
    height: HeightChoice,

    /// Mirror the profile vertically.
    #[arg(long)]
    inverted: bool,

    #[arg(long, value_parser = parse_color, default_value = "cream")]
    fill: ColorToken,

    /// Blend the fill into this colour top to bottom.
    #[arg(long, value_parser = parse_color)]
    to: Option<ColorToken>,

    /// Rendered width in px.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Output SVG path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct StarburstArgs {
    #[arg(long, default_value_t = 12)]
    points: usize,

    #[arg(long, default_value_t = 40.0)]
    inner: f64,

    #[arg(long, default_value_t = 80.0)]
    outer: f64,

    #[arg(long, default_value_t = 200.0)]
    size: f64,

    #[arg(long, value_parser = parse_color, default_value = "mustard")]
    color: ColorToken,

    #[arg(long, value_parser = parse_color)]
    secondary: Option<ColorToken>,

    /// Sample the spin and pulse at this frame (60 fps); the rest pose when omitted.
    #[arg(long)]
    frame: Option<u64>,

    /// Output SVG path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output path; `.png` rasterizes, anything else writes SVG.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    from: u64,

    /// Last frame (exclusive).
    #[arg(long)]
    to: u64,

    /// Directory receiving `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct ContactArgs {
    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    message: String,

    /// Form host base URL; the form is posted to `<endpoint>/`.
    #[arg(long)]
    endpoint: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeChoice {
    Wave,
    Angle,
    Curve,
    Mountains,
    Atomic,
}

impl From<ShapeChoice> for ShapeKind {
    fn from(c: ShapeChoice) -> Self {
        match c {
            ShapeChoice::Wave => ShapeKind::Wave,
            ShapeChoice::Angle => ShapeKind::Angle,
            ShapeChoice::Curve => ShapeKind::Curve,
            ShapeChoice::Mountains => ShapeKind::Mountains,
            ShapeChoice::Atomic => ShapeKind::Atomic,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeightChoice {
    Sm,
    Md,
    Lg,
}

impl From<HeightChoice> for HeightClass {
    fn from(c: HeightChoice) -> Self {
        match c {
            HeightChoice::Sm => HeightClass::Sm,
            HeightChoice::Md => HeightClass::Md,
            HeightChoice::Lg => HeightClass::Lg,
        }
    }
}

fn parse_color(s: &str) -> Result<ColorToken, String> {
    s.parse::<ColorToken>().map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Divider(args) => cmd_divider(args),
        Command::Starburst(args) => cmd_starburst(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Contact(args) => cmd_contact(args),
    }
}

fn emit(svg: &str, out: Option<&Path>) -> anyhow::Result<()> {
    let Some(out) = out else {
        println!("{svg}");
        return Ok(());
    };
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, svg).with_context(|| format!("write svg '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_divider(args: DividerArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.width.is_finite() && args.width > 0.0,
        "--width must be > 0"
    );
    let spec = DividerSpec {
        shape: args.shape.into(),
        height: args.height.into(),
        inverted: args.inverted,
        fill: args.fill,
        to: args.to,
    };
    emit(&spec.to_svg(args.width), args.out.as_deref())
}

fn cmd_starburst(args: StarburstArgs) -> anyhow::Result<()> {
    let spec = StarburstSpec {
        size: args.size,
        point_count: args.points,
        inner_radius: args.inner,
        outer_radius: args.outer,
        color: args.color,
        secondary_color: args.secondary,
        animate: args.frame.is_some(),
    };
    spec.validate()?;

    let pose = match args.frame {
        Some(frame) => {
            let fps = starbright::Fps::default();
            StarburstMotion::new(fps)?.sample(starbright::SampleCtx::new(FrameIndex(frame), fps))?
        }
        None => StarburstPose::REST,
    };
    emit(&spec.to_svg(pose), args.out.as_deref())
}

fn read_scene(path: &Path) -> anyhow::Result<Scene> {
    let scene = Scene::from_path(path)
        .with_context(|| format!("load scene '{}'", path.display()))?;
    scene.validate()?;
    Ok(scene)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    let frame = FrameIndex(args.frame);

    let is_png = args
        .out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        let pixels = starbright::render_frame(&scene, frame)?;
        starbright::write_png(&pixels, &args.out)?;
        eprintln!("wrote {}", args.out.display());
        Ok(())
    } else {
        let svg = starbright::render_svg(&scene, frame)?;
        emit(&svg, Some(&args.out))
    }
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    let range = FrameRange::new(FrameIndex(args.from), FrameIndex(args.to))?;
    let written = starbright::render_sequence(&scene, range, &args.out_dir)?;
    eprintln!("wrote {} frames to {}", written.len(), args.out_dir.display());
    Ok(())
}

fn cmd_contact(args: ContactArgs) -> anyhow::Result<()> {
    let form = ContactForm::new(args.name, args.email, args.message);
    let errors = form.validate();
    if !errors.is_empty() {
        for (field, msg) in errors.iter() {
            eprintln!("{}: {msg}", field.key());
        }
        anyhow::bail!("contact form has {} invalid field(s)", errors.len());
    }

    let Some(endpoint) = args.endpoint else {
        eprintln!("contact form is valid");
        return Ok(());
    };

    let submitter = ContactSubmitter::new(HttpTransport::new(endpoint)?);
    match submitter.submit(&form) {
        SubmitOutcome::Sent => {
            println!("{}", starbright::SUCCESS_MESSAGE);
            Ok(())
        }
        SubmitOutcome::Failed => anyhow::bail!(starbright::TRANSMISSION_ERROR),
        SubmitOutcome::Busy => anyhow::bail!("a submission is already in flight"),
        SubmitOutcome::Invalid(errors) => {
            anyhow::bail!("contact form has {} invalid field(s)", errors.len())
        }
    }
}
