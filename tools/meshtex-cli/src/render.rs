//! Render command - texture a generated surface and report its buffers
//!
//! The surface is a smooth bump `z = exp(-4 (x² + y²))` over a rectangle two
//! units wide, with the height following the grid's aspect.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use meshtex::{
    AreaSize, Density, DiffuseMap, GridSize, MeshBuffers, Position3, SurfaceGrid, TexturedMesh,
    TexturingConfig, TexturingMode,
};
use std::path::PathBuf;

/// Density functions selectable from the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DensityArg {
    /// Constant zero: every vertex takes the first color
    #[default]
    Zero,
    /// Vertex height
    Height,
    /// Distance from the origin
    Radial,
}

impl DensityArg {
    fn density(self) -> Density {
        match self {
            Self::Zero => Density::zero(),
            Self::Height => Density::new(|p: Position3| p.z),
            Self::Radial => Density::new(|p: Position3| p.magnitude()),
        }
    }
}

/// Arguments for the render command
#[derive(Args)]
pub struct RenderArgs {
    /// Path to a meshtex.toml config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Texturing mode: none, image, pattern, faces or vertices
    #[arg(short, long, default_value = "none")]
    pub mode: TexturingMode,

    /// Palette size for faces/vertices modes (overrides config)
    #[arg(long)]
    pub colors: Option<usize>,

    /// Pattern tiling scale (overrides config)
    #[arg(long)]
    pub scale: Option<f64>,

    /// Tessellation grid as WIDTHxHEIGHT cells
    #[arg(long, default_value = "16x16", value_parser = parse_grid)]
    pub grid: GridSize,

    /// Density function for vertices mode
    #[arg(long, value_enum, default_value_t = DensityArg::Zero)]
    pub density: DensityArg,

    /// Image URI for image mode
    #[arg(long)]
    pub image: Option<String>,

    /// Write palette.png / pattern.png when they are generated
    #[arg(long)]
    pub save: bool,

    /// Directory for saved images (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_grid(s: &str) -> std::result::Result<GridSize, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: u32 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let height: u32 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    if width == 0 || height == 0 {
        return Err(format!("grid must be at least 1x1, got {width}x{height}"));
    }
    Ok(GridSize::new(width, height))
}

/// Execute the render command
pub fn execute(args: RenderArgs) -> Result<()> {
    let mesh = render(&args)?;
    print_summary(&mesh)
}

fn load_config(args: &RenderArgs) -> Result<TexturingConfig> {
    let mut config = match &args.config {
        Some(path) => TexturingConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => TexturingConfig::default(),
    };
    if args.save {
        config.palette.save = true;
        config.pattern.save = true;
    }
    if let Some(dir) = &args.output {
        config.output.dir = dir.clone();
    }
    Ok(config)
}

fn surface(grid: GridSize) -> SurfaceGrid {
    let area = AreaSize::new(2.0, 2.0 * grid.height as f64 / grid.width as f64);
    SurfaceGrid::new(area, grid).with_height(|x, y| (-4.0 * (x * x + y * y)).exp())
}

fn render(args: &RenderArgs) -> Result<TexturedMesh<MeshBuffers>> {
    let config = load_config(args)?;
    let colors = args.colors.unwrap_or(config.palette.colors);
    let scale = args.scale.unwrap_or(config.pattern.scale);

    let mut mesh = TexturedMesh::from_generator(&surface(args.grid), MeshBuffers::new(), config)
        .context("Failed to build surface mesh")?;

    let applied = match args.mode {
        TexturingMode::None => mesh.set_texture_mode_none(None),
        TexturingMode::Image => {
            let uri = args
                .image
                .as_deref()
                .context("Image mode needs --image <URI>")?;
            mesh.set_texture_mode_image(uri)
        }
        TexturingMode::Pattern => mesh.set_texture_mode_pattern(scale),
        TexturingMode::ColoredFaces => mesh.set_texture_mode_faces(colors),
        TexturingMode::ColoredVertices => {
            mesh.set_texture_mode_vertices(colors, args.density.density())
        }
    };
    applied.with_context(|| format!("Failed to apply texture mode '{}'", args.mode))?;

    Ok(mesh)
}

fn print_summary(mesh: &TexturedMesh<MeshBuffers>) -> Result<()> {
    let sink = mesh.sink();
    let area = mesh.mesh_area().context("Failed to compute mesh area")?;

    println!("Texture mode: {}", mesh.texture_mode());
    println!("  Vertices:   {}", sink.vertex_count());
    println!("  Faces:      {}", sink.face_count());
    println!("  Tex coords: {}", sink.tex_coords.len() / 2);
    println!("  Area:       {area:.4}");
    match &sink.diffuse {
        Some(DiffuseMap::Color([r, g, b, a])) => {
            println!("  Diffuse:    color #{r:02x}{g:02x}{b:02x}{a:02x}")
        }
        Some(DiffuseMap::Uri(uri)) => println!("  Diffuse:    image {uri}"),
        Some(DiffuseMap::Texture(tex)) => {
            println!("  Diffuse:    generated {}x{}", tex.width, tex.height)
        }
        None => println!("  Diffuse:    (none)"),
    }
    Ok(())
}
