use super::*;
use crate::config::TexturingConfig;

fn square() -> (Vec<Position3>, Vec<IndexTriple>) {
    let vertices = vec![
        Position3::new(0.0, 0.0, 0.0),
        Position3::new(1.0, 0.0, 1.0),
        Position3::new(1.0, 1.0, 2.0),
        Position3::new(0.0, 1.0, 3.0),
    ];
    let faces = vec![IndexTriple::new(0, 1, 2), IndexTriple::new(0, 2, 3)];
    (vertices, faces)
}

fn engine() -> TexturingEngine {
    TexturingEngine::new(TexturingConfig::default()).unwrap()
}

#[test]
fn test_new_rejects_invalid_config() {
    let mut config = TexturingConfig::default();
    config.palette.colors = 0;
    assert!(matches!(
        TexturingEngine::new(config),
        Err(TexturingError::InvalidColorCount(0))
    ));
}

#[test]
fn test_starts_untextured_without_resources() {
    let engine = engine();
    assert_eq!(engine.mode(), TexturingMode::None);
    assert_eq!(engine.colors(), 16);
    assert!(engine.palette().is_none());
    assert!(engine.pattern().is_none());
    assert!(engine.diffuse_texture().is_none());
}

#[test]
fn test_untextured_build() {
    let (vertices, faces) = square();
    let ctx = MeshContext::new(&vertices, &faces);
    let buffers = engine().build(&ctx).unwrap();
    assert_eq!(buffers.tex_coords, vec![0.0, 0.0]);
    assert_eq!(buffers.faces, vec![0, 0, 1, 0, 2, 0, 0, 0, 2, 0, 3, 0]);
}

#[test]
fn test_set_mode_builds_palette_once() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = TexturingConfig::default();
    config.palette.save = true;
    config.output.dir = dir.path().to_path_buf();
    let palette_path = config.output.palette_path();
    let mut engine = TexturingEngine::new(config).unwrap();

    engine.set_mode(TexturingMode::ColoredFaces).unwrap();
    assert!(palette_path.exists());
    std::fs::remove_file(&palette_path).unwrap();

    // A regenerated palette would be written out again
    engine.set_mode(TexturingMode::ColoredVertices).unwrap();
    engine.set_mode(TexturingMode::ColoredFaces).unwrap();
    engine.set_colors(engine.colors()).unwrap();
    assert!(!palette_path.exists());
    assert!(engine.pattern().is_none());

    engine.set_colors(engine.colors() + 1).unwrap();
    assert!(palette_path.exists());
}

#[test]
fn test_set_colors_rebuilds_only_on_change() {
    let mut engine = engine();
    engine.set_colors(4).unwrap();
    assert_eq!(engine.palette().map(Palette::colors), Some(4));
    engine.set_colors(4).unwrap();
    assert_eq!(engine.colors(), 4);
    assert!(matches!(
        engine.set_colors(0),
        Err(TexturingError::InvalidColorCount(0))
    ));
    assert_eq!(engine.colors(), 4);
}

#[test]
fn test_colored_faces_tex_coords_are_palette_locations() {
    let (vertices, faces) = square();
    let ctx = MeshContext::new(&vertices, &faces);
    let mut engine = engine();
    engine.set_colors(3).unwrap();
    engine.set_mode(TexturingMode::ColoredFaces).unwrap();
    let buffers = engine.build(&ctx).unwrap();
    assert_eq!(buffers.tex_coords.len(), 6);
    assert_eq!(buffers.tex_coords, engine.palette().unwrap().tex_coords());
    // 2 faces over 3 colors: ordinals map to 0 and 1
    assert_eq!(buffers.faces, vec![0, 0, 1, 0, 2, 0, 0, 1, 2, 1, 3, 1]);
}

#[test]
fn test_colored_vertices_extremes() {
    let (vertices, faces) = square();
    let ctx = MeshContext::new(&vertices, &faces);
    let mut engine = engine();
    engine.set_colors(4).unwrap();
    engine.set_density(Density::new(|p: Position3| p.z));
    engine.set_mode(TexturingMode::ColoredVertices).unwrap();
    let buffers = engine.build(&ctx).unwrap();

    let range = engine.density_range();
    assert_eq!((range.min(), range.max()), (0.0, 3.0));
    // z = 0, 1, 2, 3 over [0, 3] with 4 colors
    assert_eq!(buffers.faces, vec![0, 0, 1, 1, 2, 2, 0, 0, 2, 2, 3, 3]);
}

#[test]
fn test_map_density_is_bounded() {
    let mut engine = engine();
    engine.set_colors(5).unwrap();
    engine.set_density(Density::new(|p: Position3| p.x));
    engine.update_extremes(&[Position3::new(-1.0, 0.0, 0.0), Position3::new(1.0, 0.0, 0.0)]);
    assert_eq!(engine.map_density(Position3::new(-1.0, 0.0, 0.0)), 0);
    assert_eq!(engine.map_density(Position3::new(1.0, 0.0, 0.0)), 4);
    assert_eq!(engine.map_density(Position3::new(100.0, 0.0, 0.0)), 4);
    assert_eq!(engine.map_density(Position3::new(-100.0, 0.0, 0.0)), 0);
}

#[test]
fn test_flat_density_uses_first_color() {
    let (vertices, faces) = square();
    let ctx = MeshContext::new(&vertices, &faces);
    let mut engine = engine();
    engine.set_mode(TexturingMode::ColoredVertices).unwrap();
    let buffers = engine.build(&ctx).unwrap();
    assert!(buffers.faces.iter().skip(1).step_by(2).all(|&t| t == 0));
}

#[test]
fn test_image_requires_tex_coords() {
    let (vertices, faces) = square();
    let mut engine = engine();
    engine.set_mode(TexturingMode::Image).unwrap();
    let ctx = MeshContext::new(&vertices, &faces);
    assert!(matches!(
        engine.build(&ctx),
        Err(TexturingError::MissingTexCoords)
    ));

    let uv: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
    let ctx = MeshContext {
        image_tex_coords: &uv,
        ..MeshContext::new(&vertices, &faces)
    };
    let buffers = engine.build(&ctx).unwrap();
    assert_eq!(buffers.tex_coords, uv.to_vec());
    assert_eq!(buffers.faces, vec![0, 0, 1, 1, 2, 2, 0, 0, 2, 2, 3, 3]);
}

#[test]
fn test_pattern_requires_matching_textures() {
    let (vertices, faces) = square();
    let mut engine = engine();
    engine.set_mode(TexturingMode::Pattern).unwrap();
    assert!(engine.pattern().is_some());

    let ctx = MeshContext {
        grid: GridSize::new(1, 1),
        ..MeshContext::new(&vertices, &faces)
    };
    assert!(matches!(
        engine.build(&ctx),
        Err(TexturingError::InconsistentTextures { faces: 2, textures: 0 })
    ));

    let ctx = MeshContext {
        textures: &faces,
        ..ctx
    };
    let buffers = engine.build(&ctx).unwrap();
    assert_eq!(buffers.tex_coords.len(), 4 * 2);
    assert_eq!(buffers.faces, vec![0, 0, 1, 1, 2, 2, 0, 0, 2, 2, 3, 3]);
}

#[test]
fn test_pattern_scale_validation() {
    let mut engine = engine();
    assert!(engine.set_pattern_scale(f64::NAN).is_err());
    assert!(engine.set_pattern_scale(-1.0).is_err());
    engine.set_pattern_scale(2.5).unwrap();
    assert_eq!(engine.pattern_scale(), 2.5);
}

#[test]
fn test_diffuse_texture_follows_mode() {
    let mut engine = engine();
    engine.set_mode(TexturingMode::Pattern).unwrap();
    assert_eq!(engine.diffuse_texture().map(|t| t.width), Some(12));
    engine.set_colors(16).unwrap();
    engine.set_mode(TexturingMode::ColoredFaces).unwrap();
    assert_eq!(engine.diffuse_texture().map(|t| t.width), Some(4));
    engine.set_mode(TexturingMode::Image).unwrap();
    assert!(engine.diffuse_texture().is_none());
}
