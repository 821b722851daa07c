use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

const SANS_SERIF_CANDIDATES: [&str; 4] = ["DejaVu Sans", "Liberation Sans", "Noto Sans", "Arial"];

#[derive(thiserror::Error, Debug)]
pub enum RasterError {
    #[error("SVG parse error: {0}")]
    Parse(#[from] usvg::Error),
    #[error("pixmap alloc failed for {0}x{1}")]
    Alloc(u32, u32),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),
}

/// Renders SVG text to PNG files with the system fonts.
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
    scale: f32,
}

impl Rasterizer {
    pub fn new(scale: f32) -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        // Map generic 'sans-serif' to an installed family
        let families: Vec<String> = fontdb
            .faces()
            .filter_map(|face| face.families.first().map(|(n, _)| n.clone()))
            .collect();
        let family_name = SANS_SERIF_CANDIDATES
            .iter()
            .find(|c| families.iter().any(|f| f.as_str() == **c))
            .map(|c| c.to_string())
            .or_else(|| families.first().cloned());
        match family_name {
            Some(name) => fontdb.set_sans_serif_family(name),
            None => log::warn!("no system fonts found; labels will not be rasterized"),
        }
        Self {
            fontdb: Arc::new(fontdb),
            scale,
        }
    }

    /// Render `svg` and save it as a PNG at `path`.
    pub fn render_to_file(&self, svg: &str, path: &Path) -> Result<(), RasterError> {
        let mut opt = usvg::Options::default();
        opt.fontdb = Arc::clone(&self.fontdb);
        let tree = usvg::Tree::from_str(svg, &opt)?;

        let size = tree.size();
        let w_px = (size.width() * self.scale).ceil() as u32;
        let h_px = (size.height() * self.scale).ceil() as u32;
        let mut pixmap = tiny_skia::Pixmap::new(w_px, h_px).ok_or(RasterError::Alloc(w_px, h_px))?;
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(self.scale, self.scale),
            &mut pixmap.as_mut(),
        );

        let out = BufWriter::new(File::create(path)?);
        let mut encoder = png::Encoder::new(out, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(pixmap.data())?;
        writer.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cube.png");
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
            <style>.col_up { fill:white }</style>
            <rect class="col_up" width="20" height="10"/>
        </svg>"#;
        let rasterizer = Rasterizer::new(2.0);
        rasterizer.render_to_file(svg, &path).unwrap();

        let again = dir.path().join("again.png");
        rasterizer.render_to_file(svg, &again).unwrap();
        assert!(std::fs::read(&path).unwrap() == std::fs::read(&again).unwrap());

        let decoder = png::Decoder::new(std::fs::File::open(&path).unwrap());
        let reader = decoder.read_info().unwrap();
        assert_eq!((reader.info().width, reader.info().height), (40, 20));
    }

    #[test]
    fn test_bad_svg() {
        let dir = tempfile::tempdir().unwrap();
        let err = Rasterizer::new(1.0)
            .render_to_file("<svg", &dir.path().join("x.png"))
            .unwrap_err();
        assert!(matches!(err, RasterError::Parse(_)));
    }
}
