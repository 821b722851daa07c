use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use scheme_core::{ColorScheme, SchemeCode, UNIQUE_COLOR_SCHEMES};
use scheme_svg::RenderJob;

mod raster;

/// Generate images of every unique cube color scheme from SVG templates.
///
/// Without arguments, renders the reference templates from `templates/` into
/// `output/`.
#[derive(Debug, clap::Parser)]
#[command(version, args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    subcommand: Option<Subcommand>,

    /// Directory containing the SVG templates.
    #[arg(long, default_value = "templates")]
    templates: PathBuf,
    /// Root directory of the generated images.
    #[arg(long, default_value = "output")]
    output: PathBuf,
    /// JSON job table to use instead of the built-in one.
    #[arg(long, value_name = "FILE")]
    jobs: Option<PathBuf>,
    /// Only render these schemes (such as `WBYGRO`).
    #[arg(long = "only", value_name = "CODE")]
    only: Vec<SchemeCode>,
    /// Also save a PNG next to every SVG.
    #[arg(long)]
    png: bool,
    /// Pixels per SVG unit for PNG output.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

#[derive(clap::Subcommand, Debug)]
enum Subcommand {
    /// Print the unique color schemes.
    List,
}

fn main() -> ExitCode {
    use clap::Parser;

    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            if let Some(hint) = hint(&*e) {
                eprintln!("hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if let Some(Subcommand::List) = args.subcommand {
        for scheme in UNIQUE_COLOR_SCHEMES.iter() {
            println!("{scheme}");
        }
        return Ok(());
    }

    let schemes = select_schemes(&args.only)?;
    let jobs = match &args.jobs {
        Some(path) => scheme_svg::load_jobs(path)?,
        None => RenderJob::reference_jobs(),
    };
    let rasterizer = args.png.then(|| raster::Rasterizer::new(args.scale));

    for job in &jobs {
        let written = job.run(&schemes, &args.templates, &args.output)?;
        if let Some(rasterizer) = &rasterizer {
            rasterize_all(rasterizer, &written)?;
        }
    }
    Ok(())
}

/// Save a PNG next to each of the given SVG files.
fn rasterize_all(rasterizer: &raster::Rasterizer, svg_paths: &[PathBuf]) -> Result<(), String> {
    for svg_path in svg_paths {
        let png_path = svg_path.with_extension("png");
        let svg = fs::read_to_string(svg_path)
            .map_err(|e| format!("error reading {}: {e}", svg_path.display()))?;
        rasterizer
            .render_to_file(&svg, &png_path)
            .map_err(|e| format!("error rasterizing {}: {e}", png_path.display()))?;
        log::debug!("wrote {}", png_path.display());
    }
    Ok(())
}

/// Extra advice for errors caused by the template files themselves.
fn hint(e: &(dyn Error + 'static)) -> Option<&'static str> {
    match e.downcast_ref::<scheme_svg::RenderError>() {
        Some(e) if e.is_template_structure() => {
            Some("every template needs a <style> element for the face colors")
        }
        _ => None,
    }
}

/// The unique schemes, restricted to `only` when it is not empty.
fn select_schemes(only: &[SchemeCode]) -> Result<Vec<ColorScheme>, String> {
    if only.is_empty() {
        return Ok(UNIQUE_COLOR_SCHEMES.clone());
    }
    if let Some(unknown) = only
        .iter()
        .find(|code| !UNIQUE_COLOR_SCHEMES.iter().any(|s| s.code == **code))
    {
        return Err(format!(
            "{unknown} is not one of the unique color schemes (see `list`)"
        ));
    }
    Ok(UNIQUE_COLOR_SCHEMES
        .iter()
        .filter(|s| only.contains(&s.code))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use scheme_svg::RenderMode;

    use super::*;

    #[test]
    fn test_select_schemes() {
        assert_eq!(select_schemes(&[]).unwrap().len(), 30);

        let only: Vec<SchemeCode> = ["WRYOBG", "wbygro"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let picked: Vec<_> = select_schemes(&only)
            .unwrap()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(picked, ["14 WBYGRO (Japanese)", "30 WRYOBG"]);

        let rotated: SchemeCode = "YWBGOR".parse().unwrap();
        assert!(select_schemes(&[rotated]).is_err());
    }

    #[test]
    fn test_rasterize_all() {
        let dir = tempfile::tempdir().unwrap();
        let svg_path = dir.path().join("flat_01_WYGBOR.svg");
        fs::write(
            &svg_path,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4"/></svg>"#,
        )
        .unwrap();
        let missing = dir.path().join("flat_02_WYGBRO.svg");

        let rasterizer = raster::Rasterizer::new(1.0);
        rasterize_all(&rasterizer, &[svg_path.clone()]).unwrap();
        assert!(svg_path.with_extension("png").is_file());

        let err = rasterize_all(&rasterizer, &[missing.clone()]).unwrap_err();
        assert!(err.starts_with("error reading"));
        assert!(err.contains(&missing.display().to_string()));
    }

    #[test]
    fn test_hint() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("no_style.svg"), "<svg><text id=\"label\"/></svg>").unwrap();
        let run = |template: &str| -> Box<dyn Error> {
            RenderJob::new(template, "out", "x", RenderMode::Default)
                .run(&UNIQUE_COLOR_SCHEMES[..1], dir.path(), dir.path())
                .unwrap_err()
                .into()
        };

        assert!(hint(&*run("no_style.svg")).unwrap().contains("<style>"));
        assert_eq!(hint(&*run("absent.svg")), None);
        let other: Box<dyn Error> = "other".into();
        assert_eq!(hint(&*other), None);
    }

    #[test]
    fn test_args() {
        use clap::Parser;

        let args = Args::try_parse_from(["scheme-gen"]).unwrap();
        assert_eq!(args.templates, PathBuf::from("templates"));
        assert_eq!(args.output, PathBuf::from("output"));
        assert!(args.only.is_empty() && !args.png);

        let args = Args::try_parse_from(["scheme-gen", "--only", "WYGBOR", "--png"]).unwrap();
        assert_eq!(args.only, ["WYGBOR".parse::<SchemeCode>().unwrap()]);
        assert!(args.png);

        assert!(Args::try_parse_from(["scheme-gen", "--only", "WYGBOX"]).is_err());
        assert!(matches!(
            Args::try_parse_from(["scheme-gen", "list"]).unwrap().subcommand,
            Some(Subcommand::List)
        ));
    }
}
