use std::path::PathBuf;

use clap::Parser;

use crate::config::{load_app_config, AppConfig};
use crate::error::AppResult;
use crate::screen::{ScreenLayout, Template, TierScreen};
use crate::stats::StatSet;

/// Command-line arguments for `tierscreen`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "tierscreen",
    version,
    about = "Render a tier screen: thumbnail and six stat bars over a template",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Thumbnail image; downscaled to fit 460x396
    #[arg(short, long, value_name = "FILE")]
    pub image: PathBuf,

    /// Output file, always written as JPEG
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Background template image
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// JPEG quality, 1-100
    #[arg(short, long, value_name = "N")]
    pub quality: Option<i64>,

    /// int stat, 0-100
    #[arg(short = 'I', long = "int", value_name = "N")]
    pub int: i32,

    /// pwr stat, 0-100
    #[arg(short = 'P', long = "pwr", value_name = "N")]
    pub pwr: i32,

    /// def stat, 0-100
    #[arg(short = 'D', long = "def", value_name = "N")]
    pub def: i32,

    /// mbl stat, 0-100
    #[arg(short = 'M', long = "mbl", value_name = "N")]
    pub mbl: i32,

    /// hp stat, 0-100
    #[arg(short = 'H', long = "hp", value_name = "N")]
    pub hp: i32,

    /// stl stat, 0-100
    #[arg(short = 'S', long = "stl", value_name = "N")]
    pub stl: i32,
}

impl Cli {
    pub fn stats(&self) -> StatSet {
        StatSet::new(self.int, self.pwr, self.def, self.mbl, self.hp, self.stl)
    }
}

pub fn run(cli: &Cli) -> AppResult<PathBuf> {
    run_with_config(cli, &load_app_config())
}

/// Resolves settings against `config`, renders, and returns the written path.
pub fn run_with_config(cli: &Cli, config: &AppConfig) -> AppResult<PathBuf> {
    let template_path = config.resolve_template_path(cli.template.as_deref());
    let quality = config.resolve_quality(cli.quality)?;
    tracing::debug!(template = %template_path.display(), quality, "resolved settings");

    let stats = cli.stats();
    ScreenLayout::default().check_stats(&stats)?;

    let screen = TierScreen::new(Template::open(&template_path)?);
    screen.render(&cli.image, &stats, &cli.output, quality)?;
    Ok(cli.output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::screen::ScreenError;
    use crate::stats::StatError;
    use clap::error::ErrorKind;
    use image::{DynamicImage, Rgb, RgbImage};
    use std::fs;
    use std::path::Path;

    const STAT_ARGS: [&str; 12] = [
        "-I", "50", "-P", "60", "-D", "70", "-M", "80", "-H", "90", "-S", "100",
    ];

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("tierscreen-cli-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    fn parse(extra: &[&str]) -> Result<Cli, clap::Error> {
        let mut args = vec!["tierscreen", "-i", "in.png", "-o", "out.jpg"];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args)
    }

    #[test]
    fn short_flags_map_to_stats_in_order() {
        let cli = parse(&STAT_ARGS).unwrap();
        assert_eq!(cli.stats(), StatSet::new(50, 60, 70, 80, 90, 100));
        assert_eq!(cli.image, PathBuf::from("in.png"));
        assert_eq!(cli.output, PathBuf::from("out.jpg"));
        assert!(cli.template.is_none());
    }

    #[test]
    fn long_flags_are_accepted() {
        let cli = Cli::try_parse_from([
            "tierscreen", "--image", "a.png", "--output", "b.jpg", "--int", "1", "--pwr", "2",
            "--def", "3", "--mbl", "4", "--hp", "5", "--stl", "6", "--template", "t.jpg",
            "--quality", "88",
        ])
        .unwrap();
        assert_eq!(cli.stats(), StatSet::new(1, 2, 3, 4, 5, 6));
        assert_eq!(cli.template, Some(PathBuf::from("t.jpg")));
        assert_eq!(cli.quality, Some(88));
    }

    #[test]
    fn missing_stat_is_a_usage_error() {
        let err = parse(&STAT_ARGS[..10]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn non_integer_stat_is_rejected() {
        let mut args = STAT_ARGS.to_vec();
        args[1] = "fifty";
        let err = parse(&args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn negative_stat_values_parse() {
        let mut args = STAT_ARGS.to_vec();
        args[1] = "-5";
        let cli = parse(&args).unwrap();
        assert_eq!(cli.int, -5);
    }

    #[test]
    fn run_renders_output_from_cli_and_config() {
        with_temp_root(|root| {
            let template_path = root.join("template.png");
            DynamicImage::ImageRgb8(RgbImage::from_pixel(1600, 900, Rgb([0, 0, 0])))
                .save(&template_path)
                .unwrap();
            let image_path = root.join("thumb.png");
            DynamicImage::ImageRgb8(RgbImage::from_pixel(920, 792, Rgb([9, 9, 9])))
                .save(&image_path)
                .unwrap();
            let output_path = root.join("tier.jpg");

            let mut cli = parse(&STAT_ARGS).unwrap();
            cli.image = image_path;
            cli.output = output_path.clone();
            let config = AppConfig {
                template_path: Some(template_path),
                jpeg_quality: Some(90),
            };

            let written = run_with_config(&cli, &config).unwrap();
            assert_eq!(written, output_path);
            let decoded = image::open(&output_path).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (1600, 900));
        });
    }

    #[test]
    fn run_reports_missing_template() {
        with_temp_root(|root| {
            let mut cli = parse(&STAT_ARGS).unwrap();
            cli.template = Some(root.join("no-template.jpg"));
            cli.output = root.join("out.jpg");

            let err = run_with_config(&cli, &AppConfig::default()).unwrap_err();
            assert!(matches!(
                err,
                AppError::Screen(ScreenError::FileNotFound { .. })
            ));
            assert!(!cli.output.exists());
        });
    }

    #[test]
    fn run_rejects_stat_too_large_to_draw() {
        with_temp_root(|root| {
            let mut args = STAT_ARGS.to_vec();
            args[1] = "-500000000";
            let mut cli = parse(&args).unwrap();
            cli.output = root.join("out.jpg");

            let err = run_with_config(&cli, &AppConfig::default()).unwrap_err();
            assert!(matches!(err, AppError::Stat(StatError::InvalidArgument { .. })));
            assert!(!cli.output.exists());

            cli.int = i32::MIN;
            let err = run_with_config(&cli, &AppConfig::default()).unwrap_err();
            assert!(matches!(err, AppError::Stat(_)));
        });
    }

    #[test]
    fn run_rejects_invalid_quality_before_touching_files() {
        let mut cli = parse(&STAT_ARGS).unwrap();
        cli.quality = Some(0);
        let err = run_with_config(&cli, &AppConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
