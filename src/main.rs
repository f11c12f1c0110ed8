use clap::{Parser, Subcommand, ValueEnum};
use log::Level::{Error, Info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use qstyles::logging;
use qstyles::palette::{palette_names, select_palette, Variant, CATALOG, CATALOG_VERSION};
use qstyles::{base_theme, compose_theme, theme_log, MplStyleWriter, Style, StyleSink, ThemeOptions};

#[derive(Debug, Parser)]
#[command(version, about = "Color palettes and light/dark plot themes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the palette identifiers and their colors
    Palettes,
    /// Compose a theme and write it out
    Theme {
        #[arg(value_enum)]
        style: StyleArg,
        /// Color cycle to use
        #[arg(long)]
        palette: Option<String>,
        /// One of print, notebook, presentation
        #[arg(long)]
        context: Option<String>,
        /// Turn gridlines off
        #[arg(long)]
        no_grid: bool,
        /// Drop grid, top/right spines and the legend border
        #[arg(long)]
        minimal: bool,
        /// Extra multiplier for font sizes
        #[arg(long)]
        font_scale: Option<f64>,
        /// YAML file with theme options; flags override it
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Mplstyle)]
        format: Format,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    Light,
    Dark,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Light => Style::Light,
            StyleArg::Dark => Style::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Mplstyle,
    Yaml,
}

fn main() -> ExitCode {
    logging::init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Palettes => list_palettes(),
        Commands::Theme {
            style,
            palette,
            context,
            no_grid,
            minimal,
            font_scale,
            config,
            format,
            output,
        } => {
            let options = load_options(config, palette, context, no_grid, minimal, font_scale);
            options.and_then(|options| write_theme(style.into(), &options, format, output))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            theme_log!(Error, "{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_options(
    config: Option<PathBuf>,
    palette: Option<String>,
    context: Option<String>,
    no_grid: bool,
    minimal: bool,
    font_scale: Option<f64>,
) -> qstyles::Result<ThemeOptions> {
    let mut options = match config {
        Some(path) => ThemeOptions::from_yaml_file(path)?,
        None => ThemeOptions::default(),
    };
    if palette.is_some() {
        options.palette = palette;
    }
    if context.is_some() {
        options.context = context;
    }
    if no_grid {
        options.grid = false;
    }
    if minimal {
        options.minimal = true;
    }
    if let Some(scale) = font_scale {
        options.font_scale = scale;
    }
    Ok(options)
}

/// Render the composed theme in `format`. Nothing is written anywhere yet.
fn render_theme(style: Style, options: &ThemeOptions, format: Format) -> qstyles::Result<Vec<u8>> {
    let theme = compose_theme(style, base_theme(), options)?;
    match format {
        Format::Mplstyle => {
            let mut writer = MplStyleWriter::new(Vec::new());
            writer.update(&theme)?;
            Ok(writer.into_inner())
        }
        Format::Yaml => Ok(serde_yaml::to_string(&theme)?.into_bytes()),
    }
}

fn write_theme(
    style: Style,
    options: &ThemeOptions,
    format: Format,
    output: Option<PathBuf>,
) -> qstyles::Result<()> {
    // an existing output file is only opened once the theme is known good
    let rendered = render_theme(style, options, format)?;

    match output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(&path)?);
            out.write_all(&rendered)?;
            out.flush()?;
            theme_log!(Info, "wrote {} theme to {}", style, path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(&rendered)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn list_palettes() -> qstyles::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "palette catalog v{CATALOG_VERSION}")?;
    for name in palette_names() {
        let kind = CATALOG.find(name).map(|e| e.family.kind()).unwrap_or("unknown");
        writeln!(out, "{name} ({kind})")?;
        for variant in [Variant::Light, Variant::Dark] {
            let colors: Vec<String> = select_palette(name, variant)?
                .iter()
                .map(ToString::to_string)
                .collect();
            writeln!(out, "  {variant:<5} {}", colors.join(" "))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("qstyles-cli-{}-{name}", std::process::id()))
    }

    #[test]
    fn flags_override_config_file() {
        let config = temp_path("override.yml");
        fs::write(&config, "palette: plum\ncontext: print\nfont_scale: 2.0\n").unwrap();

        let options = load_options(
            Some(config.clone()),
            Some("cat_bright".to_string()),
            None,
            true,
            true,
            None,
        )
        .unwrap();
        fs::remove_file(&config).unwrap();

        assert_eq!(options.palette.as_deref(), Some("cat_bright"));
        assert_eq!(options.context.as_deref(), Some("print"));
        assert_eq!(options.font_scale, 2.0);
        assert!(!options.grid);
        assert!(options.minimal);
    }

    #[test]
    fn unset_flags_keep_defaults() {
        let options = load_options(None, None, None, false, false, Some(1.25)).unwrap();
        assert_eq!(options, ThemeOptions::default().with_font_scale(1.25));
    }

    #[test]
    fn invalid_options_leave_existing_output_alone() {
        let output = temp_path("existing.mplstyle");
        fs::write(&output, "keep me\n").unwrap();

        let bad_palette = ThemeOptions::default().with_palette("bogus");
        let err = write_theme(Style::Light, &bad_palette, Format::Mplstyle, Some(output.clone()));
        assert!(matches!(err, Err(qstyles::Error::UnknownPalette(_))));

        let bad_context = ThemeOptions::default().with_context("bogus");
        let err = write_theme(Style::Dark, &bad_context, Format::Yaml, Some(output.clone()));
        assert!(matches!(err, Err(qstyles::Error::InvalidContext(_))));

        let contents = fs::read_to_string(&output).unwrap();
        fs::remove_file(&output).unwrap();
        assert_eq!(contents, "keep me\n");
    }

    #[test]
    fn writes_rendered_theme_to_output() {
        let output = temp_path("written.mplstyle");
        let options = ThemeOptions::default().with_palette("cat_bright");
        write_theme(Style::Light, &options, Format::Mplstyle, Some(output.clone())).unwrap();

        let contents = fs::read_to_string(&output).unwrap();
        fs::remove_file(&output).unwrap();
        assert!(contents.contains("axes.prop_cycle: cycler('color', ['648FFF'"));
        assert!(contents.contains("axes.grid: True\n"));
    }
}
