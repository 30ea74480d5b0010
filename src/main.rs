use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use colorlab::{img, CMYKColor, ColorState, HLSColor, HSVColor, PolarPoint, RGBColor, Result};

// CLI arg definition
#[derive(Parser, Debug)]
#[command(about = "Convert colors between RGB, CMYK, HSV and HLS")]
struct Args {
    /// More log output, repeat for more
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start from 0-255 RGB channels
    Rgb {
        red: u8,
        green: u8,
        blue: u8,
        #[command(flatten)]
        swatch: Swatch,
    },

    /// Start from 0-1 CMYK fractions
    Cmyk {
        cyan: f64,
        magenta: f64,
        yellow: f64,
        key: f64,
        #[command(flatten)]
        swatch: Swatch,
    },

    /// Start from hue in degrees, saturation and value in 0-1
    Hsv {
        hue: f64,
        saturation: f64,
        value: f64,
        #[command(flatten)]
        swatch: Swatch,
    },

    /// Start from hue in degrees, lightness and saturation in 0-1
    Hls {
        hue: f64,
        lightness: f64,
        saturation: f64,
        #[command(flatten)]
        swatch: Swatch,
    },

    /// Pick the color under a point of a wheel widget
    Pick {
        #[arg(allow_negative_numbers = true)]
        x: f64,

        #[arg(allow_negative_numbers = true)]
        y: f64,

        #[arg(long, default_value("200"))]
        width: f64,

        #[arg(long, default_value("200"))]
        height: f64,

        #[command(flatten)]
        swatch: Swatch,
    },

    /// Render the hue wheel to a PNG
    Wheel {
        #[arg(short, long, default_value("wheel.png"))]
        output: PathBuf,

        #[arg(long, default_value("256"),
            value_parser = clap::value_parser!(u32).range(1..))]
        width: u32,

        #[arg(long, default_value("256"),
            value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,
    },
}

#[derive(clap::Args, Debug)]
struct Swatch {
    /// Also save the resulting color as a PNG swatch
    #[arg(long, value_name = "PATH")]
    swatch: Option<PathBuf>,

    #[arg(long, default_value("64"),
        value_parser = clap::value_parser!(u32).range(1..))]
    swatch_size: u32,
}

impl Swatch {
    fn write(&self, color: RGBColor) -> Result<()> {
        match self.swatch {
            Some(ref path) => img::write_swatch(color, self.swatch_size, path),
            None => Ok(()),
        }
    }
}

fn show(state: &ColorState, swatch: &Swatch) -> Result<()> {
    println!("{state}");
    swatch.write(state.rgb)
}

fn pick(point: PolarPoint, swatch: &Swatch) -> Result<()> {
    match point.to_color() {
        Some(rgb) => show(&ColorState::from_rgb(rgb), swatch),
        None => {
            log::debug!("{:?} lies outside the wheel", point);
            println!("Point is outside the wheel, no color picked");
            Ok(())
        }
    }
}

fn wheel(output: &Path, width: u32, height: u32) -> Result<()> {
    img::write_wheel(width, height, output)?;
    println!("Wrote {}x{} wheel to {}", width, height, output.display());
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let state = ColorState::default();

    match args.command {
        Command::Rgb {
            red,
            green,
            blue,
            swatch,
        } => show(&state.with_rgb(RGBColor::new(red, green, blue)), &swatch),
        Command::Cmyk {
            cyan,
            magenta,
            yellow,
            key,
            swatch,
        } => {
            let cmyk = CMYKColor::new(cyan, magenta, yellow, key)?;
            show(&state.with_cmyk(cmyk), &swatch)
        }
        Command::Hsv {
            hue,
            saturation,
            value,
            swatch,
        } => {
            let hsv = HSVColor::new(hue, saturation, value)?;
            show(&state.with_hsv(hsv), &swatch)
        }
        Command::Hls {
            hue,
            lightness,
            saturation,
            swatch,
        } => {
            let hls = HLSColor::new(hue, lightness, saturation)?;
            show(&state.with_hls(hls), &swatch)
        }
        Command::Pick {
            x,
            y,
            width,
            height,
            swatch,
        } => pick(PolarPoint::from_widget(x, y, width, height), &swatch),
        Command::Wheel {
            output,
            width,
            height,
        } => wheel(&output, width, height),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(args) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
