use clap::Parser;
use pacurve::chardata::read_char_data;
use pacurve::fitting::boundaries::adjust_max_values;
use pacurve::fitting::curve_fit::par_power_curves;
use pacurve::formats::{curve_segments_string, CURVE_STRUCT_HEADER};
use pacurve::plot::render_fit_plot;
use std::path::PathBuf;

pub type BinResult<T, E = Box<dyn std::error::Error + Send + Sync>> = Result<T, E>;

fn main() {
    if let Err(e) = bin_main() {
        eprintln!("error: {e}");
        if let Some(e) = e.source() {
            eprintln!("error: {e}");
        }
        std::process::exit(1);
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Characterization csv file to fit
    #[arg()]
    infile: PathBuf,

    /// Width of each fitted window, in dBm
    #[arg(long, visible_alias = "inc", default_value = "4")]
    increment: f64,

    /// Write a plot of the raw and fitted data to this path as a PNG
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn bin_main() -> BinResult<()> {
    let args = Args::parse();

    let data = read_char_data(&args.infile)?;

    // Fit the windows!
    let mut segments = par_power_curves(&data.power_levels, &data.output_powers, args.increment)?;
    adjust_max_values(&mut segments);

    if let Some(path) = &args.plot {
        render_fit_plot(&data, args.increment, path)?;
    }

    println!("\n\n{CURVE_STRUCT_HEADER}\n{}\n", curve_segments_string(&segments));
    Ok(())
}
