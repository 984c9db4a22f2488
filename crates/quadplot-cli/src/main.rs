use quadplot::{
    ChartConfig, ChartSpec, ChartTheme, LayoutOptions, SvgRenderOptions, layout_chart,
    render_chart_svg, sanitize_svg_id,
};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Chart(quadplot::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Chart(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<quadplot::Error> for CliError {
    fn from(value: quadplot::Error) -> Self {
        Self::Chart(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    Layout,
    #[default]
    Render,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    chart_id: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "quadplot-cli\n\
\n\
USAGE:\n\
  quadplot-cli [render] [--id <chart-id>] [--out <path>] [<path>|-]\n\
  quadplot-cli layout [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - Input is a chart spec JSON document.\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - render writes next to the input file (with .svg extension) by default;\n\
    use --out to pick a path, or '-' for stdout. Stdin input prints to stdout.\n\
  - layout prints the drawable layout as JSON.\n\
  - Without --id the chart id is derived from the input file name.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--id" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.chart_id = Some(id.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                while it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn default_out_path(input: Option<&str>) -> Option<String> {
    let path = input.filter(|p| *p != "-")?;
    Some(
        Path::new(path)
            .with_extension("svg")
            .to_string_lossy()
            .into_owned(),
    )
}

fn chart_id(explicit: Option<&str>, input: Option<&str>) -> String {
    if let Some(id) = explicit {
        return sanitize_svg_id(id);
    }
    let stem = input
        .filter(|p| *p != "-")
        .and_then(|p| Path::new(p).file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("quadplot");
    sanitize_svg_id(stem)
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let spec: ChartSpec = serde_json::from_str(&text)?;

    let config = ChartConfig::default();
    let theme = ChartTheme::default();
    let layout_opts = LayoutOptions::default();

    match args.command {
        Command::Layout => {
            let chart = layout_chart(&spec, &config, &theme, &layout_opts)?;
            write_json(&chart, args.pretty)?;
            Ok(())
        }
        Command::Render => {
            let chart = layout_chart(&spec, &config, &theme, &layout_opts)?;
            let svg_options = SvgRenderOptions {
                diagram_id: Some(chart_id(args.chart_id.as_deref(), args.input.as_deref())),
            };
            let svg = render_chart_svg(&chart, &svg_options)?;
            let out = args
                .out
                .clone()
                .or_else(|| default_out_path(args.input.as_deref()));
            write_text(&svg, out.as_deref())?;
            Ok(())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
