use camino::Utf8PathBuf;
use gradline::gallery::{GalleryConfig, render_gallery};
use gradline::svg::SvgOptions;
use gradline::{NormalizedAngle, Size, gradient_line, half_gradient_length};
use miette::{IntoDiagnostic, WrapErr, miette};
use rayon::prelude::*;
use std::f64::consts::PI;

/// Sweep step in tenths of a degree
const SWEEP_STEPS: u32 = 3600;

/// Box aspect ratios checked by `sweep`
const SWEEP_SIZES: [(f64, f64); 7] = [
    (342.0, 155.0),
    (155.0, 342.0),
    (100.0, 100.0),
    (1.0, 1000.0),
    (1000.0, 1.0),
    (0.5, 0.25),
    (1920.0, 1080.0),
];

const SWEEP_TOLERANCE: f64 = 1e-9;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery [out.svg]   Render the demo gallery of angled gradients");
        eprintln!("  sweep               Check the endpoint formula across angles and aspect ratios");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => gallery(args.get(2).map(Utf8PathBuf::from)),
        "sweep" => sweep(),
        other => Err(miette!("unknown command: {other}")),
    }
}

fn gallery(out: Option<Utf8PathBuf>) -> miette::Result<()> {
    let manifest_dir = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let out = out.unwrap_or_else(|| manifest_dir.join("../gallery.svg"));

    let svg = render_gallery(&GalleryConfig::default(), &SvgOptions::default())?;
    std::fs::write(&out, svg)
        .into_diagnostic()
        .wrap_err_with(|| format!("writing {out}"))?;

    tracing::info!(path = %out, "gallery written");
    Ok(())
}

/// Worst deviations seen for one box size
#[derive(Debug, Default, Clone, Copy)]
struct SweepReport {
    /// Against the closed form `(|w cos θ| + |h sin θ|) / 2`
    projection: f64,
    /// Against halving before taking the absolute value
    halving_order: f64,
    /// Midpoint distance from the box center
    center: f64,
    /// Endpoint mismatch between θ and θ + 180°
    swap: f64,
}

impl SweepReport {
    fn merge(self, other: SweepReport) -> SweepReport {
        SweepReport {
            projection: self.projection.max(other.projection),
            halving_order: self.halving_order.max(other.halving_order),
            center: self.center.max(other.center),
            swap: self.swap.max(other.swap),
        }
    }

    fn worst(&self) -> f64 {
        self.projection
            .max(self.halving_order)
            .max(self.center)
            .max(self.swap)
    }
}

fn check_angle(step: u32, size: Size) -> SweepReport {
    let degrees = step as f64 / 10.0;
    let Ok(angle) = NormalizedAngle::cartesian(degrees) else {
        return SweepReport::default();
    };
    let theta = angle.radians();
    let diagonal = size.diagonal();

    let half = half_gradient_length(angle, size);
    let projected = (size.width() * theta.cos().abs() + size.height() * theta.sin().abs()) / 2.0;

    let between = (size.width() / diagonal).acos();
    let d = angle.degrees();
    let mirrored = (d > 90.0 && d < 180.0) || (d > 270.0 && d < 360.0);
    let to_line = if mirrored {
        PI - (theta + between)
    } else {
        theta - between
    };
    let halved_first = (to_line.cos() * (diagonal / 2.0)).abs();

    let line = gradient_line(angle, size);
    let opposite = gradient_line(angle.reversed(), size);

    SweepReport {
        projection: (half - projected).abs() / diagonal,
        halving_order: (half - halved_first).abs() / diagonal,
        center: line.midpoint().distance(size.center()) / diagonal,
        swap: line
            .start
            .distance(opposite.end)
            .max(line.end.distance(opposite.start))
            / diagonal,
    }
}

fn sweep() -> miette::Result<()> {
    let mut failures = Vec::new();

    for (width, height) in SWEEP_SIZES {
        let size = Size::try_new(width, height)
            .map_err(|e| gradline::GradientError::invalid_size(width, height, e))?;

        let report = (0..SWEEP_STEPS)
            .into_par_iter()
            .map(|step| check_angle(step, size))
            .reduce(SweepReport::default, SweepReport::merge);

        let label = size.to_string();
        eprintln!(
            "{label:>12}  projection {:.2e}  halving {:.2e}  center {:.2e}  swap {:.2e}",
            report.projection, report.halving_order, report.center, report.swap
        );
        if report.worst() > SWEEP_TOLERANCE {
            failures.push(size);
        }
    }

    if failures.is_empty() {
        tracing::info!(sizes = SWEEP_SIZES.len(), steps = SWEEP_STEPS, "sweep passed");
        Ok(())
    } else {
        Err(miette!(
            "relative error above {SWEEP_TOLERANCE:e} for {} box size(s): {failures:?}",
            failures.len()
        ))
    }
}
