use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::Path;

use surface_anchor::config::plane_demo as cfg;
use surface_anchor::config::write_json_file;
use surface_anchor::diagnostics::EstimateReport;
use surface_anchor::plane::PlaneEstimator;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = cfg::load_config(Path::new(&config_path))?;

    let points = cfg::load_points(&config.input)?;
    let estimator = PlaneEstimator::new(config.ransac.resolve());

    let (_, report) = match config.ransac.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            estimator.estimate_with_report(&points, &mut rng)
        }
        None => {
            let mut rng = rand::thread_rng();
            estimator.estimate_with_report(&points, &mut rng)
        }
    };

    print_text_summary(&report);

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: plane_demo <config.json>".to_string()
}

fn print_text_summary(report: &EstimateReport) {
    println!("Plane estimate");
    match &report.plane {
        Some(plane) => println!("  height: {:.3}", plane.height()),
        None => println!("  no plane (need at least 3 points and 1 iteration)"),
    }
    println!("  points: {}", report.total_points);
    println!(
        "  iterations: {} evaluated, {} skipped of {} requested",
        report.iterations_evaluated, report.iterations_skipped, report.iterations_requested
    );
    println!(
        "  inliers: {} (ratio {:.3})",
        report.best_inliers, report.inlier_ratio
    );
    println!("  elapsed_ms: {:.3}", report.elapsed_ms);
}
