use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use generator::profile::{build_probe_readings, build_roster, GeneratorConfig};
use gui_bridge::bridge::GuiBridge;
use gui_bridge::model::SummaryModel;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::SessionSpec;
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Attendance verification workflow driver")]
struct Args {
    /// Run a single offline check-in wave and emit a summary report
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a session spec from YAML
    #[arg(long)]
    session: Option<PathBuf>,
    /// Anchor latitude used when no session spec is given
    #[arg(long, default_value_t = 12.9716)]
    latitude: f64,
    /// Anchor longitude used when no session spec is given
    #[arg(long, default_value_t = 77.5946)]
    longitude: f64,
    /// Faculty device accuracy in meters
    #[arg(long, default_value_t = 8.0)]
    accuracy: f64,
    /// Session duration in minutes
    #[arg(long, default_value_t = 10)]
    duration: i64,
    /// Roster size when the spec carries no roster
    #[arg(long, default_value_t = 24)]
    students: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Keep the HTTP bridge alive for incoming check-ins
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut spec = if let Some(path) = args.session {
        SessionSpec::load(path)?
    } else {
        SessionSpec::from_args(args.latitude, args.longitude, args.accuracy, args.duration)
    };
    if spec.roster.is_empty() {
        spec.roster = build_roster(args.students);
    }

    let session = Arc::new(spec.build_session(Utc::now())?);
    let runner = Runner::new(spec);
    let gui_bridge = GuiBridge::new(Arc::new(runner.clone()), session.clone());

    let generator_config = GeneratorConfig {
        student_count: session.roster.len(),
        seed: args.seed,
        ..GeneratorConfig::default()
    };
    let readings = build_probe_readings(
        &generator_config,
        &session.coordinates,
        session.roster.students(),
        Utc::now(),
    )?;

    if args.offline {
        let result = runner.execute(&session, &readings)?;

        println!(
            "Offline run -> session {} radius {:.1} m: present {}, check {}, proxy {}, not in list {}, rejected {}",
            session.session_id,
            session.radius_m,
            result.tally.present,
            result.tally.check,
            result.tally.proxy,
            result.tally.not_in_list,
            result.rejected.len()
        );

        let model = SummaryModel::from_result(&session.session_id, &result);
        gui_bridge.publish(&model)?;
        gui_bridge.publish_status("Offline attendance results ready.");

        let report = serde_json::to_string(&model).context("serializing summary report")?;
        let report_path = PathBuf::from("tools/data/attendance_summary.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        writeln!(file, "{}", report)?;
    }
    if args.serve {
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
