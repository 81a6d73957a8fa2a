use schedule_report::aggregate::{
    aggregate_snapshots, all_staff_profiles, build_staff_directory, DaySnapshot,
};
use schedule_report::error::ScheduleError;
use schedule_report::loader::{discover_snapshots, load_json_file};
use schedule_report::{display, web};

struct CliArgs {
    web_port: Option<u16>,
    staff_path: String,
    snapshot_paths: Vec<String>,
    services_path: Option<String>,
}

fn print_usage() {
    println!("Usage:");
    println!("  schedule-report <staff.json> <snapshot.json>... [--services <catalog.json>]");
    println!("  schedule-report --snapshot-dir <dir> <staff.json> [--services <catalog.json>]");
    println!("  schedule-report web <port> <staff.json> <snapshot.json>... [--services <catalog.json>]");
}

fn parse_args(args: &[String]) -> Result<CliArgs, ScheduleError> {
    let mut rest = &args[1..];

    // Check if we should run in web mode
    let web_port = if rest.first().map(String::as_str) == Some("web") {
        let port = rest
            .get(1)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        rest = &rest[rest.len().min(2)..];
        Some(port)
    } else {
        None
    };

    let mut positional: Vec<String> = Vec::new();
    let mut services_path = None;
    let mut snapshot_dir = None;
    let mut i = 0;
    while i < rest.len() {
        match rest[i].as_str() {
            "--services" => {
                services_path = rest.get(i + 1).cloned();
                i += 2;
            }
            "--snapshot-dir" => {
                snapshot_dir = rest.get(i + 1).cloned();
                i += 2;
            }
            arg => {
                positional.push(arg.to_string());
                i += 1;
            }
        }
    }

    let staff_path = positional.first().cloned().ok_or_else(|| {
        ScheduleError::MissingDocument {
            path: "<staff registry>".to_string(),
            reason: "no staff registry file given".to_string(),
        }
    })?;

    let mut snapshot_paths: Vec<String> = positional[1..].to_vec();
    if let Some(dir) = snapshot_dir {
        for path in discover_snapshots(&dir)? {
            snapshot_paths.push(path.display().to_string());
        }
    }
    if snapshot_paths.is_empty() {
        return Err(ScheduleError::MissingDocument {
            path: "<day snapshot>".to_string(),
            reason: "no day-snapshot files given".to_string(),
        });
    }

    Ok(CliArgs {
        web_port,
        staff_path,
        snapshot_paths,
        services_path,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let raw_args: Vec<String> = std::env::args().collect();
    if raw_args.len() < 2 {
        print_usage();
        return Ok(());
    }
    let args = parse_args(&raw_args)?;

    println!("Schedule Report");
    println!("Reading schedule data from JSON files...\n");

    let registry = load_json_file(&args.staff_path)?;
    let catalog = match &args.services_path {
        Some(path) => Some(load_json_file(path)?),
        None => None,
    };

    // Snapshots load in the order given; lexicographic file-name order when
    // discovered from a directory
    let mut snapshots = Vec::new();
    for path in &args.snapshot_paths {
        snapshots.push(DaySnapshot::new(load_json_file(path)?));
    }
    log::info!("loaded {} day snapshot(s)", snapshots.len());

    let directory = build_staff_directory(&registry);
    let composite = aggregate_snapshots(&directory, &snapshots, catalog.as_ref());

    if let Some(port) = args.web_port {
        println!("Starting web server on port {}...", port);
        println!("Access the API at http://localhost:{}", port);
        web::start_server(port, directory, composite).await?;
        return Ok(());
    }

    // CLI mode: print the full report
    display::print_staff_directory(&all_staff_profiles(&registry));
    display::print_schedule_report(&directory, &composite);

    println!("{}", "=".repeat(60));
    println!("End of Report");
    println!("{}", "=".repeat(60));

    Ok(())
}
