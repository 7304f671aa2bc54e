/// Version Events v1 — Golden Fixture Harness
///
/// Loads projection fixtures, projects each one twice through the
/// kernel, and compares event counts and canonical hashes.
///
/// Usage: version_events [fixtures.json]

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use serde::Deserialize;

use version_events::hashing::canonical_hash;
use version_events::invariants::try_validate_schedule;
use version_events::{project, ProjectionConfig, SkippedCycle};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Fixture {
    start_version: String,
    start_date: String,
    num_versions: i64,
    #[serde(default)]
    skipped_cycle: SkippedCycle,
    expected_event_count: usize,
    expected_hash: String,
}

fn main() -> ExitCode {
    let fixture_paths = [
        "tests/golden/fixtures.json",
        "version_events/tests/golden/fixtures.json",
    ];

    let explicit = std::env::args().nth(1);
    let path = match explicit.as_deref() {
        Some(p) => Some(p),
        None => fixture_paths.iter().copied().find(|p| Path::new(p).exists()),
    };
    let Some(path) = path else {
        eprintln!("Could not find fixtures.json; pass a path as the first argument.");
        return ExitCode::FAILURE;
    };

    let fixtures: Vec<Fixture> = match fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|data| serde_json::from_str(&data).map_err(|e| e.to_string()))
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to load {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };
    println!("Loaded fixtures from: {}", path);

    let mut passed = 0;
    for fx in &fixtures {
        let label = format!(
            "start={} date={} n={} skipped_cycle={:?}",
            fx.start_version, fx.start_date, fx.num_versions, fx.skipped_cycle
        );
        match check_fixture(fx) {
            Ok(()) => {
                passed += 1;
                println!("[PASS] {}", label);
            }
            Err(problems) => {
                println!("[FAIL] {}:", label);
                for p in problems {
                    println!("  {}", p);
                }
            }
        }
    }

    println!("\n===========================================");
    println!("Results: {}/{} passed", passed, fixtures.len());
    if passed == fixtures.len() {
        println!("[OK] All golden projection checks PASSED.");
        ExitCode::SUCCESS
    } else {
        println!("[FAIL] Some checks failed.");
        ExitCode::FAILURE
    }
}

fn check_fixture(fx: &Fixture) -> Result<(), Vec<String>> {
    let config = ProjectionConfig::new(&fx.start_version, &fx.start_date, fx.num_versions)
        .map_err(|e| vec![e.to_string()])?
        .with_skipped_cycle(fx.skipped_cycle);

    // Run 1
    let events = project(&config).map_err(|e| vec![e.to_string()])?;
    let h1 = canonical_hash(&events);

    // Run 2 (determinism check)
    let h2 = project(&config)
        .map(|e| canonical_hash(&e))
        .map_err(|e| vec![e.to_string()])?;

    let mut problems = Vec::new();
    if h1 != fx.expected_hash {
        problems.push(format!("Hash mismatch: got={} expected={}", h1, fx.expected_hash));
    }
    if h1 != h2 {
        problems.push(format!("Determinism fail: run1={} run2={}", h1, h2));
    }
    if events.len() != fx.expected_event_count {
        problems.push(format!(
            "Event count: got={} expected={}",
            events.len(),
            fx.expected_event_count
        ));
    }
    if let Err(e) = try_validate_schedule(&events) {
        problems.push(e.to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}
