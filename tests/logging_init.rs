mod common;

use anyhow::Result;

// Single test in this binary: tracing installs a process-global
// subscriber and the env var must not race other tests.
#[test]
fn logs_to_the_configured_file() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    let log_path = dir.path().join("velu.log");
    std::env::set_var("VELU_LOG", &log_path);

    velu_mobile::logging::init_tracing();
    tracing::info!(screen = "home", "navigation settled");

    let contents = std::fs::read_to_string(&log_path)?;
    assert!(contents.contains("INFO"));
    assert!(contents.contains("navigation settled"));
    assert!(contents.contains("screen=\"home\""));
    Ok(())
}
