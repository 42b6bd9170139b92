//! Standalone query host for Critterwatch.
//!
//! Runs the sampling loop and answers `get_screen_time` requests from a GUI
//! layer over stdin/stdout using length-prefixed JSON frames.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use critterwatch::host::QueryHost;
use critterwatch::platform::{ForegroundDetector, NativeDetector};
use critterwatch::{BeneficialPolicy, Classifier, TrackerConfig, TrackerService};

fn main() {
    env_logger::init();

    // Optional first argument: poll interval in seconds.
    let poll_interval = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| TrackerConfig::default().poll_interval);

    let detector: Arc<dyn ForegroundDetector> = Arc::new(NativeDetector::default());

    if let Err(e) = detector.request_authorization() {
        eprintln!("Cannot start tracking: {}", e);
        std::process::exit(1);
    }

    let service = Arc::new(TrackerService::new(
        detector,
        Arc::new(Classifier::with_default_rules()),
        BeneficialPolicy::default(),
        TrackerConfig { poll_interval },
    ));
    let handle = service.start();

    let host = QueryHost::new(Arc::clone(&service));
    let result = host.run(&mut io::stdin().lock(), &mut io::stdout().lock());

    service.stop();
    let _ = handle.join();

    if let Err(e) = result {
        // EOF is the peer closing the channel; anything else is a real fault.
        if e.kind() != io::ErrorKind::UnexpectedEof {
            eprintln!("Query host error: {}", e);
            std::process::exit(1);
        }
    }
}
