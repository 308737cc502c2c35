//! `sotv samples` – print configured sample URLs.

use sotv_core::config::SotvConfig;

pub fn run_samples(cfg: &SotvConfig) {
    if cfg.sample_urls.is_empty() {
        println!("No sample URLs configured.");
        return;
    }
    for url in &cfg.sample_urls {
        println!("{url}");
    }
}
