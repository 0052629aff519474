//! Build script for the gallery CLI
//!
//! Embeds build-time information (git commit, dirty status, build timestamp)
//! used by `gallery --version`.

fn main() {
    shadow_rs::ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build info");
}
