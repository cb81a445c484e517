use shadow_rs::ShadowBuilder;

fn main() {
    // Generate build metadata so `--version` reports the commit and build time
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
